//! Generate command implementation
//!
//! Renders one avatar and writes the SVG (or its data URI) to stdout or a
//! file.

use anyhow::{Context, Result};
use colored::Colorize;
use radiance_backend_svg::{render, AvatarSvg, SeedOrigin};
use radiance_spec::BackendError;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    error_codes, seed_origin_name, GenerateOutput, GenerateResult, JsonError,
};
use super::ConfigOverrides;

/// Run the generate command
///
/// # Arguments
/// * `seed` - Seed string (random when absent)
/// * `overrides` - Config file and flag overrides
/// * `base64` - Emit a data URI instead of raw SVG
/// * `output` - Output file path (default: stdout)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    seed: Option<&str>,
    overrides: &ConfigOverrides,
    base64: bool,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(seed, overrides, base64, output)
    } else {
        run_human(seed, overrides, base64, output)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(
    seed: Option<&str>,
    overrides: &ConfigOverrides,
    base64: bool,
    output: Option<&str>,
) -> Result<ExitCode> {
    let config = overrides.resolve_with_context()?;
    let avatar = render(seed, &config).context("failed to render avatar")?;
    let content = encode(&avatar, base64);

    match output {
        Some(path) => {
            write_output(Path::new(path), &content)?;
            println!("{} {}", "Seed:".cyan().bold(), avatar.seed);
            println!("{} {}", "Digest:".dimmed(), avatar.digest);
            println!(
                "{} {} ({} bytes)",
                "Wrote:".green().bold(),
                path,
                content.len()
            );
        }
        None => {
            if avatar.seed_origin == SeedOrigin::Random {
                eprintln!("{} {}", "Random seed:".yellow(), avatar.seed);
            }
            println!("{}", content);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(
    seed: Option<&str>,
    overrides: &ConfigOverrides,
    base64: bool,
    output: Option<&str>,
) -> Result<ExitCode> {
    let output_json = match generate_json(seed, overrides, base64, output) {
        Ok(result) => GenerateOutput::success(result),
        Err(error) => GenerateOutput::failure(vec![error]),
    };
    let success = output_json.success;

    let json = serde_json::to_string_pretty(&output_json)
        .with_context(|| format!("{}: failed to serialize output", error_codes::JSON_SERIALIZE))?;
    println!("{}", json);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn generate_json(
    seed: Option<&str>,
    overrides: &ConfigOverrides,
    base64: bool,
    output: Option<&str>,
) -> std::result::Result<GenerateResult, JsonError> {
    let config = overrides.resolve().map_err(|e| e.to_json_error())?;
    let avatar = render(seed, &config).map_err(|e| JsonError::new(e.code(), e.to_string()))?;
    let content = encode(&avatar, base64);

    if let Some(path) = output {
        write_output(Path::new(path), &content).map_err(|e| {
            JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e)).with_file(path)
        })?;
    }

    Ok(GenerateResult {
        seed: avatar.seed.clone(),
        seed_origin: seed_origin_name(avatar.seed_origin).to_string(),
        digest: avatar.digest.clone(),
        format: if base64 { "data_uri" } else { "svg" }.to_string(),
        path: output.map(str::to_string),
        bytes: content.len(),
        content: output.is_none().then_some(content),
    })
}

fn encode(avatar: &AvatarSvg, base64: bool) -> String {
    if base64 {
        avatar.to_data_uri()
    } else {
        avatar.svg.clone()
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote avatar");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("avatar.svg");
        let overrides = ConfigOverrides {
            size: Some(64),
            ..ConfigOverrides::default()
        };

        let code = run(
            Some("writer"),
            &overrides,
            false,
            Some(path.to_str().unwrap()),
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="64""#));
    }

    #[test]
    fn test_generate_json_result() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("avatar.txt");
        let result = generate_json(
            Some("json"),
            &ConfigOverrides::default(),
            true,
            Some(path.to_str().unwrap()),
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(result.bytes, written.len());
        assert_eq!(result.format, "data_uri");
        assert_eq!(result.seed, "json");
        assert_eq!(result.seed_origin, "provided");
        assert!(result.content.is_none());
    }

    #[test]
    fn test_generate_json_inline_content() {
        let result = generate_json(None, &ConfigOverrides::default(), false, None).unwrap();
        assert_eq!(result.seed_origin, "random");
        assert_eq!(result.seed.len(), 32);
        assert_eq!(result.content.as_deref().map(str::len), Some(result.bytes));
    }

    #[test]
    fn test_generate_json_reports_bad_config() {
        let overrides = ConfigOverrides {
            config_path: Some("avatar.toml".to_string()),
            ..ConfigOverrides::default()
        };
        let err = generate_json(Some("x"), &overrides, false, None).unwrap_err();
        assert_eq!(err.code, "CLI_002");
    }
}
