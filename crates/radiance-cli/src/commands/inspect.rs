//! Inspect command implementation
//!
//! Prints the values derived from a seed: digest, background layers and the
//! pixel overlay summary.

use anyhow::{Context, Result};
use colored::Colorize;
use radiance_backend_svg::zone::GradientZone;
use radiance_backend_svg::{plan, AvatarPlan, Background, CellShape, SolidReason};
use radiance_spec::{BackendError, Hsl};
use std::process::ExitCode;

use super::json_output::{error_codes, InspectOutput, JsonError};
use super::ConfigOverrides;

/// Run the inspect command
///
/// # Arguments
/// * `seed` - Seed string (random when absent)
/// * `overrides` - Config file and flag overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(seed: Option<&str>, overrides: &ConfigOverrides, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(seed, overrides)
    } else {
        run_human(seed, overrides)
    }
}

fn run_human(seed: Option<&str>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let config = overrides.resolve_with_context()?;
    let plan = plan(seed, &config).context("failed to derive avatar")?;
    print!("{}", format_plan(&plan));
    Ok(ExitCode::SUCCESS)
}

fn run_json(seed: Option<&str>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let result = overrides
        .resolve()
        .map_err(|e| e.to_json_error())
        .and_then(|config| {
            plan(seed, &config).map_err(|e| JsonError::new(e.code(), e.to_string()))
        });

    let output = match result {
        Ok(plan) => InspectOutput::success(plan),
        Err(error) => InspectOutput::failure(vec![error]),
    };
    let success = output.success;

    let json = serde_json::to_string_pretty(&output)
        .with_context(|| format!("{}: failed to serialize output", error_codes::JSON_SERIALIZE))?;
    println!("{}", json);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Render a plan as colored, human-readable lines.
pub fn format_plan(plan: &AvatarPlan) -> String {
    let mut lines = vec![
        format!("{} {}", "Seed:".cyan().bold(), plan.seed),
        format!(
            "{} {} ({})",
            "Digest:".cyan().bold(),
            plan.digest,
            plan.digest_algorithm
        ),
    ];

    match &plan.background {
        Background::Solid { color, reason } => {
            let why = match reason {
                SolidReason::EasterEgg => "reserved seed",
                SolidReason::Configured => "configured",
            };
            lines.push(format!("{} {} ({})", "Solid:".cyan().bold(), color, why));
        }
        Background::Gradient(gradient) => {
            lines.push(format!("{}", "Layers:".cyan().bold()));
            for (index, layer) in gradient.layers.iter().enumerate() {
                let zone = GradientZone::for_layer(index)
                    .map(|z| z.as_str())
                    .unwrap_or("-");
                lines.push(format!(
                    "  {} {:<13} hsl({:>3}, {}%, {}%) {} at ({:>3}%, {:>3}%) fade {}%",
                    index,
                    zone,
                    layer.hue,
                    layer.saturation,
                    layer.lightness,
                    layer.hex(),
                    layer.x,
                    layer.y,
                    layer.fade
                ));
            }
            let base = gradient.base;
            let base_hex = Hsl::new(base.hue as f64, base.saturation as f64, base.lightness as f64)
                .to_hex();
            lines.push(format!(
                "{} hsl({}, {}%, {}%) {} (drawn as {})",
                "Base:".cyan().bold(),
                base.hue,
                base.saturation,
                base.lightness,
                base_hex,
                base.hex_with_saturation(plan.config.saturation)
            ));
        }
    }

    if plan.config.pixel_pattern {
        let grid = plan.config.pixel_grid_size;
        let circles = plan
            .pixel_cells
            .iter()
            .filter(|c| c.shape == CellShape::Circle)
            .count();
        lines.push(format!(
            "{} {} of {} cells on a {}x{} grid ({} circles)",
            "Pixels:".cyan().bold(),
            plan.pixel_cells.len(),
            grid * grid,
            grid,
            grid,
            circles
        ));
    } else {
        lines.push(format!("{} {}", "Pixels:".cyan().bold(), "disabled".dimmed()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
