//! Loading avatar configs from disk.
//!
//! Configs are JSON files holding any subset of the `AvatarConfig` fields;
//! missing fields take their defaults and unknown fields are rejected.

use radiance_spec::AvatarConfig;
use std::path::{Path, PathBuf};

use crate::commands::json_output::{error_codes, JsonError};

/// Recognized config extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors that can occur during config loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown config extension '.{}' (expected .json)", ext),
                None => write!(f, "config file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => write!(f, "failed to parse config: {}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }

    /// Convert into a JSON error entry.
    pub fn to_json_error(&self, path: &Path) -> JsonError {
        JsonError::new(self.code(), self.to_string()).with_file(path.display().to_string())
    }
}

/// Load a config file, dispatching on its extension.
pub fn load_config(path: &Path) -> Result<AvatarConfig, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => load_json_config(path),
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

fn load_json_config(path: &Path) -> Result<AvatarConfig, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = AvatarConfig::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loaded config");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiance_spec::AvatarShape;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_config() {
        let file = write_config(r#"{ "size": 128, "shape": "squircle", "text": "RS" }"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.size, 128);
        assert_eq!(config.shape, AvatarShape::Squircle);
        assert_eq!(config.text.as_deref(), Some("RS"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let file = write_config(r#"{ "colour": "red" }"#);
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert_eq!(err.code(), "CLI_003");
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_config(Path::new("avatar.yaml")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown config extension '.yaml' (expected .json)"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/radiance.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert_eq!(err.code(), "CLI_001");
    }
}
