//! CLI command implementations.

pub mod generate;
pub mod inspect;
pub mod json_output;

use anyhow::Context;
use radiance_spec::{AvatarConfig, AvatarConfigBuilder, AvatarShape, ColorValue};
use std::path::Path;

use crate::input::{load_config, InputError};
use json_output::{error_codes, JsonError};

/// Config options given on the command line.
///
/// Flags are layered over the config file, which is layered over the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub size: Option<u32>,
    pub shape: Option<String>,
    pub text: Option<String>,
    pub base_color: Option<String>,
    pub solid_color: Option<String>,
    pub no_pixels: bool,
}

/// Failure while building the effective config.
#[derive(Debug)]
pub enum ConfigError {
    Input { path: String, error: InputError },
    Color { flag: &'static str, message: String },
    Shape(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Input { error, .. } => write!(f, "{}", error),
            ConfigError::Color { flag, message } => write!(f, "invalid --{}: {}", flag, message),
            ConfigError::Shape(message) => write!(f, "invalid --shape: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Input { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl ConfigError {
    /// Convert into a JSON error entry.
    pub fn to_json_error(&self) -> JsonError {
        match self {
            ConfigError::Input { path, error } => error.to_json_error(Path::new(path)),
            ConfigError::Color { .. } | ConfigError::Shape(_) => {
                JsonError::new(error_codes::INVALID_OPTION, self.to_string())
            }
        }
    }
}

impl ConfigOverrides {
    /// Build the effective config.
    ///
    /// Unlike config files, color flags are parsed strictly: a typo on the
    /// command line is an error rather than a silently ignored value.
    pub fn resolve(&self) -> Result<AvatarConfig, ConfigError> {
        let base = match &self.config_path {
            Some(path) => load_config(Path::new(path)).map_err(|error| ConfigError::Input {
                path: path.clone(),
                error,
            })?,
            None => AvatarConfig::default(),
        };

        let mut builder = AvatarConfigBuilder::from_config(base);
        if let Some(size) = self.size {
            builder = builder.size(size);
        }
        if let Some(shape) = &self.shape {
            let shape: AvatarShape = shape.parse().map_err(ConfigError::Shape)?;
            builder = builder.shape(shape);
        }
        if let Some(text) = &self.text {
            builder = builder.text(text.as_str());
        }
        if let Some(literal) = &self.base_color {
            parse_color("base-color", literal)?;
            builder = builder.base_color(literal);
        }
        if let Some(literal) = &self.solid_color {
            parse_color("solid-color", literal)?;
            builder = builder.solid_color(literal);
        }
        if self.no_pixels {
            builder = builder.enable_pixel_pattern(false);
        }

        Ok(builder.build())
    }

    /// [`ConfigOverrides::resolve`] for human-readable commands.
    pub fn resolve_with_context(&self) -> anyhow::Result<AvatarConfig> {
        self.resolve().context("failed to build avatar config")
    }
}

fn parse_color(flag: &'static str, literal: &str) -> Result<ColorValue, ConfigError> {
    ColorValue::parse(literal).map_err(|e| ConfigError::Color {
        flag,
        message: e.to_string(),
    })
}
