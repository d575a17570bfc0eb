//! Radiance Avatar Spec Library
//!
//! This crate provides the configuration value, color literals, and seed
//! digests shared by the Radiance generator and CLI.
//!
//! # Example
//!
//! ```
//! use radiance_spec::{AvatarConfig, Digest, DigestAlgorithm};
//!
//! let config = AvatarConfig::builder()
//!     .size(256)
//!     .circle()
//!     .base_color("#8e8dcb")
//!     .pixel_density(0.4)
//!     .build();
//!
//! let digest = Digest::from_seed("Semilla", config.digest_algorithm);
//! let hue_anchor = digest.extract(0, 4).unwrap() % 360;
//! assert!(hue_anchor < 360);
//! ```
//!
//! # Modules
//!
//! - [`color`]: Color literal parsing and HSL/RGB conversion
//! - [`config`]: Avatar configuration value and builder
//! - [`error`]: Error types
//! - [`hash`]: Seed digests and hash-to-number extraction

pub mod color;
pub mod config;
pub mod error;
pub mod hash;

// Re-export commonly used types at the crate root
pub use color::{ColorValue, Hsl};
pub use config::{
    AvatarConfig, AvatarConfigBuilder, AvatarShape, PixelColorMode, PixelShape,
};
pub use error::{BackendError, ColorParseError, DigestError, SpecError};
pub use hash::{extract_number, Digest, DigestAlgorithm};
