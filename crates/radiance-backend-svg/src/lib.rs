//! Radiance SVG Backend
//!
//! Deterministic avatar generation: a seven-layer mesh gradient, a
//! horizontally symmetric pixel overlay and optional centered text, all
//! derived from the digest of a seed string.
//!
//! # Determinism
//!
//! Every visual decision reads from the seed digest. The only randomness is
//! the [`rng::SeedSource`] consulted when no seed is supplied, and the seed
//! it produces is returned so the avatar can be reproduced.
//!
//! # Example
//!
//! ```
//! use radiance_backend_svg::render;
//! use radiance_spec::AvatarConfig;
//!
//! let config = AvatarConfig::builder()
//!     .size(256)
//!     .circle()
//!     .text("JD")
//!     .pixel_shape_mix()
//!     .build();
//!
//! let avatar = render(Some("jane@example.com"), &config).unwrap();
//! assert!(avatar.svg.contains("<clipPath"));
//! assert!(avatar.to_data_uri().starts_with("data:image/svg+xml;base64,"));
//! ```

pub mod color;
pub mod generate;
pub mod gradient;
pub mod pixel;
pub mod rng;
pub mod svg;
pub mod zone;

pub use generate::{
    plan, plan_with_source, render, render_with_source, AvatarPlan, AvatarSvg, GenerateError,
    SeedOrigin, DATA_URI_PREFIX,
};
pub use gradient::{Background, GradientLayer, MeshGradient, SolidReason};
pub use pixel::{CellShape, PixelCell};
pub use rng::{DeterministicSeedSource, SeedSource, ThreadSeedSource};
