//! Main entry point for avatar generation.
//!
//! [`render`] resolves the seed, hashes it, runs the gradient and pixel
//! engines and assembles the SVG. [`plan`] stops before assembly and returns
//! the intermediate values, which is what `radiance inspect` prints.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use thiserror::Error;

use radiance_spec::{AvatarConfig, BackendError, Digest, DigestAlgorithm, DigestError};

use crate::gradient::{compute_background, Background};
use crate::pixel::{compute_pixel_cells, PixelCell};
use crate::rng::{SeedSource, ThreadSeedSource};
use crate::svg::{self, DocumentParts};

/// Prefix of [`AvatarSvg::to_data_uri`].
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Errors from avatar generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Digest error: {0}")]
    Digest(#[from] DigestError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Digest(DigestError::OutOfRange { .. }) => "AVATAR_001",
            GenerateError::Digest(_) => "AVATAR_002",
        }
    }

    fn category(&self) -> &'static str {
        "avatar"
    }
}

/// Where the seed of an avatar came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedOrigin {
    /// Supplied by the caller.
    Provided,
    /// Synthesized by a [`SeedSource`] because none was supplied.
    Random,
}

/// Intermediate results of one avatar, before SVG assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarPlan {
    /// The seed actually hashed. Pass it back in to reproduce the avatar.
    pub seed: String,
    pub seed_origin: SeedOrigin,
    pub digest_algorithm: DigestAlgorithm,
    pub digest: String,
    /// The config after clamping.
    pub config: AvatarConfig,
    pub background: Background,
    pub pixel_cells: Vec<PixelCell>,
}

impl AvatarPlan {
    /// Assemble the SVG document.
    pub fn to_svg(&self) -> String {
        svg::assemble(DocumentParts {
            digest: &self.digest,
            config: &self.config,
            background: &self.background,
            cells: &self.pixel_cells,
        })
    }
}

/// A rendered avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSvg {
    /// The seed actually hashed.
    pub seed: String,
    pub seed_origin: SeedOrigin,
    /// Hex digest of the seed.
    pub digest: String,
    /// The SVG document.
    pub svg: String,
}

impl AvatarSvg {
    /// The document as a `data:image/svg+xml;base64,` URI.
    pub fn to_data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(self.svg.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.svg
    }

    pub fn into_string(self) -> String {
        self.svg
    }
}

/// Render an avatar. Absent or empty seeds get a random one.
///
/// # Example
/// ```
/// use radiance_backend_svg::render;
/// use radiance_spec::AvatarConfig;
///
/// let config = AvatarConfig::builder().size(128).text("RA").build();
/// let a = render(Some("ada@example.com"), &config).unwrap();
/// let b = render(Some("ada@example.com"), &config).unwrap();
/// assert_eq!(a, b);
/// assert!(a.svg.starts_with("<svg"));
/// ```
pub fn render(seed: Option<&str>, config: &AvatarConfig) -> Result<AvatarSvg, GenerateError> {
    render_with_source(seed, config, &mut ThreadSeedSource)
}

/// Render with an explicit source for missing seeds.
pub fn render_with_source(
    seed: Option<&str>,
    config: &AvatarConfig,
    source: &mut dyn SeedSource,
) -> Result<AvatarSvg, GenerateError> {
    let plan = plan_with_source(seed, config, source)?;
    let svg = plan.to_svg();
    tracing::debug!(bytes = svg.len(), "assembled svg");

    Ok(AvatarSvg {
        seed: plan.seed,
        seed_origin: plan.seed_origin,
        digest: plan.digest,
        svg,
    })
}

/// Compute the background and overlay without assembling the document.
pub fn plan(seed: Option<&str>, config: &AvatarConfig) -> Result<AvatarPlan, GenerateError> {
    plan_with_source(seed, config, &mut ThreadSeedSource)
}

/// [`plan`] with an explicit source for missing seeds.
pub fn plan_with_source(
    seed: Option<&str>,
    config: &AvatarConfig,
    source: &mut dyn SeedSource,
) -> Result<AvatarPlan, GenerateError> {
    let config = config.normalized();
    let (seed, seed_origin) = resolve_seed(seed, source);
    let digest = Digest::from_seed(&seed, config.digest_algorithm);

    tracing::debug!(
        origin = ?seed_origin,
        algorithm = %config.digest_algorithm,
        digest = %digest,
        "resolved seed"
    );

    let background = compute_background(&seed, &digest, &config)?;
    if let Background::Solid { color, reason } = &background {
        tracing::debug!(color = %color, reason = ?reason, "solid background");
    }

    let pixel_cells = compute_pixel_cells(&digest, &config)?;
    tracing::trace!(cells = pixel_cells.len(), "pixel overlay");

    Ok(AvatarPlan {
        seed,
        seed_origin,
        digest_algorithm: config.digest_algorithm,
        digest: digest.as_str().to_string(),
        config,
        background,
        pixel_cells,
    })
}

fn resolve_seed(seed: Option<&str>, source: &mut dyn SeedSource) -> (String, SeedOrigin) {
    match seed.filter(|s| !s.is_empty()) {
        Some(seed) => (seed.to_string(), SeedOrigin::Provided),
        None => (source.next_seed(), SeedOrigin::Random),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeterministicSeedSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_is_deterministic() {
        let config = AvatarConfig::builder().text("JD").squircle().build();
        let a = render(Some("john@example.com"), &config).unwrap();
        let b = render(Some("john@example.com"), &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed_origin, SeedOrigin::Provided);
    }

    #[test]
    fn test_empty_seed_uses_source() {
        let config = AvatarConfig::default();
        let mut source = DeterministicSeedSource::new(7);
        let avatar = render_with_source(Some(""), &config, &mut source).unwrap();

        let mut replay = DeterministicSeedSource::new(7);
        assert_eq!(avatar.seed, replay.next_seed());
        assert_eq!(avatar.seed_origin, SeedOrigin::Random);

        let again = render(Some(&avatar.seed), &config).unwrap();
        assert_eq!(again.svg, avatar.svg);
    }

    #[test]
    fn test_random_seeds_differ() {
        let config = AvatarConfig::default();
        let a = render(None, &config).unwrap();
        let b = render(None, &config).unwrap();
        assert_ne!(a.seed, b.seed);
        assert_ne!(a.svg, b.svg);
    }

    #[test]
    fn test_data_uri() {
        let avatar = render(Some("uri"), &AvatarConfig::default()).unwrap();
        let uri = avatar.to_data_uri();
        assert!(uri.starts_with(DATA_URI_PREFIX));
        let decoded = STANDARD.decode(&uri[DATA_URI_PREFIX.len()..]).unwrap();
        assert_eq!(decoded, avatar.svg.as_bytes());
    }

    #[test]
    fn test_plan_normalizes_config() {
        let mut config = AvatarConfig::default();
        config.pixel_grid_size = 6;
        config.pixel_opacity = 1.5;
        config.fade_distance = 500;

        let plan = plan(Some("clamp"), &config).unwrap();
        assert_eq!(plan.config.pixel_grid_size, 7);
        assert_eq!(plan.config.pixel_opacity, 1.0);
        assert_eq!(plan.config.fade_distance, 200);
    }

    #[test]
    fn test_digest_algorithm_changes_output() {
        let sha = AvatarConfig::default();
        let blake = AvatarConfig::builder()
            .digest_algorithm(DigestAlgorithm::Blake3)
            .build();
        let a = render(Some("algo"), &sha).unwrap();
        let b = render(Some("algo"), &blake).unwrap();
        assert_ne!(a.digest, b.digest);
        assert_eq!(a.digest.len(), 64);
        assert_eq!(b.digest.len(), 64);
    }

    #[test]
    fn test_error_codes() {
        let err = GenerateError::from(DigestError::OutOfRange {
            offset: 60,
            length: 8,
            available: 64,
        });
        assert_eq!(err.code(), "AVATAR_001");
        assert_eq!(err.category(), "avatar");
        assert_eq!(GenerateError::from(DigestError::Empty).code(), "AVATAR_002");
    }

    #[test]
    fn test_plan_serializes() {
        let plan = plan(Some("json"), &AvatarConfig::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["seed"], "json");
        assert_eq!(json["seed_origin"], "provided");
        assert_eq!(json["background"]["kind"], "gradient");
        assert_eq!(json["background"]["layers"].as_array().unwrap().len(), 7);
    }
}
