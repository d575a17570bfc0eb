//! Avatar configuration types.
//!
//! An [`AvatarConfig`] is an immutable value holding every visual parameter.
//! It can be assembled with [`AvatarConfigBuilder`], which clamps each value
//! as it is set, or deserialized from JSON. Either way the renderer calls
//! [`AvatarConfig::normalized`] before use, so out-of-range values are never
//! observed by the generators.

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::ColorValue;
use crate::hash::DigestAlgorithm;

/// Default avatar edge length in pixels.
pub const DEFAULT_SIZE: u32 = 512;
/// Default fade-distance base.
pub const DEFAULT_FADE_DISTANCE: u32 = 50;
/// Smallest allowed fade-distance base.
pub const MIN_FADE_DISTANCE: u32 = 40;
/// Largest allowed fade-distance base.
pub const MAX_FADE_DISTANCE: u32 = 200;
/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "monospace";
/// Default font size ratio when auto sizing is disabled.
pub const DEFAULT_FONT_SIZE_RATIO: f64 = 0.5;
/// Smallest allowed font size ratio.
pub const MIN_FONT_SIZE_RATIO: f64 = 0.01;
/// Largest allowed font size ratio.
pub const MAX_FONT_SIZE_RATIO: f64 = 1.0;
/// Default pixel grid size.
pub const DEFAULT_PIXEL_GRID_SIZE: u32 = 13;
/// Smallest allowed pixel grid size.
pub const MIN_PIXEL_GRID_SIZE: u32 = 3;
/// Default pixel overlay opacity.
pub const DEFAULT_PIXEL_OPACITY: f64 = 0.3;
/// Default pixel density.
pub const DEFAULT_PIXEL_DENSITY: f64 = 0.25;
/// Upper bound for saturation, contrast and shadow multipliers.
pub const MAX_MULTIPLIER: f64 = 1000.0;

/// Outline of the avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarShape {
    /// Full square.
    #[default]
    Square,
    /// Inscribed circle.
    Circle,
    /// Square with rounded corners.
    Squircle,
}

impl AvatarShape {
    /// Returns the shape as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarShape::Square => "square",
            AvatarShape::Circle => "circle",
            AvatarShape::Squircle => "squircle",
        }
    }
}

impl std::fmt::Display for AvatarShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AvatarShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(AvatarShape::Square),
            "circle" => Ok(AvatarShape::Circle),
            "squircle" => Ok(AvatarShape::Squircle),
            _ => Err(format!("unknown avatar shape: {}", s)),
        }
    }
}

/// How overlay pixels are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelColorMode {
    /// Harmonic palette derived from the digest.
    #[default]
    Gradient,
    /// White pixels only.
    Monochrome,
    /// Single complementary accent color.
    Accent,
}

impl PixelColorMode {
    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelColorMode::Gradient => "gradient",
            PixelColorMode::Monochrome => "monochrome",
            PixelColorMode::Accent => "accent",
        }
    }
}

impl std::str::FromStr for PixelColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient" => Ok(PixelColorMode::Gradient),
            "monochrome" => Ok(PixelColorMode::Monochrome),
            "accent" => Ok(PixelColorMode::Accent),
            _ => Err(format!("unknown pixel color mode: {}", s)),
        }
    }
}

/// Shape of overlay pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelShape {
    /// Every pixel is a square.
    #[default]
    Squares,
    /// Every pixel is a circle.
    Circles,
    /// Per-cell choice read from the digest.
    Mix,
}

impl PixelShape {
    /// Returns the shape as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelShape::Squares => "squares",
            PixelShape::Circles => "circles",
            PixelShape::Mix => "mix",
        }
    }
}

impl std::str::FromStr for PixelShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squares" => Ok(PixelShape::Squares),
            "circles" => Ok(PixelShape::Circles),
            "mix" => Ok(PixelShape::Mix),
            _ => Err(format!("unknown pixel shape: {}", s)),
        }
    }
}

/// Complete set of visual parameters for one avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarConfig {
    /// Edge length in pixels.
    pub size: u32,
    /// Avatar outline.
    pub shape: AvatarShape,
    /// Hue anchor for the gradient. Unparsable literals are ignored.
    #[serde(
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_color: Option<ColorValue>,
    /// Flat fill replacing the gradient. Unparsable literals are ignored.
    #[serde(
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub solid_color: Option<ColorValue>,
    /// Saturation multiplier (0-1000).
    pub saturation: f64,
    /// Contrast multiplier (0-1000).
    pub contrast: f64,
    /// Base fade radius of gradient layers, in percent (40-200).
    pub fade_distance: u32,
    /// Centered text. Empty text is treated as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Font family placed before the fallback chain.
    pub font_family: String,
    /// Font size as a fraction of the avatar size (0.01-1.0).
    pub font_size_ratio: f64,
    /// Derive the font size ratio from the text length.
    pub font_size_ratio_auto: bool,
    /// Text shadow intensity (0-1000).
    pub text_shadow: f64,
    /// Draw the pixel overlay.
    pub pixel_pattern: bool,
    /// Pixel grid rows and columns (odd, >= 3).
    pub pixel_grid_size: u32,
    /// Pixel overlay opacity (0-1).
    pub pixel_opacity: f64,
    /// Fraction of cells turned on (0-1).
    pub pixel_density: f64,
    /// Pixel coloring mode.
    pub pixel_color_mode: PixelColorMode,
    /// Pixel shape mode.
    pub pixel_shape: PixelShape,
    /// Hash function used to derive the digest.
    pub digest_algorithm: DigestAlgorithm,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            shape: AvatarShape::Square,
            base_color: None,
            solid_color: None,
            saturation: 1.0,
            contrast: 1.0,
            fade_distance: DEFAULT_FADE_DISTANCE,
            text: None,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_ratio: DEFAULT_FONT_SIZE_RATIO,
            font_size_ratio_auto: true,
            text_shadow: 1.0,
            pixel_pattern: true,
            pixel_grid_size: DEFAULT_PIXEL_GRID_SIZE,
            pixel_opacity: DEFAULT_PIXEL_OPACITY,
            pixel_density: DEFAULT_PIXEL_DENSITY,
            pixel_color_mode: PixelColorMode::Gradient,
            pixel_shape: PixelShape::Squares,
            digest_algorithm: DigestAlgorithm::Sha256,
        }
    }
}

impl AvatarConfig {
    /// Creates a new config builder starting from the defaults.
    pub fn builder() -> AvatarConfigBuilder {
        AvatarConfigBuilder::new()
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns a copy with every parameter clamped into its valid range.
    pub fn normalized(&self) -> Self {
        Self {
            size: self.size.max(1),
            shape: self.shape,
            base_color: self.base_color,
            solid_color: self.solid_color,
            saturation: clamp_multiplier(self.saturation),
            contrast: clamp_multiplier(self.contrast),
            fade_distance: clamp_fade_distance(self.fade_distance),
            text: self.text.clone().filter(|t| !t.is_empty()),
            font_family: self.font_family.clone(),
            font_size_ratio: clamp_font_size_ratio(self.font_size_ratio),
            font_size_ratio_auto: self.font_size_ratio_auto,
            text_shadow: clamp_multiplier(self.text_shadow),
            pixel_pattern: self.pixel_pattern,
            pixel_grid_size: normalize_grid_size(self.pixel_grid_size),
            pixel_opacity: clamp_unit(self.pixel_opacity),
            pixel_density: clamp_unit(self.pixel_density),
            pixel_color_mode: self.pixel_color_mode,
            pixel_shape: self.pixel_shape,
            digest_algorithm: self.digest_algorithm,
        }
    }
}

/// Forces a grid size odd (rounding even sizes up) and at least 3.
pub fn normalize_grid_size(size: u32) -> u32 {
    let odd = if size % 2 == 0 { size.saturating_add(1) } else { size };
    odd.max(MIN_PIXEL_GRID_SIZE)
}

/// Clamps a fade-distance base into 40-200.
pub fn clamp_fade_distance(value: u32) -> u32 {
    value.clamp(MIN_FADE_DISTANCE, MAX_FADE_DISTANCE)
}

/// Clamps a font size ratio into 0.01-1.0. NaN maps to the minimum.
pub fn clamp_font_size_ratio(value: f64) -> f64 {
    value.max(MIN_FONT_SIZE_RATIO).min(MAX_FONT_SIZE_RATIO)
}

/// Clamps into 0-1. NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Clamps a multiplier into 0-1000. NaN maps to the neutral 1.0.
pub fn clamp_multiplier(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(0.0, MAX_MULTIPLIER)
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<ColorValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|literal| ColorValue::parse(&literal).ok()))
}

/// Fluent builder for [`AvatarConfig`].
///
/// Every setter clamps its value immediately, mirroring the ranges enforced
/// by [`AvatarConfig::normalized`].
///
/// # Example
/// ```
/// use radiance_spec::config::AvatarConfig;
///
/// let config = AvatarConfig::builder()
///     .size(256)
///     .circle()
///     .text("AB")
///     .pixel_grid_size(6)
///     .build();
///
/// assert_eq!(config.pixel_grid_size, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AvatarConfigBuilder {
    config: AvatarConfig,
}

impl AvatarConfigBuilder {
    /// Creates a builder holding the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing config.
    pub fn from_config(config: AvatarConfig) -> Self {
        Self { config }
    }

    /// Sets the edge length in pixels (at least 1).
    pub fn size(mut self, size: u32) -> Self {
        self.config.size = size.max(1);
        self
    }

    /// Sets the avatar outline.
    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.config.shape = shape;
        self
    }

    /// Uses a square outline.
    pub fn square(self) -> Self {
        self.shape(AvatarShape::Square)
    }

    /// Uses a circular outline.
    pub fn circle(self) -> Self {
        self.shape(AvatarShape::Circle)
    }

    /// Uses a rounded-square outline.
    pub fn squircle(self) -> Self {
        self.shape(AvatarShape::Squircle)
    }

    /// Sets the base color. An unparsable literal clears it.
    pub fn base_color(mut self, literal: &str) -> Self {
        self.config.base_color = ColorValue::parse(literal).ok();
        self
    }

    /// Sets the solid color. An unparsable literal clears it.
    pub fn solid_color(mut self, literal: &str) -> Self {
        self.config.solid_color = ColorValue::parse(literal).ok();
        self
    }

    /// Sets the saturation multiplier (clamped to 0-1000).
    pub fn saturation(mut self, value: f64) -> Self {
        self.config.saturation = clamp_multiplier(value);
        self
    }

    /// Sets the contrast multiplier (clamped to 0-1000).
    pub fn contrast(mut self, value: f64) -> Self {
        self.config.contrast = clamp_multiplier(value);
        self
    }

    /// Sets the fade-distance base (clamped to 40-200).
    pub fn fade_distance(mut self, value: u32) -> Self {
        self.config.fade_distance = clamp_fade_distance(value);
        self
    }

    /// Sets the centered text. An empty string removes it.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.config.text = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    /// Sets an explicit font size ratio and disables auto sizing.
    pub fn font_size_ratio(mut self, ratio: f64) -> Self {
        self.config.font_size_ratio = clamp_font_size_ratio(ratio);
        self.config.font_size_ratio_auto = false;
        self
    }

    /// Enables or disables font auto sizing.
    pub fn font_size_ratio_auto(mut self, enabled: bool) -> Self {
        self.config.font_size_ratio_auto = enabled;
        self
    }

    /// Sets the text shadow intensity (clamped to 0-1000).
    pub fn text_shadow(mut self, intensity: f64) -> Self {
        self.config.text_shadow = clamp_multiplier(intensity);
        self
    }

    /// Enables or disables the pixel overlay.
    pub fn enable_pixel_pattern(mut self, enabled: bool) -> Self {
        self.config.pixel_pattern = enabled;
        self
    }

    /// Sets the pixel grid size (forced odd and at least 3).
    pub fn pixel_grid_size(mut self, size: u32) -> Self {
        self.config.pixel_grid_size = normalize_grid_size(size);
        self
    }

    /// Sets the pixel overlay opacity (clamped to 0-1).
    pub fn pixel_opacity(mut self, opacity: f64) -> Self {
        self.config.pixel_opacity = clamp_unit(opacity);
        self
    }

    /// Sets the pixel density (clamped to 0-1).
    pub fn pixel_density(mut self, density: f64) -> Self {
        self.config.pixel_density = clamp_unit(density);
        self
    }

    /// Sets the pixel color mode.
    pub fn pixel_color_mode(mut self, mode: PixelColorMode) -> Self {
        self.config.pixel_color_mode = mode;
        self
    }

    /// Colors pixels from the harmonic palette.
    pub fn pixel_color_gradient(self) -> Self {
        self.pixel_color_mode(PixelColorMode::Gradient)
    }

    /// Colors pixels white.
    pub fn pixel_color_monochrome(self) -> Self {
        self.pixel_color_mode(PixelColorMode::Monochrome)
    }

    /// Colors pixels with the complementary accent.
    pub fn pixel_color_accent(self) -> Self {
        self.pixel_color_mode(PixelColorMode::Accent)
    }

    /// Sets the pixel shape mode.
    pub fn pixel_shape(mut self, shape: PixelShape) -> Self {
        self.config.pixel_shape = shape;
        self
    }

    /// Draws square pixels.
    pub fn pixel_shape_squares(self) -> Self {
        self.pixel_shape(PixelShape::Squares)
    }

    /// Draws circular pixels.
    pub fn pixel_shape_circles(self) -> Self {
        self.pixel_shape(PixelShape::Circles)
    }

    /// Mixes squares and circles per cell.
    pub fn pixel_shape_mix(self) -> Self {
        self.pixel_shape(PixelShape::Mix)
    }

    /// Sets the digest algorithm.
    pub fn digest_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.config.digest_algorithm = algorithm;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AvatarConfig {
        self.config
    }
}
