//! Mesh gradient derivation.
//!
//! Seven radial layers are read from consecutive 8-character windows of the
//! digest. Within each window:
//!
//! ```text
//! offset + 0..2  hue jitter
//! offset + 2..4  saturation
//! offset + 4..6  lightness
//! offset + i     x jitter   (i = layer index)
//! offset + i + 1 y jitter
//! offset + 7     fade jitter
//! ```
//!
//! The last layer reads up to character 56 of a 64-character digest.

use radiance_spec::{AvatarConfig, ColorValue, Digest, DigestError};
use serde::Serialize;

use crate::color::{boost_saturation, hsl_hex};
use crate::zone::{EasterEgg, GradientZone};

/// Number of gradient layers.
pub const LAYER_COUNT: usize = 7;

/// Digest characters consumed per layer.
const LAYER_STRIDE: usize = 8;

/// Hue spacing between layers without a base color (360 / 7, truncated).
const HUE_STEP: i64 = 360 / LAYER_COUNT as i64;

/// Hue jitter without a base color: +/-15 degrees.
const FREE_HUE_JITTER: i64 = 15;

/// Hue jitter around the base color for the first five layers: +/-40 degrees.
const ANALOGOUS_HUE_JITTER: i64 = 40;

/// Hue jitter around the complement for the last two layers: +/-30 degrees.
const ACCENT_HUE_JITTER: i64 = 30;

/// Layers below this index stay analogous to the base color.
const ANALOGOUS_LAYERS: usize = 5;

const SATURATION_MIN: u32 = 60;
const SATURATION_RANGE: u32 = 21;
const LIGHTNESS_MIN: u32 = 45;
const LIGHTNESS_RANGE: u32 = 26;
const FADE_RANGE: u32 = 41;

/// CenterBottom x jitter is symmetric: `v % 30 - 15`.
const CENTER_BOTTOM_X_SPAN: i32 = 30;

/// One radial layer of the mesh gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientLayer {
    /// Hue in degrees, always in [0, 360).
    pub hue: u32,
    /// Saturation in percent, in [60, 81).
    pub saturation: u32,
    /// Lightness in percent, in [45, 71).
    pub lightness: u32,
    /// Center x in percent of the avatar size.
    pub x: i32,
    /// Center y in percent of the avatar size.
    pub y: i32,
    /// Fade radius in percent of the avatar size.
    pub fade: u32,
}

impl GradientLayer {
    /// The layer color as uppercase hex.
    pub fn hex(&self) -> String {
        hsl_hex(self.hue, self.saturation, self.lightness)
    }
}

/// Flat color drawn beneath the gradient layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseColor {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
}

impl BaseColor {
    /// The base color as uppercase hex, with its saturation scaled.
    pub fn hex_with_saturation(&self, factor: f64) -> String {
        boost_saturation(self.hue, self.saturation, self.lightness, factor)
    }
}

/// Seven layers plus the averaged base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshGradient {
    pub layers: [GradientLayer; LAYER_COUNT],
    pub base: BaseColor,
}

/// Why the solid path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidReason {
    /// The seed matched a reserved literal.
    EasterEgg,
    /// The config set a solid color.
    Configured,
}

/// Background of an avatar: exactly one of the two paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Single flat fill.
    Solid {
        color: ColorValue,
        reason: SolidReason,
    },
    /// Seven-layer mesh gradient.
    Gradient(MeshGradient),
}

impl Background {
    /// Returns true for the solid path.
    pub fn is_solid(&self) -> bool {
        matches!(self, Background::Solid { .. })
    }
}

/// Resolve the background for a seed, its digest, and a normalized config.
///
/// Reserved seeds win over a configured solid color; either one skips layer
/// derivation entirely.
pub fn compute_background(
    seed: &str,
    digest: &Digest,
    config: &AvatarConfig,
) -> Result<Background, DigestError> {
    if let Some(egg) = EasterEgg::from_seed(seed) {
        return Ok(Background::Solid {
            color: egg.color(),
            reason: SolidReason::EasterEgg,
        });
    }

    if let Some(color) = config.solid_color {
        return Ok(Background::Solid {
            color,
            reason: SolidReason::Configured,
        });
    }

    compute_mesh_gradient(digest, config).map(Background::Gradient)
}

/// Derive the seven layers and the base color.
pub fn compute_mesh_gradient(
    digest: &Digest,
    config: &AvatarConfig,
) -> Result<MeshGradient, DigestError> {
    let base_hue = (digest.extract(0, 4)? % 360) as i64;
    let target_hue = config.base_color.map(|c| c.hue_degrees() as i64);

    let mut layers = [GradientLayer {
        hue: 0,
        saturation: 0,
        lightness: 0,
        x: 0,
        y: 0,
        fade: 0,
    }; LAYER_COUNT];

    for (index, layer) in layers.iter_mut().enumerate() {
        let offset = index * LAYER_STRIDE;
        let hue_sample = digest.extract(offset, 2)? as i64;

        let hue = match target_hue {
            Some(target) if index < ANALOGOUS_LAYERS => {
                target + jitter(hue_sample, ANALOGOUS_HUE_JITTER)
            }
            Some(target) => target + 180 + jitter(hue_sample, ACCENT_HUE_JITTER),
            None => base_hue + index as i64 * HUE_STEP + jitter(hue_sample, FREE_HUE_JITTER),
        };

        let saturation = SATURATION_MIN + digest.extract(offset + 2, 2)? % SATURATION_RANGE;
        let lightness = LIGHTNESS_MIN + digest.extract(offset + 4, 2)? % LIGHTNESS_RANGE;
        let (x, y) = resolve_position(index, digest, offset)?;
        let fade = config.fade_distance + digest.extract(offset + 7, 1)? % FADE_RANGE;

        *layer = GradientLayer {
            hue: hue.rem_euclid(360) as u32,
            saturation,
            lightness,
            x,
            y,
            fade,
        };
    }

    let base = average_base(&layers[0], &layers[4]);

    Ok(MeshGradient { layers, base })
}

/// Map a sample onto `-amount..=amount`.
fn jitter(sample: i64, amount: i64) -> i64 {
    sample % (amount * 2 + 1) - amount
}

fn resolve_position(
    index: usize,
    digest: &Digest,
    offset: usize,
) -> Result<(i32, i32), DigestError> {
    let zone = GradientZone::for_layer(index).unwrap_or(GradientZone::Filler);
    let (base_x, base_y) = zone.coordinates();
    let variation = zone.variation();

    let x_sample = digest.extract(offset + index, 1)?;
    let y_sample = digest.extract(offset + index + 1, 1)?;

    let x = match zone {
        GradientZone::CenterBottom => {
            base_x + (x_sample as i32 % CENTER_BOTTOM_X_SPAN) - CENTER_BOTTOM_X_SPAN / 2
        }
        _ => base_x + (x_sample % variation) as i32,
    };
    let y = base_y + (y_sample % variation) as i32;

    Ok((x, y))
}

/// Average two opposite layers, darkening by 10 with a floor of 30.
fn average_base(a: &GradientLayer, b: &GradientLayer) -> BaseColor {
    let lightness = ((a.lightness + b.lightness) as f64 / 2.0 - 10.0).max(30.0);
    BaseColor {
        hue: (a.hue + b.hue) / 2,
        saturation: (a.saturation + b.saturation) / 2,
        lightness: lightness as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiance_spec::DigestAlgorithm;

    fn digest(seed: &str) -> Digest {
        Digest::from_seed(seed, DigestAlgorithm::Sha256)
    }

    #[test]
    fn test_layers_stay_in_range() {
        let config = AvatarConfig::default();
        for i in 0..50 {
            let gradient = compute_mesh_gradient(&digest(&format!("seed-{i}")), &config).unwrap();
            for layer in &gradient.layers {
                assert!(layer.hue < 360);
                assert!((60..81).contains(&layer.saturation));
                assert!((45..71).contains(&layer.lightness));
                assert!((50..=90).contains(&layer.fade));
            }
        }
    }

    #[test]
    fn test_positions_stay_in_zone() {
        let config = AvatarConfig::default();
        for i in 0..50 {
            let gradient = compute_mesh_gradient(&digest(&format!("pos-{i}")), &config).unwrap();
            for (index, layer) in gradient.layers.iter().enumerate() {
                let zone = GradientZone::for_layer(index).unwrap();
                let (bx, by) = zone.coordinates();
                let var = zone.variation() as i32;
                if zone == GradientZone::CenterBottom {
                    assert!((bx - 15..bx + 15).contains(&layer.x));
                } else {
                    assert!((bx..bx + var).contains(&layer.x));
                }
                assert!((by..by + var).contains(&layer.y));
            }
        }
    }

    #[test]
    fn test_known_digest_layer_zero() {
        // Window 0: "00102030" -> hue 0x00, sat 0x10, light 0x20, x 0x0, y 0x0, fade 0x0.
        let hex = "0010203040506070".repeat(4);
        let d = Digest::from_hex(&hex).unwrap();
        let gradient = compute_mesh_gradient(&d, &AvatarConfig::default()).unwrap();
        let layer = gradient.layers[0];

        // base hue 0x0010 % 360 = 16, jitter 0 % 31 - 15 = -15
        assert_eq!(layer.hue, 1);
        assert_eq!(layer.saturation, 60 + 0x10 % 21);
        assert_eq!(layer.lightness, 45 + 0x20 % 26);
        assert_eq!((layer.x, layer.y), (5, 5));
        assert_eq!(layer.fade, 50 + 0x0 % 41);
    }

    #[test]
    fn test_base_color_biases_hues() {
        let config = AvatarConfig::builder().base_color("#FF0000").build();
        for i in 0..30 {
            let gradient = compute_mesh_gradient(&digest(&format!("red-{i}")), &config).unwrap();
            for (index, layer) in gradient.layers.iter().enumerate() {
                let distance = |target: i64| {
                    let d = (layer.hue as i64 - target).rem_euclid(360);
                    d.min(360 - d)
                };
                if index < 5 {
                    assert!(distance(0) <= 40, "layer {index} hue {}", layer.hue);
                } else {
                    assert!(distance(180) <= 30, "layer {index} hue {}", layer.hue);
                }
            }
        }
    }

    #[test]
    fn test_fade_follows_config() {
        let config = AvatarConfig::builder().fade_distance(200).build();
        let gradient = compute_mesh_gradient(&digest("fade"), &config).unwrap();
        for layer in &gradient.layers {
            assert!((200..=240).contains(&layer.fade));
        }
    }

    #[test]
    fn test_base_color_average() {
        let a = GradientLayer { hue: 10, saturation: 60, lightness: 45, x: 0, y: 0, fade: 0 };
        let b = GradientLayer { hue: 351, saturation: 71, lightness: 46, x: 0, y: 0, fade: 0 };
        let base = average_base(&a, &b);
        assert_eq!(base, BaseColor { hue: 180, saturation: 65, lightness: 35 });

        let dark = GradientLayer { lightness: 45, ..a };
        assert_eq!(average_base(&dark, &dark).lightness, 35);
        let floor = GradientLayer { lightness: 20, ..a };
        assert_eq!(average_base(&floor, &floor).lightness, 30);
    }

    #[test]
    fn test_easter_egg_wins() {
        let config = AvatarConfig::builder().solid_color("#000000").build();
        let bg = compute_background("php", &digest("php"), &config).unwrap();
        assert_eq!(
            bg,
            Background::Solid {
                color: ColorValue::Rgb([0x4f, 0x5b, 0x93]),
                reason: SolidReason::EasterEgg
            }
        );
    }

    #[test]
    fn test_configured_solid_skips_layers() {
        let config = AvatarConfig::builder().solid_color("rgb(0, 255, 0)").build();
        let bg = compute_background("anything", &digest("anything"), &config).unwrap();
        match bg {
            Background::Solid { color, reason } => {
                assert_eq!(color.to_hex(), "#00FF00");
                assert_eq!(reason, SolidReason::Configured);
            }
            Background::Gradient(_) => panic!("expected solid background"),
        }
    }

    #[test]
    fn test_short_digest_is_rejected() {
        let d = Digest::from_hex("abcdef0123").unwrap();
        let err = compute_mesh_gradient(&d, &AvatarConfig::default()).unwrap_err();
        assert!(matches!(err, DigestError::OutOfRange { .. }));
    }
}
