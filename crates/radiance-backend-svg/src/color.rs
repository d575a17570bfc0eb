//! Color math for filters and palette derivation.

use radiance_spec::Hsl;

/// Rec. 709 luma coefficients used by the saturation matrix.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Converts integer HSL (degrees, percent, percent) to an uppercase hex string.
pub fn hsl_hex(h: u32, s: u32, l: u32) -> String {
    Hsl::new(h as f64, s as f64, l as f64).to_hex()
}

/// Builds the 4x5 `feColorMatrix` values for a saturation multiplier.
///
/// At `saturation = 1.0` this is the identity; below 1 it moves channels
/// toward luma, above 1 it pushes them away. Alpha passes through.
pub fn saturation_matrix(saturation: f64) -> [f64; 20] {
    let s = saturation;
    let sr = (1.0 - s) * LUMA_R;
    let sg = (1.0 - s) * LUMA_G;
    let sb = (1.0 - s) * LUMA_B;

    #[rustfmt::skip]
    let matrix = [
        sr + s, sg, sb, 0.0, 0.0,
        sr, sg + s, sb, 0.0, 0.0,
        sr, sg, sb + s, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ];
    matrix
}

/// Linear transfer applied per RGB channel to scale contrast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastTransfer {
    pub slope: f64,
    pub intercept: f64,
}

impl ContrastTransfer {
    /// Pivot contrast around mid-gray: `slope = c`, `intercept = (1 - c) / 2`.
    pub fn new(contrast: f64) -> Self {
        Self {
            slope: contrast,
            intercept: (1.0 - contrast) / 2.0,
        }
    }

    /// Apply the transfer to one channel value in 0-1.
    pub fn apply(&self, value: f64) -> f64 {
        self.slope * value + self.intercept
    }
}

/// Multiplies the saturation of an integer HSL color, capping at 100%.
pub fn boost_saturation(h: u32, s: u32, l: u32, factor: f64) -> String {
    let boosted = (s as f64 * factor).min(100.0);
    Hsl::new(h as f64, boosted, l as f64).to_hex()
}
