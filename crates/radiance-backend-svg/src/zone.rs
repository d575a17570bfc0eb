//! Static tables: gradient layout zones and reserved seeds.

use radiance_spec::ColorValue;

/// Layout slot for one gradient layer.
///
/// Base positions overlap so the radial layers blend into a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientZone {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Center,
    CenterBottom,
    Filler,
}

impl GradientZone {
    /// All zones, indexed by layer.
    pub const ALL: [GradientZone; 7] = [
        GradientZone::TopLeft,
        GradientZone::TopRight,
        GradientZone::BottomRight,
        GradientZone::BottomLeft,
        GradientZone::Center,
        GradientZone::CenterBottom,
        GradientZone::Filler,
    ];

    /// Zone for a layer index (0-6).
    pub fn for_layer(index: usize) -> Option<GradientZone> {
        Self::ALL.get(index).copied()
    }

    /// Base (x, y) position in percent.
    pub fn coordinates(&self) -> (i32, i32) {
        match self {
            GradientZone::TopLeft => (5, 5),
            GradientZone::TopRight => (85, 5),
            GradientZone::BottomRight => (85, 85),
            GradientZone::BottomLeft => (5, 85),
            GradientZone::Center => (50, 50),
            GradientZone::CenterBottom => (50, 70),
            GradientZone::Filler => (35, 35),
        }
    }

    /// Allowed jitter in percent added to the base position.
    pub fn variation(&self) -> u32 {
        match self {
            GradientZone::Center => 30,
            GradientZone::Filler => 50,
            GradientZone::CenterBottom => 25,
            _ => 20,
        }
    }

    /// Zone name in snake case.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientZone::TopLeft => "top_left",
            GradientZone::TopRight => "top_right",
            GradientZone::BottomRight => "bottom_right",
            GradientZone::BottomLeft => "bottom_left",
            GradientZone::Center => "center",
            GradientZone::CenterBottom => "center_bottom",
            GradientZone::Filler => "filler",
        }
    }
}

/// Reserved seeds that always render a fixed solid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasterEgg {
    Php,
    Laravel,
}

impl EasterEgg {
    /// Matches a seed case-insensitively.
    pub fn from_seed(seed: &str) -> Option<EasterEgg> {
        match seed.to_uppercase().as_str() {
            "PHP" => Some(EasterEgg::Php),
            "LARAVEL" => Some(EasterEgg::Laravel),
            _ => None,
        }
    }

    /// The fixed fill color.
    pub fn color(&self) -> ColorValue {
        match self {
            EasterEgg::Php => ColorValue::Rgb([0x4f, 0x5b, 0x93]),
            EasterEgg::Laravel => ColorValue::Rgb([0xf0, 0x53, 0x40]),
        }
    }
}
