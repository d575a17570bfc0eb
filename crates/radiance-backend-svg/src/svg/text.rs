//! Centered text layer and its drop shadow.

use super::format::{escape_xml, num};

/// Appended to the configured family so every platform finds a face.
pub const FONT_FALLBACKS: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif";

const SHADOW_BLUR: f64 = 2.5;
const SHADOW_OFFSET: f64 = 2.0;
const SHADOW_OPACITY: f64 = 0.4;

/// Font size ratio derived from the character count.
///
/// One character fills half the avatar, two slightly less, and longer text
/// scales as `1.2 / len` within 0.05-0.4.
pub fn auto_font_ratio(text: &str) -> f64 {
    match text.chars().count() {
        0 | 1 => 0.5,
        2 => 0.45,
        len => (1.2 / len as f64).clamp(0.05, 0.4),
    }
}

/// Final font size in pixels, truncated.
pub fn font_size(size: u32, ratio: f64) -> u32 {
    (size as f64 * ratio) as u32
}

/// Drop shadow filter scaled by `intensity`.
pub fn shadow_filter(id: &str, intensity: f64) -> String {
    let blur = num(SHADOW_BLUR * intensity);
    let dy = num(SHADOW_OFFSET * intensity);
    let opacity = num(SHADOW_OPACITY * intensity);
    format!(
        concat!(
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">"#,
            r#"<feGaussianBlur in="SourceAlpha" stdDeviation="{blur}"/>"#,
            r#"<feOffset dx="0" dy="{dy}" result="offsetblur"/>"#,
            r#"<feComponentTransfer><feFuncA type="linear" slope="{opacity}"/></feComponentTransfer>"#,
            r#"<feMerge><feMergeNode/><feMergeNode in="SourceGraphic"/></feMerge>"#,
            "</filter>"
        ),
        id = id,
        blur = blur,
        dy = dy,
        opacity = opacity,
    )
}

/// White, bold, centered `<text>` element.
pub fn text_element(text: &str, font_family: &str, font_size: u32, shadow_id: &str) -> String {
    let family = format!("{}, {}", escape_xml(font_family), FONT_FALLBACKS);
    format!(
        r##"<text x="50%" y="50%" dy="0.35em" text-anchor="middle" fill="#ffffff" fill-opacity="1" font-family="{family}" font-size="{font_size}" font-weight="600" filter="url(#{shadow_id})">{}</text>"##,
        escape_xml(text)
    )
}
