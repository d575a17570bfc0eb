//! Reading rendered SVG back for assertions.
//!
//! The overlay is the only group with an `opacity` attribute; these helpers
//! pull it out and parse its cells so tests can check geometry without an
//! XML parser.

use regex::Regex;
use std::sync::OnceLock;

/// One parsed overlay element.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayElement {
    Rect {
        x: f64,
        y: f64,
        size: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
}

impl OverlayElement {
    /// Center of the element.
    pub fn center(&self) -> (f64, f64) {
        match self {
            OverlayElement::Rect { x, y, size, .. } => (x + size / 2.0, y + size / 2.0),
            OverlayElement::Circle { cx, cy, .. } => (*cx, *cy),
        }
    }

    pub fn fill(&self) -> &str {
        match self {
            OverlayElement::Rect { fill, .. } | OverlayElement::Circle { fill, .. } => fill,
        }
    }
}

fn rect_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"<rect x="(\d+\.\d{2})" y="(\d+\.\d{2})" width="(\d+\.\d{2})" height="\d+\.\d{2}" fill="([^"]+)"/>"#,
        )
        .unwrap()
    })
}

fn circle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<circle cx="(\d+\.\d{2})" cy="(\d+\.\d{2})" r="(\d+\.\d{2})" fill="([^"]+)"/>"#)
            .unwrap()
    })
}

/// The overlay group's opening tag and content, if present.
pub fn overlay_group(svg: &str) -> Option<&str> {
    let marker = svg.find(r#"" opacity=""#)?;
    let start = svg[..marker].rfind("<g ")?;
    let end = svg[start..].find("</g>")? + start;
    Some(&svg[start..end])
}

/// Parse every cell of the overlay, in document order.
pub fn overlay_elements(svg: &str) -> Vec<OverlayElement> {
    let Some(group) = overlay_group(svg) else {
        return Vec::new();
    };

    let mut found: Vec<(usize, OverlayElement)> = Vec::new();
    for caps in rect_regex().captures_iter(group) {
        let at = caps.get(0).map_or(0, |m| m.start());
        found.push((
            at,
            OverlayElement::Rect {
                x: caps[1].parse().unwrap_or(f64::NAN),
                y: caps[2].parse().unwrap_or(f64::NAN),
                size: caps[3].parse().unwrap_or(f64::NAN),
                fill: caps[4].to_string(),
            },
        ));
    }
    for caps in circle_regex().captures_iter(group) {
        let at = caps.get(0).map_or(0, |m| m.start());
        found.push((
            at,
            OverlayElement::Circle {
                cx: caps[1].parse().unwrap_or(f64::NAN),
                cy: caps[2].parse().unwrap_or(f64::NAN),
                r: caps[3].parse().unwrap_or(f64::NAN),
                fill: caps[4].to_string(),
            },
        ));
    }
    found.sort_by_key(|(at, _)| *at);
    found.into_iter().map(|(_, el)| el).collect()
}

/// Value of the overlay `opacity` attribute.
pub fn overlay_opacity(svg: &str) -> Option<f64> {
    let group = overlay_group(svg)?;
    let start = group.find(r#"opacity=""#)? + r#"opacity=""#.len();
    let end = group[start..].find('"')? + start;
    group[start..end].parse().ok()
}
