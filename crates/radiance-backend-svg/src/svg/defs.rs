//! `<defs>` content: clip paths, radial gradients and filters.

use radiance_spec::AvatarShape;

use super::format::num;
use crate::color::{saturation_matrix, ContrastTransfer};
use crate::gradient::MeshGradient;

/// Squircle corner radius as a fraction of the size.
const SQUIRCLE_RADIUS: f64 = 0.2;

/// Blur per pixel of avatar size, floored at 1.
const BLUR_PER_PIXEL: f64 = 0.008;

/// Radial falloff shared by every gradient layer: (offset %, opacity).
const GRADIENT_STOPS: [(u32, &str); 9] = [
    (0, "1"),
    (15, "0.97"),
    (30, "0.91"),
    (45, "0.80"),
    (60, "0.64"),
    (75, "0.44"),
    (85, "0.28"),
    (92, "0.14"),
    (100, "0"),
];

/// Element ids for one avatar, suffixed with its digest.
#[derive(Debug, Clone)]
pub struct ElementIds {
    digest: String,
}

impl ElementIds {
    pub fn new(digest: &str) -> Self {
        Self {
            digest: digest.to_string(),
        }
    }

    pub fn clip(&self) -> String {
        format!("clip-{}", self.digest)
    }

    pub fn gradient(&self, layer: usize) -> String {
        format!("gradient-{}-{}", self.digest, layer)
    }

    pub fn blur(&self) -> String {
        format!("blur-{}", self.digest)
    }

    pub fn color_filter(&self) -> String {
        format!("colorfilter-{}", self.digest)
    }

    pub fn shadow(&self) -> String {
        format!("shadow-{}", self.digest)
    }
}

/// Clip path matching the avatar outline.
pub fn clip_path(id: &str, shape: AvatarShape, size: u32) -> String {
    let body = match shape {
        AvatarShape::Circle => {
            let center = size / 2;
            format!(r#"<circle cx="{center}" cy="{center}" r="{center}"/>"#)
        }
        AvatarShape::Squircle => {
            let radius = (size as f64 * SQUIRCLE_RADIUS) as u32;
            format!(
                r#"<rect x="0" y="0" width="{size}" height="{size}" rx="{radius}" ry="{radius}"/>"#
            )
        }
        AvatarShape::Square => format!(r#"<rect x="0" y="0" width="{size}" height="{size}"/>"#),
    };
    format!(r#"<clipPath id="{id}">{body}</clipPath>"#)
}

/// Radial gradients for every layer, the blur filter and the color filter.
pub fn gradient_defs(
    ids: &ElementIds,
    gradient: &MeshGradient,
    size: u32,
    saturation: f64,
    contrast: f64,
) -> Vec<String> {
    let mut defs: Vec<String> = gradient
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| radial_gradient(&ids.gradient(index), &layer.hex()))
        .collect();

    defs.push(blur_filter(&ids.blur(), size));
    defs.push(color_filter(&ids.color_filter(), saturation, contrast));
    defs
}

fn radial_gradient(id: &str, color: &str) -> String {
    let stops: String = GRADIENT_STOPS
        .iter()
        .map(|(offset, opacity)| {
            format!(r#"<stop offset="{offset}%" stop-color="{color}" stop-opacity="{opacity}"/>"#)
        })
        .collect();
    format!(r#"<radialGradient id="{id}">{stops}</radialGradient>"#)
}

/// Blur radius for a given avatar size.
pub fn blur_amount(size: u32) -> f64 {
    (size as f64 * BLUR_PER_PIXEL).max(1.0)
}

fn blur_filter(id: &str, size: u32) -> String {
    format!(
        r#"<filter id="{id}" x="-25%" y="-25%" width="150%" height="150%"><feGaussianBlur in="SourceGraphic" stdDeviation="{}"/></filter>"#,
        num(blur_amount(size))
    )
}

fn color_filter(id: &str, saturation: f64, contrast: f64) -> String {
    let values = saturation_matrix(saturation)
        .iter()
        .map(|v| num(*v))
        .collect::<Vec<_>>()
        .join(" ");
    let transfer = ContrastTransfer::new(contrast);
    let slope = num(transfer.slope);
    let intercept = num(transfer.intercept);
    let funcs: String = ["R", "G", "B"]
        .iter()
        .map(|channel| {
            format!(r#"<feFunc{channel} type="linear" slope="{slope}" intercept="{intercept}"/>"#)
        })
        .collect();

    format!(
        r#"<filter id="{id}" x="0" y="0" width="100%" height="100%"><feColorMatrix type="matrix" values="{values}"/><feComponentTransfer>{funcs}</feComponentTransfer></filter>"#
    )
}
