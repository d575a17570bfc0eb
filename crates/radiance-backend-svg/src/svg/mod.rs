//! SVG document assembly.
//!
//! Layers are emitted back to front:
//!
//! ```text
//! <defs>      clip path, gradient defs, text shadow
//! background  solid rect, or base rect + filtered gradient circles
//! overlay     pixel cells at the configured opacity
//! text        centered label
//! ```

pub mod defs;
pub mod format;
pub mod text;

use radiance_spec::AvatarConfig;

use crate::gradient::{Background, MeshGradient, LAYER_COUNT};
use crate::pixel::{CellShape, PixelCell};
use defs::ElementIds;
use format::{coord, num};

/// Gradient circles overshoot their fade radius so neighbours overlap.
const RADIUS_OVERSHOOT: f64 = 1.2;

/// Everything the assembler needs for one avatar.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParts<'a> {
    /// Digest of the resolved seed; suffixes every element id.
    pub digest: &'a str,
    /// Normalized config.
    pub config: &'a AvatarConfig,
    pub background: &'a Background,
    pub cells: &'a [PixelCell],
}

/// Build the complete SVG document.
pub fn assemble(parts: DocumentParts<'_>) -> String {
    let config = parts.config;
    let size = config.size;
    let ids = ElementIds::new(parts.digest);
    let clip_id = ids.clip();
    let label = config.text.as_deref().filter(|t| !t.is_empty());

    let mut out = vec![format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    )];

    out.push("<defs>".to_string());
    out.push(defs::clip_path(&clip_id, config.shape, size));
    if let Background::Gradient(gradient) = parts.background {
        out.extend(defs::gradient_defs(
            &ids,
            gradient,
            size,
            config.saturation,
            config.contrast,
        ));
    }
    if label.is_some() {
        out.push(text::shadow_filter(&ids.shadow(), config.text_shadow));
    }
    out.push("</defs>".to_string());

    match parts.background {
        Background::Solid { color, .. } => out.push(format!(
            r#"<rect width="{size}" height="{size}" fill="{}" clip-path="url(#{clip_id})"/>"#,
            color.to_hex()
        )),
        Background::Gradient(gradient) => {
            out.extend(gradient_layers(&ids, gradient, config));
        }
    }

    if config.pixel_pattern {
        out.push(pixel_overlay(&clip_id, parts.cells, config));
    }

    if let Some(label) = label {
        let ratio = if config.font_size_ratio_auto {
            text::auto_font_ratio(label)
        } else {
            config.font_size_ratio
        };
        let element = text::text_element(
            label,
            &config.font_family,
            text::font_size(size, ratio),
            &ids.shadow(),
        );
        out.push(format!(r#"<g clip-path="url(#{clip_id})">{element}</g>"#));
    }

    out.push("</svg>".to_string());
    out.join("\n")
}

fn gradient_layers(ids: &ElementIds, gradient: &MeshGradient, config: &AvatarConfig) -> Vec<String> {
    let size = config.size as f64;
    let clip_id = ids.clip();
    let blur_id = ids.blur();

    let mut out = Vec::with_capacity(LAYER_COUNT + 3);
    out.push(format!(
        r#"<rect width="{0}" height="{0}" fill="{1}" clip-path="url(#{2})"/>"#,
        config.size,
        gradient.base.hex_with_saturation(config.saturation),
        clip_id
    ));
    out.push(format!(
        r#"<g clip-path="url(#{clip_id})" filter="url(#{})">"#,
        ids.color_filter()
    ));

    // Back to front: the filler layer first, top-left last.
    for (index, layer) in gradient.layers.iter().enumerate().rev() {
        let cx = num(layer.x as f64 / 100.0 * size);
        let cy = num(layer.y as f64 / 100.0 * size);
        let r = num(layer.fade as f64 / 100.0 * size * RADIUS_OVERSHOOT);
        let blur = if index % 2 == 0 {
            format!(r#" filter="url(#{blur_id})""#)
        } else {
            String::new()
        };
        out.push(format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="url(#{})"{blur}/>"#,
            ids.gradient(index)
        ));
    }

    out.push("</g>".to_string());
    out
}

fn pixel_overlay(clip_id: &str, cells: &[PixelCell], config: &AvatarConfig) -> String {
    let pixel = config.size as f64 / config.pixel_grid_size as f64;
    let elements: String = cells.iter().map(|cell| pixel_element(cell, pixel)).collect();
    format!(
        r#"<g clip-path="url(#{clip_id})" opacity="{}">{elements}</g>"#,
        num(config.pixel_opacity)
    )
}

fn pixel_element(cell: &PixelCell, pixel: f64) -> String {
    let x = cell.column as f64 * pixel;
    let y = cell.row as f64 * pixel;
    match cell.shape {
        CellShape::Circle => {
            let r = pixel / 2.0;
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                coord(x + r),
                coord(y + r),
                coord(r),
                cell.color
            )
        }
        CellShape::Square => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            coord(x),
            coord(y),
            coord(pixel),
            coord(pixel),
            cell.color
        ),
    }
}
