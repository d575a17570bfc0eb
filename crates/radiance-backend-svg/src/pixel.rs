//! Symmetric pixel overlay.
//!
//! Only the left half plus the center column is sampled; cells left of the
//! center are mirrored, so every pattern is horizontally symmetric.

use radiance_spec::{AvatarConfig, Digest, DigestError, PixelColorMode, PixelShape};
use serde::Serialize;

use crate::color::hsl_hex;

/// Cell indices wrap at this many digest characters.
const INDEX_WRAP: usize = 32;

/// Hue offsets of the gradient palette, selected by `index % 8`.
const PALETTE_OFFSETS: [u32; 8] = [0, 180, 150, 210, 120, 240, 30, 330];

const MONOCHROME_FILL: &str = "#ffffff";

const ACCENT_SATURATION: u32 = 80;
const ACCENT_LIGHTNESS: u32 = 65;

const PALETTE_SATURATION_MIN: u32 = 80;
const PALETTE_LIGHTNESS_MIN: u32 = 55;
const PALETTE_JITTER: u32 = 15;

/// Shape drawn for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellShape {
    Square,
    Circle,
}

/// One drawn cell of the overlay grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelCell {
    pub column: u32,
    pub row: u32,
    /// Fill color as hex.
    pub color: String,
    pub shape: CellShape,
    /// True for the copy placed right of the center column.
    pub mirrored: bool,
}

/// Compute the overlay cells for a digest and a normalized config.
///
/// Returns an empty list when the overlay is disabled. Cells are ordered row
/// by row; each sampled cell is followed by its mirror, if any.
pub fn compute_pixel_cells(
    digest: &Digest,
    config: &AvatarConfig,
) -> Result<Vec<PixelCell>, DigestError> {
    if !config.pixel_pattern {
        return Ok(Vec::new());
    }

    let grid = config.pixel_grid_size;
    let half = grid / 2;
    let threshold = (config.pixel_density * 100.0) as u32;
    let accent = accent_color(digest, config)?;
    let palette_base = digest.extract(0, 4)? % 360;

    let mut cells = Vec::new();
    for row in 0..grid {
        for column in 0..=half {
            let index = cell_index(row, column, half);
            if digest.extract(index % INDEX_WRAP, 2)? % 100 >= threshold {
                continue;
            }

            let color = match config.pixel_color_mode {
                PixelColorMode::Monochrome => MONOCHROME_FILL.to_string(),
                PixelColorMode::Accent => accent.clone(),
                PixelColorMode::Gradient => palette_color(digest, index, palette_base)?,
            };
            let shape = cell_shape(digest, index, config.pixel_shape)?;

            let cell = PixelCell {
                column,
                row,
                color,
                shape,
                mirrored: false,
            };
            let mirror = (column < half).then(|| PixelCell {
                column: grid - 1 - column,
                mirrored: true,
                ..cell.clone()
            });
            cells.push(cell);
            cells.extend(mirror);
        }
    }

    Ok(cells)
}

/// Row-major index of a sampled cell. Widened so large grids cannot overflow.
fn cell_index(row: u32, column: u32, half: u32) -> usize {
    row as usize * (half as usize + 1) + column as usize
}

fn accent_color(digest: &Digest, config: &AvatarConfig) -> Result<String, DigestError> {
    let hue = match config.base_color {
        Some(base) => (base.hue_degrees() + 180) % 360,
        None => digest.extract(0, 4)? % 360,
    };
    Ok(hsl_hex(hue, ACCENT_SATURATION, ACCENT_LIGHTNESS))
}

fn palette_color(digest: &Digest, index: usize, base: u32) -> Result<String, DigestError> {
    let hue = (base + PALETTE_OFFSETS[index % PALETTE_OFFSETS.len()]) % 360;
    let saturation =
        PALETTE_SATURATION_MIN + digest.extract((index * 2) % INDEX_WRAP, 1)? % PALETTE_JITTER;
    let lightness =
        PALETTE_LIGHTNESS_MIN + digest.extract((index * 3) % INDEX_WRAP, 1)? % PALETTE_JITTER;
    Ok(hsl_hex(hue, saturation, lightness))
}

fn cell_shape(digest: &Digest, index: usize, mode: PixelShape) -> Result<CellShape, DigestError> {
    Ok(match mode {
        PixelShape::Squares => CellShape::Square,
        PixelShape::Circles => CellShape::Circle,
        PixelShape::Mix => {
            if digest.extract((index * 5) % INDEX_WRAP, 1)? % 2 == 0 {
                CellShape::Circle
            } else {
                CellShape::Square
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use radiance_spec::DigestAlgorithm;
    use std::collections::HashSet;

    fn digest(seed: &str) -> Digest {
        Digest::from_seed(seed, DigestAlgorithm::Sha256)
    }

    fn positions(cells: &[PixelCell]) -> HashSet<(u32, u32)> {
        cells.iter().map(|c| (c.column, c.row)).collect()
    }

    #[test]
    fn test_disabled_overlay_is_empty() {
        let config = AvatarConfig::builder().enable_pixel_pattern(false).build();
        assert!(compute_pixel_cells(&digest("x"), &config).unwrap().is_empty());
    }

    #[test]
    fn test_pattern_is_symmetric() {
        for grid in [3, 7, 13, 21] {
            let config = AvatarConfig::builder()
                .pixel_grid_size(grid)
                .pixel_density(0.5)
                .build();
            for i in 0..20 {
                let cells = compute_pixel_cells(&digest(&format!("sym-{i}")), &config).unwrap();
                let on = positions(&cells);
                for &(column, row) in &on {
                    assert!(on.contains(&(grid - 1 - column, row)), "grid {grid}");
                }
            }
        }
    }

    #[test]
    fn test_mirror_keeps_color_and_shape() {
        let config = AvatarConfig::builder()
            .pixel_density(1.0)
            .pixel_shape_mix()
            .build();
        let cells = compute_pixel_cells(&digest("mirror"), &config).unwrap();
        for pair in cells.windows(2) {
            if pair[1].mirrored {
                assert_eq!(pair[0].row, pair[1].row);
                assert_eq!(pair[0].color, pair[1].color);
                assert_eq!(pair[0].shape, pair[1].shape);
                assert_eq!(pair[0].column + pair[1].column, 12);
            }
        }
    }

    #[test]
    fn test_full_and_empty_density() {
        let full = AvatarConfig::builder().pixel_density(1.0).build();
        assert_eq!(compute_pixel_cells(&digest("d"), &full).unwrap().len(), 13 * 13);

        let empty = AvatarConfig::builder().pixel_density(0.0).build();
        assert!(compute_pixel_cells(&digest("d"), &empty).unwrap().is_empty());
    }

    #[test]
    fn test_density_is_monotonic() {
        for i in 0..10 {
            let d = digest(&format!("density-{i}"));
            let mut last = 0;
            for density in [0.1, 0.3, 0.5, 0.7, 0.9] {
                let config = AvatarConfig::builder().pixel_density(density).build();
                let count = compute_pixel_cells(&d, &config).unwrap().len();
                assert!(count >= last);
                last = count;
            }
        }
    }

    #[test]
    fn test_monochrome_is_white() {
        let config = AvatarConfig::builder()
            .pixel_density(1.0)
            .pixel_color_monochrome()
            .build();
        let cells = compute_pixel_cells(&digest("mono"), &config).unwrap();
        assert!(cells.iter().all(|c| c.color == "#ffffff"));
    }

    #[test]
    fn test_accent_uses_complement_of_base() {
        let config = AvatarConfig::builder()
            .pixel_density(1.0)
            .pixel_color_accent()
            .base_color("#FF0000")
            .build();
        let cells = compute_pixel_cells(&digest("accent"), &config).unwrap();
        let expected = hsl_hex(180, 80, 65);
        assert!(cells.iter().all(|c| c.color == expected));
    }

    #[test]
    fn test_shape_modes() {
        let d = digest("shapes");
        let squares = AvatarConfig::builder().pixel_density(1.0).build();
        let cells = compute_pixel_cells(&d, &squares).unwrap();
        assert!(cells.iter().all(|c| c.shape == CellShape::Square));

        let circles = AvatarConfig::builder()
            .pixel_density(1.0)
            .pixel_shape_circles()
            .build();
        let cells = compute_pixel_cells(&d, &circles).unwrap();
        assert!(cells.iter().all(|c| c.shape == CellShape::Circle));
    }

    #[test]
    fn test_known_digest_cells() {
        // Every 2-char window reads 0x55 = 85.
        let d = Digest::from_hex(&"5".repeat(64)).unwrap();
        let on = AvatarConfig::builder()
            .pixel_grid_size(3)
            .pixel_density(0.9)
            .build();
        let cells = compute_pixel_cells(&d, &on).unwrap();
        assert_eq!(cells.len(), 9);
        assert_eq!(
            cells.iter().take(3).map(|c| (c.column, c.mirrored)).collect::<Vec<_>>(),
            vec![(0, false), (2, true), (1, false)]
        );

        let off = AvatarConfig::builder()
            .pixel_grid_size(3)
            .pixel_density(0.8)
            .build();
        assert!(compute_pixel_cells(&d, &off).unwrap().is_empty());
    }

    #[test]
    fn test_cell_index_large_grid() {
        assert_eq!(cell_index(2, 1, 6), 15);
        let half = 50_000;
        assert_eq!(
            cell_index(99_999, half, half),
            99_999usize * 50_001 + 50_000
        );
        assert_eq!(cell_index(99_999, half, half) % INDEX_WRAP, 31);
    }
}
