//! Rendering tests: document structure, parameters, and reserved seeds.
//!
//! These check the emitted SVG text directly, so they pin down attribute
//! formatting as well as the numbers behind it.

use radiance_backend_svg::{plan, render, Background};
use radiance_spec::AvatarConfig;

/// Returns the pixel overlay group, the only group carrying `opacity`.
fn overlay(svg: &str) -> &str {
    let start = svg
        .find(r#"" opacity=""#)
        .and_then(|i| svg[..i].rfind("<g "))
        .expect("overlay group");
    let end = svg[start..].find("</g>").expect("overlay end") + start;
    &svg[start..end]
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_document_root() {
    let svg = render(Some("structure"), &AvatarConfig::default()).unwrap().svg;
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512" viewBox="0 0 512 512">"#
    ));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<radialGradient").count(), 7);
    assert!(svg.contains("<feColorMatrix"));
    assert!(svg.contains(r#"stdDeviation="4.096""#));
}

#[test]
fn test_layers_drawn_back_to_front() {
    let avatar = render(Some("order"), &AvatarConfig::default()).unwrap();
    let svg = &avatar.svg;
    let positions: Vec<usize> = (0..7)
        .map(|i| {
            svg.find(&format!(r#"fill="url(#gradient-{}-{})""#, avatar.digest, i))
                .unwrap()
        })
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn test_even_layers_are_blurred() {
    let avatar = render(Some("blur"), &AvatarConfig::default()).unwrap();
    let blurred = avatar
        .svg
        .lines()
        .filter(|l| l.starts_with("<circle") && l.contains("filter=\"url(#blur-"))
        .count();
    assert_eq!(blurred, 4);
}

#[test]
fn test_shapes_set_clip_path() {
    let circle = AvatarConfig::builder().size(200).circle().build();
    let svg = render(Some("shape"), &circle).unwrap().svg;
    assert!(svg.contains(r#"<circle cx="100" cy="100" r="100"/></clipPath>"#));

    let squircle = AvatarConfig::builder().size(200).squircle().build();
    let svg = render(Some("shape"), &squircle).unwrap().svg;
    assert!(svg.contains(r#"rx="40" ry="40""#));

    let square = AvatarConfig::builder().size(200).square().build();
    let svg = render(Some("shape"), &square).unwrap().svg;
    assert!(svg.contains(r#"<rect x="0" y="0" width="200" height="200"/></clipPath>"#));
}

// ============================================================================
// Solid colors and reserved seeds
// ============================================================================

#[test]
fn test_solid_color_literals() {
    for (literal, hex) in [
        ("#FF0000", "#FF0000"),
        ("rgb(0, 255, 0)", "#00FF00"),
        ("hsl(240, 100%, 50%)", "#0000FF"),
    ] {
        let config = AvatarConfig::builder().solid_color(literal).build();
        let svg = render(Some("solid"), &config).unwrap().svg;
        assert!(svg.contains(&format!(r#"fill="{}""#, hex)), "{literal}");
        assert!(!svg.contains("<radialGradient"));
    }
}

#[test]
fn test_unparsable_solid_color_is_ignored() {
    let config = AvatarConfig::builder().solid_color("not-a-color").build();
    let svg = render(Some("solid"), &config).unwrap().svg;
    assert!(svg.contains("<radialGradient"));
}

#[test]
fn test_unparsable_solid_color_clears_earlier_one() {
    let config = AvatarConfig::builder()
        .solid_color("#123456")
        .solid_color("not-a-color")
        .build();
    let svg = render(Some("solid"), &config).unwrap().svg;
    assert!(svg.contains("<radialGradient"));
    assert!(!svg.contains("#123456"));
}

#[test]
fn test_reserved_seeds() {
    let config = AvatarConfig::default();
    let php = render(Some("PHP"), &config).unwrap().svg;
    assert!(php.contains("#4F5B93"));
    assert!(!php.contains("<radialGradient"));

    let laravel = render(Some("laravel"), &config).unwrap().svg;
    assert!(laravel.contains("#F05340"));
}

#[test]
fn test_reserved_seed_overrides_solid_color() {
    let config = AvatarConfig::builder().solid_color("#123456").build();
    let svg = render(Some("Php"), &config).unwrap().svg;
    assert!(svg.contains("#4F5B93"));
    assert!(!svg.contains("#123456"));
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_contrast_slope() {
    let config = AvatarConfig::builder().contrast(1.2).build();
    let svg = render(Some("contrast"), &config).unwrap().svg;
    assert!(svg.contains(r#"slope="1.2""#));
}

#[test]
fn test_text_shadow_intensity() {
    let config = AvatarConfig::builder().text("AB").text_shadow(2.0).build();
    let svg = render(Some("shadow"), &config).unwrap().svg;
    assert!(svg.contains(r#"dy="4""#));
    assert!(svg.contains(r#"stdDeviation="5""#));
}

#[test]
fn test_infinite_multipliers_render_finite_numbers() {
    let config = AvatarConfig::builder()
        .saturation(f64::INFINITY)
        .contrast(f64::INFINITY)
        .text("A")
        .text_shadow(f64::INFINITY)
        .build();
    let svg = render(Some("x"), &config).unwrap().svg;
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("\"inf") && !svg.contains(" inf") && !svg.contains("-inf"));
    assert!(svg.contains(r#"<feFuncR type="linear" slope="1000""#));
}

#[test]
fn test_nan_multipliers_fall_back_to_neutral() {
    let mut config = AvatarConfig::default();
    config.saturation = f64::NAN;
    config.contrast = f64::NAN;
    config.text = Some("A".into());
    config.text_shadow = f64::NAN;

    let svg = render(Some("x"), &config).unwrap().svg;
    let neutral = render(
        Some("x"),
        &AvatarConfig::builder().text("A").build(),
    )
    .unwrap()
    .svg;
    assert_eq!(svg, neutral);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_control_chars_removed_from_text() {
    let config = AvatarConfig::builder()
        .text("A\u{1}B")
        .font_family("Mono\u{1b}")
        .build();
    let svg = render(Some("x"), &config).unwrap().svg;
    assert!(!svg.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')));
    assert!(svg.contains(">AB</text>"));
}

#[test]
fn test_explicit_font_ratio() {
    let config = AvatarConfig::builder()
        .size(200)
        .text("A")
        .font_size_ratio(0.5)
        .build();
    let svg = render(Some("font"), &config).unwrap().svg;
    assert!(svg.contains(r#"font-size="100""#));
}

#[test]
fn test_auto_font_ratio() {
    let two = AvatarConfig::builder().size(100).text("DF").build();
    assert!(render(Some("font"), &two).unwrap().svg.contains(r#"font-size="45""#));

    let long = AvatarConfig::builder().size(100).text("Hello World").build();
    assert!(render(Some("font"), &long).unwrap().svg.contains(r#"font-size="10""#));
}

#[test]
fn test_font_ratio_clamped() {
    let config = AvatarConfig::builder()
        .size(100)
        .text("A")
        .font_size_ratio(0.001)
        .build();
    assert!(render(Some("font"), &config).unwrap().svg.contains(r#"font-size="1""#));
}

#[test]
fn test_auto_off_uses_configured_ratio() {
    let config = AvatarConfig::builder()
        .size(100)
        .text("Hello World")
        .font_size_ratio_auto(false)
        .build();
    assert!(render(Some("font"), &config).unwrap().svg.contains(r#"font-size="50""#));
}

#[test]
fn test_text_escaped_and_fallbacks() {
    let config = AvatarConfig::builder()
        .text("<b>&")
        .font_family("Inter")
        .build();
    let svg = render(Some("escape"), &config).unwrap().svg;
    assert!(svg.contains(">&lt;b&gt;&amp;</text>"));
    assert!(svg.contains(
        r#"font-family="Inter, -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif""#
    ));
}

#[test]
fn test_empty_text_is_absent() {
    let config = AvatarConfig::builder().text("").build();
    let svg = render(Some("empty"), &config).unwrap().svg;
    assert!(!svg.contains("<text"));
}

// ============================================================================
// Pixel overlay
// ============================================================================

#[test]
fn test_overlay_opacity() {
    for (opacity, attr) in [(0.3, "0.3"), (0.5, "0.5"), (-0.5, "0"), (1.5, "1")] {
        let config = AvatarConfig::builder().pixel_opacity(opacity).build();
        let svg = render(Some("opacity"), &config).unwrap().svg;
        assert!(svg.contains(&format!(r#"" opacity="{}">"#, attr)), "{opacity}");
    }
}

#[test]
fn test_overlay_disabled() {
    let config = AvatarConfig::builder().enable_pixel_pattern(false).build();
    let svg = render(Some("off"), &config).unwrap().svg;
    assert!(!svg.contains(r#"" opacity=""#));
}

#[test]
fn test_monochrome_overlay() {
    let config = AvatarConfig::builder()
        .pixel_density(1.0)
        .pixel_color_monochrome()
        .build();
    let svg = render(Some("mono"), &config).unwrap().svg;
    assert!(overlay(&svg).contains(r##"fill="#ffffff""##));
}

#[test]
fn test_overlay_shapes() {
    let squares = AvatarConfig::builder().pixel_density(1.0).build();
    let svg = render(Some("shapes"), &squares).unwrap().svg;
    let group = overlay(&svg);
    assert!(group.contains(r#"<rect x=""#));
    assert!(!group.contains("<circle"));

    let circles = AvatarConfig::builder()
        .pixel_density(1.0)
        .pixel_shape_circles()
        .build();
    let svg = render(Some("shapes"), &circles).unwrap().svg;
    let group = overlay(&svg);
    assert!(group.contains(r#"<circle cx=""#));
    assert!(!group.contains("<rect"));

    let mix = AvatarConfig::builder()
        .pixel_density(1.0)
        .pixel_shape_mix()
        .build();
    let svg = render(Some("shapes"), &mix).unwrap().svg;
    let group = overlay(&svg);
    assert!(group.contains("<circle"));
    assert!(group.contains("<rect"));
}

#[test]
fn test_overlay_coordinates_have_two_decimals() {
    let config = AvatarConfig::builder().pixel_density(1.0).build();
    let svg = render(Some("coords"), &config).unwrap().svg;
    let group = overlay(&svg);
    let first = group.find("<rect x=\"").unwrap() + "<rect x=\"".len();
    let value: &str = group[first..].split('"').next().unwrap();
    let (whole, frac) = value.split_once('.').unwrap();
    assert!(whole.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(frac.len(), 2);
}

#[test]
fn test_grid_normalization_in_plan() {
    for (requested, expected) in [(1, 3), (6, 7), (13, 13)] {
        let config = AvatarConfig::builder()
            .pixel_grid_size(requested)
            .pixel_density(1.0)
            .build();
        let plan = plan(Some("grid"), &config).unwrap();
        assert_eq!(plan.config.pixel_grid_size, expected);
        assert_eq!(plan.pixel_cells.len() as u32, expected * expected);
    }
}

#[test]
fn test_plan_background_matches_svg() {
    let plan = plan(Some("plan"), &AvatarConfig::default()).unwrap();
    let svg = plan.to_svg();
    match &plan.background {
        Background::Gradient(gradient) => {
            for layer in &gradient.layers {
                assert!(svg.contains(&layer.hex()));
            }
        }
        Background::Solid { .. } => panic!("expected gradient"),
    }
}
