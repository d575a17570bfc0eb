//! Seeds and configs shared by the end-to-end tests.

use radiance_spec::{AvatarConfig, DigestAlgorithm};

/// Realistic seeds: emails, user ids, names, unicode and edge cases.
pub fn sample_seeds() -> Vec<String> {
    let mut seeds: Vec<String> = [
        "john@example.com",
        "jane.doe@example.org",
        "user-42",
        "Ada Lovelace",
        "Grace Hopper",
        "Семилла",
        "種",
        "a",
        " ",
        "0",
        "radiance",
        "Radiance",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    seeds.extend((0..28).map(|i| format!("seed-{:03}", i)));
    seeds
}

/// Adjacent seed pairs that differ by a single character.
pub fn seed_pairs() -> Vec<(String, String)> {
    (0..24)
        .map(|i| (format!("user{}", i), format!("user{}", i + 1)))
        .collect()
}

/// One config per notable option combination.
pub fn config_matrix() -> Vec<(&'static str, AvatarConfig)> {
    vec![
        ("default", AvatarConfig::default()),
        (
            "circle_text",
            AvatarConfig::builder().size(128).circle().text("JD").build(),
        ),
        (
            "squircle_base_color",
            AvatarConfig::builder()
                .squircle()
                .base_color("#8e8dcb")
                .pixel_color_accent()
                .build(),
        ),
        (
            "mix_dense",
            AvatarConfig::builder()
                .pixel_shape_mix()
                .pixel_density(0.8)
                .pixel_grid_size(9)
                .build(),
        ),
        (
            "monochrome_circles",
            AvatarConfig::builder()
                .pixel_color_monochrome()
                .pixel_shape_circles()
                .pixel_opacity(0.6)
                .build(),
        ),
        (
            "filters",
            AvatarConfig::builder()
                .saturation(1.4)
                .contrast(0.8)
                .fade_distance(120)
                .build(),
        ),
        (
            "no_pixels_long_text",
            AvatarConfig::builder()
                .enable_pixel_pattern(false)
                .text("Hello World")
                .font_family("Inter")
                .text_shadow(0.0)
                .build(),
        ),
        (
            "solid",
            AvatarConfig::builder().solid_color("hsl(200, 60%, 40%)").build(),
        ),
        (
            "blake3",
            AvatarConfig::builder()
                .digest_algorithm(DigestAlgorithm::Blake3)
                .build(),
        ),
    ]
}
