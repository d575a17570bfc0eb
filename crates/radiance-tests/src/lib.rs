//! Radiance End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the config, backend and CLI
//! crates:
//!
//! - **Determinism**: byte-identical SVG across runs and config round trips
//! - **Properties**: ranges, symmetry, clamping, shapes over many seeds
//! - **CLI**: config files, output files and JSON envelopes
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p radiance-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use radiance_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| render(Some("seed"), &config).unwrap().svg, 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;
pub mod svg_inspect;

// Re-export commonly used items
pub use determinism::{verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{config_matrix, sample_seeds};
pub use svg_inspect::{overlay_group, OverlayElement};
