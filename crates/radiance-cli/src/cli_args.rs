//! CLI argument definitions for the Radiance command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

use radiance_cli::commands::ConfigOverrides;

/// Radiance - Deterministic SVG Avatars
#[derive(Parser)]
#[command(name = "radiance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render an avatar to SVG
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Emit a base64 data URI instead of raw SVG
        #[arg(long)]
        base64: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the digest, gradient layers and pixel overlay for a seed
    Inspect {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Seed and visual options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ConfigArgs {
    /// Seed string (omit for a random seed)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Edge length in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Avatar outline
    #[arg(long, value_parser = ["square", "circle", "squircle"])]
    pub shape: Option<String>,

    /// Centered text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Hue anchor for the gradient (hex, rgb() or hsl())
    #[arg(long)]
    pub base_color: Option<String>,

    /// Flat fill replacing the gradient (hex, rgb() or hsl())
    #[arg(long)]
    pub solid_color: Option<String>,

    /// Disable the pixel overlay
    #[arg(long)]
    pub no_pixels: bool,
}

impl ConfigArgs {
    /// Split into the seed and the config overrides.
    pub fn into_parts(self) -> (Option<String>, ConfigOverrides) {
        (
            self.seed,
            ConfigOverrides {
                config_path: self.config,
                size: self.size,
                shape: self.shape,
                text: self.text,
                base_color: self.base_color,
                solid_color: self.solid_color,
                no_pixels: self.no_pixels,
            },
        )
    }
}
