//! Radiance CLI - Command-line interface for deterministic avatar generation
//!
//! This binary renders avatars to SVG files or data URIs and inspects the
//! values derived from a seed.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli_args::{Cli, Commands};
use radiance_cli::commands;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,radiance_backend_svg=debug,radiance_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            config,
            base64,
            output,
            json,
        } => {
            let (seed, overrides) = config.into_parts();
            commands::generate::run(seed.as_deref(), &overrides, base64, output.as_deref(), json)
        }
        Commands::Inspect { config, json } => {
            let (seed, overrides) = config.into_parts();
            commands::inspect::run(seed.as_deref(), &overrides, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
