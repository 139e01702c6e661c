//! # Gutter - Editor Side Panels
//!
//! Attaches a line-number gutter, a color-swatch gutter, and a
//! command toolbar to a text viewport.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with the builtin sample document
//! cargo run
//!
//! # Run with a file
//! cargo run -- path/to/file.rs
//!
//! # Run with a custom chrome theme
//! cargo run -- --theme path/to/theme.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gutter_ui::{run, Flags};

/// Gutter - side panels for a text viewport
#[derive(Parser, Debug)]
#[command(name = "gutter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to display
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// JSON theme file for the window chrome
    #[arg(short, long, value_name = "THEME")]
    theme: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Gutter v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags {
        file: args.file.map(|p| p.display().to_string()),
        theme: args.theme.map(|p| p.display().to_string()),
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["gutter"]);
        assert!(args.file.is_none());
        assert!(args.theme.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_file_and_verbosity() {
        let args = Args::parse_from(["gutter", "-vv", "demo.rs"]);
        assert_eq!(args.file, Some(PathBuf::from("demo.rs")));
        assert_eq!(args.verbose, 2);
    }
}
