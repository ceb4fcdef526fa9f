//! bundlesmith CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use bundlesmith::commands::{GenerateCommand, NewCommand};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bundlesmith")]
#[command(version)]
#[command(about = "Scaffold generator for CMS extension bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new bundle interactively
    New,
    /// Scaffold a bundle from a TOML request manifest
    Generate {
        /// Path to the request manifest (TOML)
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New => {
            NewCommand::new()?.execute()?;
        }
        Commands::Generate { manifest } => {
            let cmd = GenerateCommand::new(manifest);
            cmd.execute()?;
        }
    }

    Ok(())
}
