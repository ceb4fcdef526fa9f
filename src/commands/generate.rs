//! Manifest-driven scaffolding command

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::scaffold::{
    BundleGenerator, ConsoleNotifier, DiskFileSystem, ScaffoldRequest, ZipArchiver,
};

/// Scaffold a bundle from a TOML request manifest.
pub struct GenerateCommand {
    manifest: PathBuf,
}

impl GenerateCommand {
    /// Create a command instance for a manifest path.
    #[must_use]
    pub const fn new(manifest: PathBuf) -> Self {
        Self { manifest }
    }

    /// Load the request and execute the scaffold run.
    ///
    /// # Errors
    ///
    /// Returns an error when the manifest cannot be read or parsed, the
    /// request is invalid, or a write fails during generation.
    pub fn execute(&self) -> Result<()> {
        let raw = fs::read_to_string(&self.manifest)
            .with_context(|| format!("Failed to read manifest: {}", self.manifest.display()))?;
        let request: ScaffoldRequest = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", self.manifest.display()))?;

        println!(
            "\n{} {} {}",
            style("Scaffolding").green().bold(),
            style("bundle:").bold(),
            style(format!("{}/{}", request.vendor_name, request.repository_name))
                .cyan()
                .bold()
        );
        println!();

        let base_dir = env::current_dir().context("Failed to get current directory")?;
        let disk = DiskFileSystem;
        let notifier = ConsoleNotifier;
        let archiver = ZipArchiver;
        let generator = BundleGenerator::new(&request, base_dir, &disk, &notifier, &archiver)?;
        let outcome = generator.run()?;

        println!();
        println!("{}", style("✓ Bundle generated successfully!").green().bold());
        println!(
            "  {} {}",
            style("Bundle:").bold(),
            style(outcome.bundle_dir.display()).cyan()
        );
        if let Some(archive) = &outcome.archive_path {
            println!(
                "  {} {}",
                style("Archive:").bold(),
                style(archive.display()).cyan()
            );
        }

        Ok(())
    }
}
