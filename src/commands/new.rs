//! Interactive scaffolding command

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use crate::scaffold::{
    BundleGenerator, ConsoleNotifier, DiskFileSystem, ScaffoldOutcome, ScaffoldRequest, ZipArchiver,
};

/// Scaffold a new bundle from interactive prompts.
pub struct NewCommand {
    base_dir: PathBuf,
}

impl NewCommand {
    /// Create a command instance rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        let base_dir = env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base_dir })
    }

    /// Collect a request from prompts and execute the scaffold run.
    ///
    /// # Errors
    ///
    /// Returns an error when prompting fails, the request is invalid, or a
    /// write fails during generation.
    pub fn execute(&self) -> Result<()> {
        let request = Self::prompt_request()?;

        println!(
            "\n{} {} {}",
            style("Scaffolding").green().bold(),
            style("bundle:").bold(),
            style(format!("{}/{}", request.vendor_name, request.repository_name))
                .cyan()
                .bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating bundle files...");

        let disk = DiskFileSystem;
        let notifier = ConsoleNotifier;
        let archiver = ZipArchiver;
        let generator = BundleGenerator::new(
            &request,
            self.base_dir.clone(),
            &disk,
            &notifier,
            &archiver,
        )?;
        let outcome = generator.run()?;

        spinner.finish_and_clear();
        Self::print_success(&outcome);

        Ok(())
    }

    /// Collect the scaffold parameters from the operator.
    fn prompt_request() -> Result<ScaffoldRequest> {
        let vendor_name: String = Input::new()
            .with_prompt("Vendor name (e.g. acme)")
            .interact_text()?;
        let repository_name: String = Input::new()
            .with_prompt("Repository name (e.g. demo-bundle)")
            .interact_text()?;
        let bundle_name: String = Input::new()
            .with_prompt("Bundle display name")
            .interact_text()?;
        let description: String = Input::new()
            .with_prompt("Package description")
            .allow_empty(true)
            .interact_text()?;
        let license: String = Input::new()
            .with_prompt("License")
            .default("MIT".to_string())
            .interact_text()?;
        let author_name: String = Input::new().with_prompt("Author name").interact_text()?;
        let author_email: String = Input::new().with_prompt("Author email").interact_text()?;
        let author_website: String = Input::new()
            .with_prompt("Author website")
            .allow_empty(true)
            .interact_text()?;
        let package_version: String = Input::new()
            .with_prompt("Package version (leave empty to omit)")
            .allow_empty(true)
            .interact_text()?;
        let overwrite_existing = Confirm::new()
            .with_prompt("Overwrite an existing bundle with the same name?")
            .default(false)
            .interact()?;

        let add_dca_table = Confirm::new()
            .with_prompt("Add a database table?")
            .default(false)
            .interact()?;
        let dca_table = if add_dca_table {
            Input::new()
                .with_prompt("Table name (e.g. tl_demo)")
                .interact_text()?
        } else {
            String::new()
        };

        let add_frontend_module = Confirm::new()
            .with_prompt("Add a frontend module?")
            .default(false)
            .interact()?;
        let (
            frontend_module_name,
            frontend_module_category,
            frontend_module_trans,
            frontend_module_category_trans,
        ) = if add_frontend_module {
            Self::prompt_frontend_module()?
        } else {
            (
                String::new(),
                String::new(),
                [String::new(), String::new()],
                None,
            )
        };

        Ok(ScaffoldRequest {
            vendor_name,
            repository_name,
            bundle_name,
            description,
            license,
            author_name,
            author_email,
            author_website,
            package_version: (!package_version.is_empty()).then_some(package_version),
            overwrite_existing,
            add_dca_table,
            dca_table,
            add_frontend_module,
            frontend_module_name,
            frontend_module_category,
            frontend_module_trans,
            frontend_module_category_trans,
        })
    }

    /// Collect the frontend-module fields: name, category, two-locale label
    /// and optional category label.
    fn prompt_frontend_module() -> Result<(String, String, [String; 2], Option<String>)> {
        let name: String = Input::new().with_prompt("Module name").interact_text()?;
        let category: String = Input::new()
            .with_prompt("Module category")
            .default("miscellaneous".to_string())
            .interact_text()?;
        let label: String = Input::new().with_prompt("Module label").interact_text()?;
        let label_description: String = Input::new()
            .with_prompt("Module label description")
            .allow_empty(true)
            .interact_text()?;
        let category_label: String = Input::new()
            .with_prompt("Category label (leave empty to omit)")
            .allow_empty(true)
            .interact_text()?;

        Ok((
            name,
            category,
            [label, label_description],
            (!category_label.is_empty()).then_some(category_label),
        ))
    }

    /// Print the styled success block.
    fn print_success(outcome: &ScaffoldOutcome) {
        println!();
        println!("{}", style("✓ Bundle generated successfully!").green().bold());
        println!();
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
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Review the generated tree", style("1.").cyan());
        println!("  {} Adjust composer.json metadata as needed", style("2.").cyan());
        println!(
            "  {} Install the bundle in your project and enable it",
            style("3.").cyan()
        );
    }
}
