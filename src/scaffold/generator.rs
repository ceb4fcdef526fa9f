//! Bundle generation orchestrator
//!
//! Sequences one scaffold run: guard, folder structure, manifest, core
//! classes, static assets, the two optional stages and the final archive.
//! All reads and writes go through the injected collaborators; there is no
//! rollback, so a failed run leaves already-written files in place.

use std::path::{Path, PathBuf};

use super::archive::Archiver;
use super::error::{ScaffoldError, ScaffoldResult};
use super::fs::FileSystem;
use super::notify::Notifier;
use super::renderer;
use super::request::ScaffoldRequest;
use super::tokens::TokenTable;
use crate::templates;
use crate::templates::partials;

/// Fixed directory set created for every bundle.
const BUNDLE_DIRS: [&str; 8] = [
    "src/ContaoManager",
    "src/Resources/config",
    "src/Resources/public",
    "src/Resources/contao/config",
    "src/Resources/contao/dca",
    "src/Resources/contao/languages/en",
    "src/Resources/contao/templates",
    "src/EventListener/ContaoHooks",
];

/// Orchestrates one scaffold run against one request.
pub struct BundleGenerator<'a> {
    request: &'a ScaffoldRequest,
    tokens: TokenTable,
    base_dir: PathBuf,
    fs: &'a dyn FileSystem,
    notifier: &'a dyn Notifier,
    archiver: &'a dyn Archiver,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Root of the generated bundle tree.
    pub bundle_dir: PathBuf,
    /// Location of the archive, when the archive step succeeded.
    pub archive_path: Option<PathBuf>,
}

impl<'a> BundleGenerator<'a> {
    /// Create a generator for a validated request.
    ///
    /// The token table is built once here; every later rendering pass reads
    /// the same table.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Validation`] when the request's vendor or
    /// repository name yields an empty namespace segment.
    pub fn new(
        request: &'a ScaffoldRequest,
        base_dir: PathBuf,
        fs: &'a dyn FileSystem,
        notifier: &'a dyn Notifier,
        archiver: &'a dyn Archiver,
    ) -> ScaffoldResult<Self> {
        request.validate()?;
        let tokens = TokenTable::build(request);

        Ok(Self {
            request,
            tokens,
            base_dir,
            fs,
            notifier,
            archiver,
        })
    }

    /// Execute the run.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Validation`] when the destination already
    /// exists and overwriting was not permitted, or [`ScaffoldError::Io`]
    /// when a write fails; in the latter case files already written remain
    /// on disk.
    pub fn run(&self) -> ScaffoldResult<ScaffoldOutcome> {
        let bundle_dir = self
            .base_dir
            .join("vendor")
            .join(&self.request.vendor_name)
            .join(&self.request.repository_name);

        if self.fs.exists(&bundle_dir) && !self.request.overwrite_existing {
            let message = format!(
                "A bundle named \"{}/{}\" already exists. Set the overwrite flag to replace it.",
                self.request.vendor_name, self.request.repository_name
            );
            self.notifier.error(&message);
            return Err(ScaffoldError::Validation(message));
        }

        self.notifier.info(&format!(
            "Started generating \"{}/{}\" bundle.",
            self.request.vendor_name, self.request.repository_name
        ));

        self.create_folders(&bundle_dir)?;
        self.write_manifest(&bundle_dir)?;
        self.write_bundle_class(&bundle_dir)?;
        self.write_manager_plugin(&bundle_dir)?;
        self.copy_static_files(&bundle_dir)?;

        if let Some(table) = self.request.dca_table() {
            self.write_dca_table(&bundle_dir, table)?;
        }

        if self.request.add_frontend_module {
            self.write_frontend_module(&bundle_dir)?;
        }

        let archive_path = self.archive(&bundle_dir);

        Ok(ScaffoldOutcome {
            bundle_dir,
            archive_path,
        })
    }

    fn create_folders(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        for dir in BUNDLE_DIRS {
            self.fs.ensure_dir(&bundle_dir.join(dir))?;
        }

        self.notifier.info(&format!(
            "Generating folder structure in \"vendor/{}/{}\".",
            self.request.vendor_name, self.request.repository_name
        ));
        Ok(())
    }

    fn write_manifest(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        let mut content = renderer::substitute(templates::COMPOSER_JSON, &self.tokens);
        if self.request.version().is_none() {
            content = renderer::strip_version_line(&content);
        }

        self.fs.write_text(&bundle_dir.join("composer.json"), &content)?;
        self.notifier.info("Generating composer.json file.");
        Ok(())
    }

    fn write_bundle_class(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        let content = renderer::substitute(templates::BUNDLE_CLASS, &self.tokens);
        let class_name = format!("{}{}", self.top_namespace(), self.sub_namespace());

        self.fs
            .write_text(&bundle_dir.join("src").join(format!("{class_name}.php")), &content)?;
        self.notifier.info("Generating bundle class.");
        Ok(())
    }

    fn write_manager_plugin(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        let content = renderer::substitute(templates::MANAGER_PLUGIN, &self.tokens);

        self.fs
            .write_text(&bundle_dir.join("src/ContaoManager/Plugin.php"), &content)?;
        self.notifier.info("Generating manager plugin class.");
        Ok(())
    }

    fn copy_static_files(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        // Plain config files, copied verbatim.
        let configs = [
            ("src/Resources/config/listener.yml", templates::LISTENER_YML),
            ("src/Resources/config/parameters.yml", templates::PARAMETERS_YML),
            ("src/Resources/config/services.yml", templates::SERVICES_YML),
        ];
        for (target, payload) in configs {
            self.fs.write_text(&bundle_dir.join(target), payload)?;
            self.notifier.info(&format!("Created file \"{target}\"."));
        }

        // Shared CMS files carry the doc header and later accumulate
        // fragments from the optional stages.
        let shared = [
            ("src/Resources/contao/config/config.php", templates::CMS_CONFIG),
            ("src/Resources/contao/languages/en/modules.php", templates::MODULES_LANG),
        ];
        for (target, payload) in shared {
            let content = renderer::substitute(payload, &self.tokens);
            self.fs.write_text(&bundle_dir.join(target), &content)?;
            self.notifier.info(&format!("Created file \"{target}\"."));
        }

        // Logo asset, verbatim bytes.
        self.fs
            .write_bytes(&bundle_dir.join("src/Resources/public/logo.png"), templates::LOGO_PNG)?;
        self.notifier.info("Created file \"src/Resources/public/logo.png\".");

        // README is copied without substitution. Sibling docs are rendered;
        // this one historically is not, and downstream consumers diff
        // against that.
        self.fs.write_text(&bundle_dir.join("README.md"), templates::README_MD)?;
        self.notifier.info("Created file \"README.md\".");

        Ok(())
    }

    fn write_dca_table(&self, bundle_dir: &Path, table: &str) -> ScaffoldResult<()> {
        let descriptor = renderer::substitute(templates::DCA_TABLE, &self.tokens);
        let descriptor_path = bundle_dir
            .join("src/Resources/contao/dca")
            .join(format!("{table}.php"));
        self.fs.write_text(&descriptor_path, &descriptor)?;
        self.notifier
            .info(&format!("Created table descriptor for \"{table}\"."));

        let lang = renderer::substitute(templates::DCA_TABLE_LANG, &self.tokens);
        let lang_path = bundle_dir
            .join("src/Resources/contao/languages/en")
            .join(format!("{table}.php"));
        self.fs.write_text(&lang_path, &lang)?;
        self.notifier
            .info(&format!("Created locale file for \"{table}\"."));

        // Shared files accumulate fragments; append, never overwrite.
        self.fs.append_text(
            &bundle_dir.join("src/Resources/contao/config/config.php"),
            &self.render_fragment(partials::BACKEND_MODULE_FRAGMENT),
        )?;
        self.fs.append_text(
            &bundle_dir.join("src/Resources/contao/languages/en/modules.php"),
            &self.render_fragment(partials::BACKEND_MODULE_LANG_FRAGMENT),
        )?;
        self.notifier.info("Registered backend module.");

        Ok(())
    }

    fn write_frontend_module(&self, bundle_dir: &Path) -> ScaffoldResult<()> {
        self.fs
            .ensure_dir(&bundle_dir.join("src/Controller/FrontendModule"))?;

        let class_name = self.token("frontendmoduleclassname");
        let controller = renderer::substitute(templates::FRONTEND_MODULE_CLASS, &self.tokens);
        self.fs.write_text(
            &bundle_dir
                .join("src/Controller/FrontendModule")
                .join(format!("{class_name}.php")),
            &controller,
        )?;

        // tl_module.php: base file plus the palette fragment.
        let module_dca = renderer::substitute(templates::TL_MODULE_DCA, &self.tokens);
        let module_dca_path = bundle_dir.join("src/Resources/contao/dca/tl_module.php");
        self.fs.write_text(&module_dca_path, &module_dca)?;
        self.fs.append_text(
            &module_dca_path,
            &self.render_fragment(partials::MODULE_PALETTE_FRAGMENT),
        )?;

        // Service registration with the derived category/template/name.
        self.fs.append_text(
            &bundle_dir.join("src/Resources/config/services.yml"),
            &self.render_fragment(partials::MODULE_SERVICE_FRAGMENT),
        )?;

        // View template under its derived name, verbatim.
        let template_name = self.token("frontendmoduletemplate");
        self.fs.write_text(
            &bundle_dir
                .join("src/Resources/contao/templates")
                .join(format!("{template_name}.html5")),
            templates::MODULE_TEMPLATE_HTML5,
        )?;

        // Locale fragment, with the category paragraph kept only when a
        // category label was supplied.
        self.fs.append_text(
            &bundle_dir.join("src/Resources/contao/languages/en/modules.php"),
            &self.render_fragment(partials::MODULE_LANG_FRAGMENT),
        )?;

        self.notifier
            .info(&format!("Created frontend module \"{class_name}\"."));
        Ok(())
    }

    /// Archive the generated tree. Soft step: failure is reported and the
    /// run still succeeds.
    fn archive(&self, bundle_dir: &Path) -> Option<PathBuf> {
        let destination = self
            .base_dir
            .join(format!("{}.zip", self.request.repository_name));

        match self.archiver.create_archive(bundle_dir, &destination) {
            Ok(()) => {
                self.notifier
                    .info(&format!("Created archive \"{}\".", destination.display()));
                Some(destination)
            }
            Err(err) => {
                self.notifier
                    .info(&format!("Skipping archive step: {err}."));
                None
            }
        }
    }

    /// Substitute a partial and prune its optional category block.
    fn render_fragment(&self, partial: &str) -> String {
        let rendered = renderer::substitute(partial, &self.tokens);
        renderer::prune_optional_block(
            &rendered,
            partials::FMD_CATEGORY_START,
            partials::FMD_CATEGORY_END,
            self.request.category_label().is_some(),
        )
    }

    fn token(&self, key: &str) -> &str {
        self.tokens.get(key).unwrap_or_default()
    }

    fn top_namespace(&self) -> &str {
        self.token("toplevelnamespace")
    }

    fn sub_namespace(&self) -> &str {
        self.token("sublevelnamespace")
    }
}
