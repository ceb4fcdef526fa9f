//! End-to-end scaffold runs against a real directory tree

use std::fs;
use std::path::Path;

use bundlesmith::scaffold::{
    BundleGenerator, DiskFileSystem, RecordingNotifier, ScaffoldRequest, ZipArchiver,
};
use tempfile::TempDir;

fn request() -> ScaffoldRequest {
    ScaffoldRequest {
        vendor_name: "acme".to_string(),
        repository_name: "demo-bundle".to_string(),
        bundle_name: "Demo Bundle".to_string(),
        description: "A demo extension bundle".to_string(),
        license: "MIT".to_string(),
        author_name: "Jane Doe".to_string(),
        author_email: "jane@example.com".to_string(),
        author_website: "https://example.com".to_string(),
        package_version: None,
        overwrite_existing: false,
        add_dca_table: false,
        dca_table: String::new(),
        add_frontend_module: false,
        frontend_module_name: String::new(),
        frontend_module_category: String::new(),
        frontend_module_trans: [String::new(), String::new()],
        frontend_module_category_trans: None,
    }
}

fn run(base: &Path, request: &ScaffoldRequest) -> bundlesmith::ScaffoldOutcome {
    let fs = DiskFileSystem;
    let notifier = RecordingNotifier::new();
    let archiver = ZipArchiver;
    let generator =
        BundleGenerator::new(request, base.to_path_buf(), &fs, &notifier, &archiver).unwrap();
    generator.run().unwrap()
}

#[test]
fn test_minimal_run_generates_consistent_tree() {
    let temp = TempDir::new().unwrap();
    let outcome = run(temp.path(), &request());

    let bundle = temp.path().join("vendor/acme/demo-bundle");
    assert_eq!(outcome.bundle_dir, bundle);

    // Fixed folder set.
    for dir in [
        "src/ContaoManager",
        "src/Resources/config",
        "src/Resources/public",
        "src/Resources/contao/config",
        "src/Resources/contao/dca",
        "src/Resources/contao/languages/en",
        "src/Resources/contao/templates",
        "src/EventListener/ContaoHooks",
    ] {
        assert!(bundle.join(dir).is_dir(), "missing directory {dir}");
    }

    // Manifest with no version field.
    let manifest = fs::read_to_string(bundle.join("composer.json")).unwrap();
    assert!(manifest.contains("\"name\": \"acme/demo-bundle\""));
    assert!(!manifest.contains("\"version\""));

    // Bundle class: file name matches the namespace declared inside it.
    let class = fs::read_to_string(bundle.join("src/AcmeDemoBundle.php")).unwrap();
    assert!(class.contains("namespace Acme\\DemoBundle;"));
    assert!(class.contains("class AcmeDemoBundle extends Bundle"));

    let plugin = fs::read_to_string(bundle.join("src/ContaoManager/Plugin.php")).unwrap();
    assert!(plugin.contains("namespace Acme\\DemoBundle\\ContaoManager;"));
    assert!(plugin.contains("BundleConfig::create(AcmeDemoBundle::class)"));

    // Doc header was substituted into generated PHP.
    assert!(class.contains("Demo Bundle"));
    assert!(class.contains("Jane Doe"));

    // No optional artifacts.
    let dca_entries: Vec<_> = fs::read_dir(bundle.join("src/Resources/contao/dca"))
        .unwrap()
        .collect();
    assert!(dca_entries.is_empty());
    assert!(!bundle.join("src/Controller").exists());
}

#[test]
fn test_readme_and_logo_are_copied_verbatim() {
    let temp = TempDir::new().unwrap();
    let outcome = run(temp.path(), &request());

    let readme = fs::read_to_string(outcome.bundle_dir.join("README.md")).unwrap();
    assert!(readme.contains("#bundlename#"), "README tokens must stay verbatim");

    let logo = fs::read(outcome.bundle_dir.join("src/Resources/public/logo.png")).unwrap();
    assert_eq!(&logo[..4], &[0x89, 0x50, 0x4E, 0x47], "PNG signature");
}

#[test]
fn test_archive_is_created_and_recorded() {
    let temp = TempDir::new().unwrap();
    let outcome = run(temp.path(), &request());

    let archive_path = outcome.archive_path.expect("archive should be recorded");
    assert_eq!(archive_path, temp.path().join("demo-bundle.zip"));

    let reader = fs::File::open(&archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(reader).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert!(names.iter().any(|n| n == "composer.json"));
    assert!(names
        .iter()
        .any(|n| n.trim_end_matches('/') == "src/EventListener/ContaoHooks"));
}

#[test]
fn test_dca_table_run_appends_registration_once() {
    let temp = TempDir::new().unwrap();
    let mut req = request();
    req.add_dca_table = true;
    req.dca_table = "tl_demo".to_string();
    let outcome = run(temp.path(), &req);

    assert!(outcome
        .bundle_dir
        .join("src/Resources/contao/dca/tl_demo.php")
        .is_file());
    assert!(outcome
        .bundle_dir
        .join("src/Resources/contao/languages/en/tl_demo.php")
        .is_file());

    let config =
        fs::read_to_string(outcome.bundle_dir.join("src/Resources/contao/config/config.php"))
            .unwrap();
    assert_eq!(config.matches("BE_MOD").count(), 1);
    assert!(config.contains("'tables' => ['tl_demo']"));

    let modules = fs::read_to_string(
        outcome
            .bundle_dir
            .join("src/Resources/contao/languages/en/modules.php"),
    )
    .unwrap();
    assert_eq!(modules.matches("$GLOBALS['TL_LANG']['MOD']['demo']").count(), 1);
}

#[test]
fn test_frontend_module_run_derives_consistent_names() {
    let temp = TempDir::new().unwrap();
    let mut req = request();
    req.add_frontend_module = true;
    req.frontend_module_name = "MyNew_super NASA Module".to_string();
    req.frontend_module_category = "miscellaneous".to_string();
    req.frontend_module_trans = ["NASA module".to_string(), "A NASA module".to_string()];
    let outcome = run(temp.path(), &req);

    // Acronym-flattening camel rule drives class, template and type names.
    let controller = fs::read_to_string(
        outcome
            .bundle_dir
            .join("src/Controller/FrontendModule/ModuleMyNewSuperNasaModule.php"),
    )
    .unwrap();
    assert!(controller.contains("class ModuleMyNewSuperNasaModule extends"));

    assert!(outcome
        .bundle_dir
        .join("src/Resources/contao/templates/mod_my_new_super_nasa_module.html5")
        .is_file());

    let services =
        fs::read_to_string(outcome.bundle_dir.join("src/Resources/config/services.yml")).unwrap();
    assert!(services.contains("template: mod_my_new_super_nasa_module"));
    assert!(services.contains("type: myNewSuperNasaModule"));
}

#[test]
fn test_existing_destination_without_overwrite_aborts() {
    let temp = TempDir::new().unwrap();
    let bundle = temp.path().join("vendor/acme/demo-bundle");
    fs::create_dir_all(&bundle).unwrap();

    let req = request();
    let fs_impl = DiskFileSystem;
    let notifier = RecordingNotifier::new();
    let archiver = ZipArchiver;
    let generator = BundleGenerator::new(
        &req,
        temp.path().to_path_buf(),
        &fs_impl,
        &notifier,
        &archiver,
    )
    .unwrap();

    assert!(generator.run().is_err());
    assert_eq!(notifier.errors().len(), 1);
    assert!(!bundle.join("composer.json").exists());
    assert!(!temp.path().join("demo-bundle.zip").exists());
}

#[test]
fn test_rerun_with_overwrite_succeeds() {
    let temp = TempDir::new().unwrap();
    run(temp.path(), &request());

    let mut req = request();
    req.overwrite_existing = true;
    let outcome = run(temp.path(), &req);
    assert!(outcome.bundle_dir.join("composer.json").is_file());
}
