//! Archiver collaborator
//!
//! Walks a generated bundle tree and packs it into a single ZIP, preserving
//! empty directories. Archive failure is soft: the generator reports it and
//! the run still counts as successful.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Errors from the archive step.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Reading the source tree or writing the archive file failed.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    /// The ZIP writer rejected an entry.
    #[error("zip failure: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Directory walk failed below the source root.
    #[error("walk failure: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Packs a directory tree into a single archive file.
pub trait Archiver {
    /// Recursively add every file and directory under `source_dir` to a new
    /// archive at `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] when the tree cannot be read or the archive
    /// cannot be written.
    fn create_archive(&self, source_dir: &Path, destination: &Path) -> Result<(), ArchiveError>;
}

/// [`Archiver`] producing a deflated ZIP.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn create_archive(&self, source_dir: &Path, destination: &Path) -> Result<(), ArchiveError> {
        let file = File::create(destination)?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in WalkDir::new(source_dir).min_depth(1) {
            let entry = entry?;
            let name = archive_name(source_dir, entry.path())?;

            if entry.file_type().is_dir() {
                zip.add_directory(name, options)?;
            } else if entry.file_type().is_file() {
                zip.start_file(name, options)?;
                let mut source = File::open(entry.path())?;
                let mut contents = Vec::new();
                source.read_to_end(&mut contents)?;
                zip.write_all(&contents)?;
            }
        }

        zip.finish()?;
        Ok(())
    }
}

/// Forward-slash entry name relative to the archive root.
fn archive_name(root: &Path, path: &Path) -> Result<String, ArchiveError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "entry escapes archive root"))?;
    let name = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_zip_archiver_packs_files_and_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bundle");
        fs::create_dir_all(source.join("src/Resources/config")).unwrap();
        fs::create_dir_all(source.join("empty")).unwrap();
        fs::write(source.join("composer.json"), "{}").unwrap();
        fs::write(source.join("src/Resources/config/services.yml"), "services:\n").unwrap();

        let destination = dir.path().join("bundle.zip");
        ZipArchiver.create_archive(&source, &destination).unwrap();

        let reader = File::open(&destination).unwrap();
        let mut archive = zip::ZipArchive::new(reader).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.iter().any(|n| n == "composer.json"));
        assert!(names.iter().any(|n| n == "src/Resources/config/services.yml"));
        assert!(names.iter().any(|n| n.trim_end_matches('/') == "empty"));
    }

    #[test]
    fn test_zip_archiver_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ZipArchiver.create_archive(
            &dir.path().join("does-not-exist"),
            &dir.path().join("out.zip"),
        );
        assert!(result.is_err());
    }
}
