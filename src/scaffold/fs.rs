//! File-system collaborator
//!
//! The generator never touches `std::fs` directly; it goes through this
//! seam so runs can be exercised against an in-memory tree.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write-side file operations a scaffold run needs.
///
/// Templates are embedded in the binary, so there is no read side; a
/// "verbatim copy" is a write without substitution.
pub trait FileSystem {
    /// Create a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Fails with the underlying I/O error on permission or media failure.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate a text file.
    ///
    /// # Errors
    ///
    /// Fails with the underlying I/O error on permission or media failure.
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Append to a text file, creating it when missing.
    ///
    /// # Errors
    ///
    /// Fails with the underlying I/O error on permission or media failure.
    fn append_text(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create or truncate a binary file.
    ///
    /// # Errors
    ///
    /// Fails with the underlying I/O error on permission or media failure.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Whether a file or directory exists at the path.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// Writes create missing parent directories, matching how generated paths
/// are always nested under freshly created structure.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    fn ensure_parent(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl FileSystem for DiskFileSystem {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, content)
    }

    fn append_text(&self, path: &Path, content: &str) -> io::Result<()> {
        Self::ensure_parent(path)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory [`FileSystem`] double for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: RefCell<usize>,
}

impl MemoryFileSystem {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text content of a file, if present and valid UTF-8.
    #[must_use]
    pub fn text(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// All file paths, in order.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    /// All directory paths, in order.
    #[must_use]
    pub fn dir_paths(&self) -> Vec<PathBuf> {
        self.dirs.borrow().iter().cloned().collect()
    }

    /// Number of mutating operations performed so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn record_write(&self) {
        *self.writes.borrow_mut() += 1;
    }
}

impl FileSystem for MemoryFileSystem {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        self.record_write();
        // Register ancestors too, matching `create_dir_all`: the bundle
        // directory itself must exist afterwards, not only its leaves.
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    fn append_text(&self, path: &Path, content: &str) -> io::Result<()> {
        self.record_write();
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(content.as_bytes());
        Ok(())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.record_write();
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_append_creates_and_accumulates() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("config.php");

        fs.append_text(path, "one\n").unwrap();
        fs.append_text(path, "two\n").unwrap();

        assert_eq!(fs.text(path).unwrap(), "one\ntwo\n");
        assert_eq!(fs.write_count(), 2);
    }

    #[test]
    fn test_memory_fs_write_truncates() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("a.txt");

        fs.write_text(path, "first").unwrap();
        fs.write_text(path, "second").unwrap();

        assert_eq!(fs.text(path).unwrap(), "second");
    }

    #[test]
    fn test_memory_fs_exists_sees_dirs_and_files() {
        let fs = MemoryFileSystem::new();
        fs.ensure_dir(Path::new("vendor/acme")).unwrap();
        fs.write_text(Path::new("vendor/acme/README.md"), "hi").unwrap();

        assert!(fs.exists(Path::new("vendor/acme")));
        assert!(fs.exists(Path::new("vendor/acme/README.md")));
        assert!(!fs.exists(Path::new("vendor/other")));
    }

    #[test]
    fn test_memory_fs_ensure_dir_registers_ancestors() {
        let fs = MemoryFileSystem::new();
        fs.ensure_dir(Path::new("vendor/acme/demo-bundle/src/Resources/config"))
            .unwrap();

        assert!(fs.exists(Path::new("vendor/acme/demo-bundle")));
        assert!(fs.exists(Path::new("vendor")));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn test_disk_fs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = DiskFileSystem;
        let path = dir.path().join("nested/deep/file.txt");

        fs.write_text(&path, "payload").unwrap();
        fs.append_text(&path, " more").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "payload more");
    }
}
