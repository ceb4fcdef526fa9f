//! Bundle scaffolding engine
//!
//! Pure naming rules and rendering primitives, the per-run token table, and
//! the generator that sequences one scaffold run through injected
//! file-system, notifier and archiver collaborators.

pub mod archive;
pub mod error;
pub mod fs;
pub mod generator;
pub mod naming;
pub mod notify;
pub mod renderer;
pub mod request;
pub mod tokens;

pub use archive::{ArchiveError, Archiver, ZipArchiver};
pub use error::{ScaffoldError, ScaffoldResult};
pub use fs::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use generator::{BundleGenerator, ScaffoldOutcome};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use request::ScaffoldRequest;
pub use tokens::TokenTable;
