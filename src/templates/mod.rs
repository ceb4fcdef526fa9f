//! Embedded template payloads
//!
//! The bundle skeleton ships inside the binary as string constants carrying
//! literal `#token#` placeholders. The marker grammar is a compatibility
//! surface: existing template files can be dropped in unmodified.

pub mod files;
pub mod partials;

pub use files::*;
pub use partials::{DOC_HEADER, FMD_CATEGORY_END, FMD_CATEGORY_START};
