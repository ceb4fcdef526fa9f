//! bundlesmith library
//!
//! Scaffolds a CMS extension-bundle skeleton from a set of user parameters:
//! embedded template payloads carry literal `#token#` placeholders which are
//! substituted from a per-run [`scaffold::TokenTable`], the rendered tree is
//! written through a [`scaffold::FileSystem`] collaborator and finally zipped.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod scaffold;
pub mod templates;

pub use scaffold::{
    BundleGenerator, ScaffoldError, ScaffoldOutcome, ScaffoldRequest, TokenTable,
};
