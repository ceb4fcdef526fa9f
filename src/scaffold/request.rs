//! Scaffold request parameters
//!
//! The immutable set of user-supplied parameters for one run. Requests are
//! collected interactively or deserialized from a TOML manifest; either way
//! they are validated once, before any write happens.

use serde::Deserialize;

use super::error::{ScaffoldError, ScaffoldResult};
use super::naming;

/// User-supplied parameters for one scaffold run.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldRequest {
    /// Vendor name, e.g. `"acme"`. Becomes the top-level namespace segment.
    pub vendor_name: String,
    /// Repository / package name, e.g. `"demo-bundle"`. Becomes the
    /// sub-level namespace segment.
    pub repository_name: String,
    /// Human-readable bundle name used in the generated doc header.
    pub bundle_name: String,
    /// Package manifest description.
    pub description: String,
    /// License identifier, e.g. `"MIT"`.
    pub license: String,
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Author website.
    pub author_website: String,
    /// Optional semantic package version; when absent the version line is
    /// stripped from the generated manifest.
    #[serde(default)]
    pub package_version: Option<String>,
    /// Permit overwriting an existing bundle at the destination.
    #[serde(default)]
    pub overwrite_existing: bool,
    /// Enable the DB-table stage.
    #[serde(default)]
    pub add_dca_table: bool,
    /// DB table name, e.g. `"tl_demo"`. The stage only runs when the flag is
    /// set and this is non-empty.
    #[serde(default)]
    pub dca_table: String,
    /// Enable the frontend-module stage.
    #[serde(default)]
    pub add_frontend_module: bool,
    /// Raw frontend module name; camelized before use.
    #[serde(default)]
    pub frontend_module_name: String,
    /// Raw frontend module category; camelized before use.
    #[serde(default)]
    pub frontend_module_category: String,
    /// Two-locale module label (title, description).
    #[serde(default)]
    pub frontend_module_trans: [String; 2],
    /// Optional category label; when absent the category paragraph is
    /// pruned from the generated locale fragment.
    #[serde(default)]
    pub frontend_module_category_trans: Option<String>,
}

impl ScaffoldRequest {
    /// Check that the request can produce a consistent bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Validation`] when the vendor or repository
    /// name collapses to an empty namespace segment.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if naming::namespace_segment(&self.vendor_name).is_empty() {
            return Err(ScaffoldError::Validation(format!(
                "vendor name \"{}\" does not yield a namespace segment",
                self.vendor_name
            )));
        }
        if naming::namespace_segment(&self.repository_name).is_empty() {
            return Err(ScaffoldError::Validation(format!(
                "repository name \"{}\" does not yield a namespace segment",
                self.repository_name
            )));
        }
        Ok(())
    }

    /// Package version, if one was supplied.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.package_version.as_deref().filter(|v| !v.is_empty())
    }

    /// DB table name, if the table stage is enabled and the name non-empty.
    #[must_use]
    pub fn dca_table(&self) -> Option<&str> {
        (self.add_dca_table && !self.dca_table.is_empty()).then_some(self.dca_table.as_str())
    }

    /// Category label, if one was supplied.
    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.frontend_module_category_trans
            .as_deref()
            .filter(|label| !label.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ScaffoldRequest;

    /// A minimal valid request: no version, no optional stages.
    pub(crate) fn base_request() -> ScaffoldRequest {
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
}
