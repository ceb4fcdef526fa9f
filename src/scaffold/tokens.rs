//! Per-run token table
//!
//! One table is built per scaffold run and handed, unchanged, to every
//! rendering pass. Derived entries (namespace segments, the `camelCase`
//! module identifier, the `snake_case` template name, the rendered doc
//! header) are
//! computed once here and memoized, so generated file names and generated
//! file contents always draw from the same values.

use std::collections::btree_map;
use std::collections::BTreeMap;

use super::naming;
use super::renderer;
use super::request::ScaffoldRequest;
use crate::templates::partials;

/// Mapping from placeholder-token key to its resolved value.
///
/// Token keys are the bare names; in template text they appear wrapped in
/// `#` markers (`#vendorname#`). The table is write-once per run: built by
/// [`TokenTable::build`], then only read.
#[derive(Debug, Default, Clone)]
pub struct TokenTable {
    entries: BTreeMap<String, String>,
}

impl TokenTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token value.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Look up a resolved value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Build the table for one validated request.
    ///
    /// Optional tokens (`composerpackageversion`, `dcatable`, the frontend
    /// module family, `frontendmodulecategorytrans`) are inserted only when
    /// the corresponding field was supplied; their markers then stay verbatim
    /// in rendered text and are pruned or stripped by the generator.
    #[must_use]
    pub fn build(request: &ScaffoldRequest) -> Self {
        let mut table = Self::new();

        table.insert("vendorname", &request.vendor_name);
        table.insert("repositoryname", &request.repository_name);
        table.insert("bundlename", &request.bundle_name);
        table.insert("composerdescription", &request.description);
        table.insert("license", &request.license);
        table.insert("authorname", &request.author_name);
        table.insert("authoremail", &request.author_email);
        table.insert("authorwebsite", &request.author_website);
        table.insert("toplevelnamespace", naming::namespace_segment(&request.vendor_name));
        table.insert("sublevelnamespace", naming::namespace_segment(&request.repository_name));
        table.insert("year", chrono::Utc::now().format("%Y").to_string());

        if let Some(version) = request.version() {
            table.insert("composerpackageversion", version);
        }

        if let Some(dca_table) = request.dca_table() {
            table.insert("dcatable", dca_table);
            table.insert("bemodule", dca_table.replace("tl_", ""));
        }

        if request.add_frontend_module {
            // An empty module name degenerates to class "Module" and
            // template "mod_"; the interactive command rejects empty
            // input before a request gets this far.
            let module_name = naming::lower_camel(&request.frontend_module_name);
            let class_name = format!("Module{}", naming::ucfirst(&module_name));
            let template_name = naming::snake_file_name(&module_name, "mod_", "");
            let category = naming::lower_camel(&request.frontend_module_category);

            table.insert("frontendmodulename", module_name);
            table.insert("frontendmoduleclassname", class_name);
            table.insert("frontendmodulecategory", category);
            table.insert("frontendmoduletemplate", template_name);
            table.insert("frontendmoduletrans_0", &request.frontend_module_trans[0]);
            table.insert("frontendmoduletrans_1", &request.frontend_module_trans[1]);
            if let Some(label) = request.category_label() {
                table.insert("frontendmodulecategorytrans", label);
            }
        }

        // The doc header is rendered once and injected as a plain value;
        // substitution itself never recurses into resolved values.
        let doc_header = renderer::substitute(partials::DOC_HEADER, &table);
        table.insert("phpdoc", doc_header.trim_end());

        table
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
