//! Template rendering primitives
//!
//! Two primitives plus one specialized prune. `substitute` performs literal
//! `#token#` replacement and knows nothing about which tokens are optional;
//! `prune_optional_block` removes (or unwraps) a marker-delimited region.
//! Which blocks to keep for a given run is policy owned by the generator.
//!
//! Substitution is not recursive: applying `substitute` twice is idempotent
//! only as long as no resolved value itself contains a `#...#` marker
//! sequence. The doc-header token is pre-rendered for exactly that reason.

use std::sync::LazyLock;

use regex::Regex;

use super::tokens::TokenTable;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*version.*#composerpackageversion#.*,[\r\n]").expect("static pattern")
});

/// Replace every `#key#` marker whose key is present in the table.
///
/// Markers for keys absent from the table are left verbatim; optional
/// content around them is pruned separately, never treated as an error.
#[must_use]
pub fn substitute(text: &str, tokens: &TokenTable) -> String {
    let mut rendered = text.to_string();
    for (key, value) in tokens.iter() {
        rendered = rendered.replace(&format!("#{key}#"), value);
    }
    rendered
}

/// Remove or unwrap the first region delimited by a marker pair.
///
/// With `keep == false` the region is removed inclusive of both markers and
/// their enclosing line terminators; everything outside the region stays
/// byte-identical. With `keep == true` only the marker literals are removed
/// and the enclosed content stays in place. Both `\r\n` and `\n` endings are
/// tolerated.
#[must_use]
pub fn prune_optional_block(text: &str, start: &str, end: &str, keep: bool) -> String {
    if keep {
        return text.replace(start, "").replace(end, "");
    }

    let pattern = format!(
        "[\\r\\n]{}.*{}[\\r\\n]",
        regex::escape(start),
        regex::escape(end)
    );
    // Escaped markers always compile; fall through untouched otherwise.
    let Ok(region) = Regex::new(&pattern) else {
        return text.to_string();
    };
    region.replace(text, "").into_owned()
}

/// Remove the manifest line that declares the package version.
///
/// Applied when no version was supplied: the manifest is structured data, so
/// a dangling `"version"` key with an unresolved token would be invalid,
/// unlike free-text templates where a leftover marker is tolerable. Exactly
/// one line goes, trailing comma and line terminator included; neighboring
/// lines are untouched.
#[must_use]
pub fn strip_version_line(text: &str) -> String {
    VERSION_LINE.replace(text, "").into_owned()
}
