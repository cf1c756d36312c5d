//! Stylesheet URL and snippet builders.
//!
//! Pure functions: same record in, same string out. The only escaping
//! performed is the space-to-`+` substitution in the family name, which
//! is what the stylesheet endpoint expects; variant names are passed
//! through unvalidated.

use crate::family::FontFamily;

/// Base URL of the stylesheet endpoint.
const STYLESHEET_BASE_URL: &str = "https://fonts.googleapis.com/css?family=";

/// Build the stylesheet URL for a family.
///
/// Every space in the family name becomes `+`. When the record carries
/// variants they are appended after a `:`, comma-joined in input order;
/// an empty variants list appends nothing.
pub fn stylesheet_url(family: &FontFamily) -> String {
    let mut url = String::from(STYLESHEET_BASE_URL);
    url.push_str(&family.family.replace(' ', "+"));
    if !family.variants.is_empty() {
        url.push(':');
        url.push_str(&family.variants.join(","));
    }
    url
}

/// Build the HTML `<link>` snippet for a family.
pub fn link_snippet(family: &FontFamily) -> String {
    format!(
        r#"<link href="{}&display=swap" rel="stylesheet" />"#,
        stylesheet_url(family)
    )
}

/// Build the CSS `@import` snippet for a family.
pub fn import_snippet(family: &FontFamily) -> String {
    format!("@import url({}&display=swap);", stylesheet_url(family))
}
