//! The catalog record for a single font family.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the webfonts catalog.
///
/// Deserialized verbatim from the remote `items` array. The only
/// invariant the rest of fontsnip relies on is that `family` is
/// non-empty; everything else is carried as served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontFamily {
    /// Identifying name of the typeface (e.g. "Open Sans")
    pub family: String,

    /// Category such as "serif", "sans-serif", "display"
    #[serde(default)]
    pub category: String,

    /// Ordered style variants (e.g. "regular", "italic", "700")
    #[serde(default)]
    pub variants: Vec<String>,

    /// Supported character-set subsets (e.g. "latin", "cyrillic")
    #[serde(default)]
    pub subsets: Vec<String>,

    /// Format version tag (e.g. "v15")
    #[serde(default)]
    pub version: String,

    /// Last-modified date as served by the catalog (e.g. "2022-09-22")
    #[serde(default, rename = "lastModified")]
    pub last_modified: String,

    /// Variant name to downloadable font file URL
    #[serde(default)]
    pub files: HashMap<String, String>,
}

impl FontFamily {
    /// Create a record with just a family name. Used by tests and by
    /// callers that only need the URL builders.
    pub fn named(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            category: String::new(),
            variants: Vec::new(),
            subsets: Vec::new(),
            version: String::new(),
            last_modified: String::new(),
            files: HashMap::new(),
        }
    }

    /// Add variants to the record.
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }
}
