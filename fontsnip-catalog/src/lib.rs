//! Google Fonts catalog access for fontsnip.
//!
//! This crate provides:
//! - The `FontFamily` record as served by the webfonts catalog endpoint
//! - A one-shot catalog fetch over HTTPS with a typed error split
//!   (network vs. parse vs. missing credential)
//! - Pure builders for stylesheet URLs and the `<link>` / `@import`
//!   snippets derived from them
//!
//! Records are held in memory for the duration of one command
//! invocation and never persisted. There is deliberately no caching,
//! no retry, and no rate limiting here; failures surface to the caller
//! uninterpreted.

pub mod family;
pub mod fetch;
pub mod http;
pub mod url;

// Re-export main types for convenience
pub use family::FontFamily;
pub use fetch::{CatalogError, fetch_catalog};
pub use url::{import_snippet, link_snippet, stylesheet_url};
