// Library exports for testing and potential library use

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod browse_panel;
pub mod browse_window;
pub mod cli;
pub mod editor;
pub mod picker;

// Re-export the workspace crates under short names for callers.
pub use fontsnip_catalog as catalog;
pub use fontsnip_config as config;
