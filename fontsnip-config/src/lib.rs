//! Configuration system for fontsnip.
//!
//! Provides loading, saving, and default values for the YAML config
//! file, and resolution of the webfonts API key from the environment
//! or the file. The API key is deliberately configuration, not a
//! baked-in literal.

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{API_KEY_ENV_VAR, Config};
pub use error::ConfigError;
