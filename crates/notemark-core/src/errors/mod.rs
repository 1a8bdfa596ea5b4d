//! Error types shared across Notemark crates.

pub mod config_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use source_error::SourceError;
