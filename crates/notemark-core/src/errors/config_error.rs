//! Configuration parse errors.

/// Errors raised while parsing a keyword configuration snapshot.
///
/// Note that a *valid but partial* definition is never an error: missing
/// optional fields are defaulted at resolution time. Only malformed input
/// (bad JSON/TOML) is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
