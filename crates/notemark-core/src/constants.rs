//! Shared constants for the Notemark annotation engine.

/// Notemark version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The delimiter character a keyword must be followed by when
/// `requiresDelimiter` is set (the default).
pub const DELIMITER: char = ':';

/// Byte length of the delimiter in a matched span.
pub const DELIMITER_LEN: usize = 1;

/// Default for `caseSensitive` when a definition omits it.
pub const DEFAULT_CASE_SENSITIVE: bool = true;

/// Default for `requiresDelimiter` when a definition omits it.
pub const DEFAULT_REQUIRES_DELIMITER: bool = true;

/// Group tag assigned to every built-in fallback keyword.
pub const DEFAULT_GROUP: &str = "notes";

/// Names of the built-in fallback keywords, in registry order.
pub const FALLBACK_KEYWORD_NAMES: [&str; 3] = ["TODO", "FIXME", "NOTE"];

/// Max entries in the compiled-pattern cache.
pub const DEFAULT_PATTERN_CACHE_CAPACITY: u64 = 256;
