//! Configuration snapshot types.
//!
//! A snapshot is supplied fresh by the caller on every scan (or re-read by the
//! host on change notifications); the engine never mutates or stores one.

pub mod groups;
pub mod keywords;

pub use groups::GroupInfo;
pub use keywords::{fallback_keywords, KeywordConfig, KeywordOptions};
