//! Core value types shared between the engine and its hosts.

pub mod collections;
pub mod hit;
pub mod position;

pub use hit::{Hit, RawMatch};
pub use position::{OffsetRange, Position, Span};
