//! Shared building blocks for the zigls crates: server configuration,
//! URI/path conversions, and position math for the LSP offset encodings.

pub mod config;
pub mod offsets;
pub mod uri;

pub use config::Config;
pub use offsets::{OffsetEncoding, Position, Range};
