//! zigls-lsp library
//!
//! Provides the LSP backend for Zig documents on top of the document store,
//! which tracks every open file together with the build graph that
//! contextualizes it.

pub mod backend;
pub mod capabilities;
pub mod convert;
pub mod store;

pub use backend::Backend;
pub use store::DocumentStore;
