//! Infrastructure adapters for pakkit.
//!
//! This crate implements the ports defined in
//! `pakkit_core::application::ports`. It contains all external dependencies
//! and I/O operations — in particular the JSON rendering of the manifest,
//! which the core deliberately never performs itself.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
