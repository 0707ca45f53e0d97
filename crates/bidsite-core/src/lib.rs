//! Shared error type and utilities for the bidsite crates.
//!
//! This crate provides the foundational types used across all bidsite crates.
//! It has no internal bidsite dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File listing, atomic writes, and article URL helpers

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::files::{FileInfo, ListOptions};
pub use util::urls::{article_url, decode_slug, generate_slug, markdown_url};
