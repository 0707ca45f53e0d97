//! Utility modules for file operations and article URL handling.
//!
//! # Modules
//!
//! - [`files`]: Async markdown listing, reading, and atomic writes
//! - [`urls`]: Slug and article link helpers

pub mod files;
pub mod urls;
