//! # bidsite-cli
//!
//! Command-line front end for the bidsite content pipeline:
//! - Build the content index from the Markdown directory
//! - Check whether an existing index is stale
//! - Search indexed articles
//! - Inspect the metadata extracted from a single article
//! - Manage the configuration file

#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::{BidsiteApp, Outcome};
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::{BidsiteConfig, ContentConfig};
