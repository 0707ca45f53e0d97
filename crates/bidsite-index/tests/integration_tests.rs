//! Integration test suite for the content index.
//!
//! Builds indexes from fixture directories on disk and checks the written
//! artifact, skipped-file handling, and freshness reporting end to end.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
