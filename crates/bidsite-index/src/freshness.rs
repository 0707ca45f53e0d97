//! Index freshness checking.
//!
//! Compares an existing index file against the current content directory.
//! The check uses file names and modification times only, so no article is
//! read.
//!
//! An index is stale when:
//! - an article file is not in the index
//! - the index lists a file that no longer exists
//! - a file was modified after `lastUpdated`
//! - `total` disagrees with the article list

use std::collections::BTreeSet;
use std::path::Path;

use bidsite_core::util::files::{self, ListOptions};
use bidsite_core::{Error, Result};
use chrono::{DateTime, Utc};

use crate::types::ContentIndex;

/// Differences between an index and its content directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaleReport {
    /// Files present on disk but missing from the index.
    pub unindexed: Vec<String>,
    /// Index entries with no file on disk.
    pub removed: Vec<String>,
    /// Files modified after the index was built.
    pub modified: Vec<String>,
    /// `total` does not match the number of articles.
    pub total_mismatch: bool,
}

impl StaleReport {
    /// Whether the report found any difference.
    pub fn is_empty(&self) -> bool {
        self.unindexed.is_empty()
            && self.removed.is_empty()
            && self.modified.is_empty()
            && !self.total_mismatch
    }
}

/// Outcome of a freshness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStatus {
    /// The index matches the directory.
    Fresh,
    /// No index file exists.
    Missing,
    /// The index differs from the directory.
    Stale(StaleReport),
}

impl IndexStatus {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// Check whether the index at `index_path` reflects `content_dir`.
///
/// # Errors
///
/// Returns [`Error::MissingDirectory`] if `content_dir` is not a directory,
/// or a parse error if the index file is not valid JSON.
pub async fn check_index(
    content_dir: &Path,
    index_path: &Path,
    exclude: &[String],
) -> Result<IndexStatus> {
    if !files::is_dir(content_dir).await {
        return Err(Error::missing_directory(content_dir));
    }

    let Some(index) = ContentIndex::load(index_path)? else {
        log::info!("No index at {}", index_path.display());
        return Ok(IndexStatus::Missing);
    };

    let options = ListOptions::markdown().with_exclude(exclude.to_vec());
    let listing = files::list_files(content_dir, &options).await?;

    let on_disk: BTreeSet<&str> = listing.iter().map(|f| f.name.as_str()).collect();
    let indexed: BTreeSet<&str> = index.filenames().collect();

    let built_at = DateTime::parse_from_rfc3339(&index.last_updated)
        .map(|dt| dt.with_timezone(&Utc))
        .ok();
    if built_at.is_none() {
        log::warn!(
            "Index lastUpdated {:?} is not a timestamp; skipping mtime check",
            index.last_updated
        );
    }

    let mut report = StaleReport {
        unindexed: on_disk.difference(&indexed).map(|s| s.to_string()).collect(),
        removed: indexed.difference(&on_disk).map(|s| s.to_string()).collect(),
        total_mismatch: !index.is_consistent(),
        ..Default::default()
    };

    if let Some(built_at) = built_at {
        for file in listing.iter().filter(|f| indexed.contains(f.name.as_str())) {
            let modified = tokio::fs::metadata(&file.path)
                .await
                .and_then(|m| m.modified())
                .map_err(|e| Error::io_with_path(e, &file.path))?;
            // lastUpdated only keeps milliseconds.
            if DateTime::<Utc>::from(modified).timestamp_millis() > built_at.timestamp_millis() {
                report.modified.push(file.name.clone());
            }
        }
    }

    if report.is_empty() {
        Ok(IndexStatus::Fresh)
    } else {
        log::debug!("Index is stale: {report:?}");
        Ok(IndexStatus::Stale(report))
    }
}
