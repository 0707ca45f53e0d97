//! Persisted index types.
//!
//! The JSON shape is consumed by the site front end, so field names and
//! order are fixed:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "lastUpdated": "2025-03-01T08:30:00.000Z",
//!   "total": 1,
//!   "articles": [
//!     {
//!       "filename": "notice.md",
//!       "title": "...",
//!       "excerpt": "...",
//!       "description": "",
//!       "keywords": "",
//!       "date": "...",
//!       "category": "招标信息"
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use bidsite_content::ArticleMetadata;
use bidsite_core::util::files::write_atomic;
use bidsite_core::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Index format version.
pub const INDEX_VERSION: &str = "1.0";

/// Summary of one article as stored in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// File name inside the content directory, with extension. Unique.
    pub filename: String,
    pub title: String,
    pub excerpt: String,
    pub description: String,
    pub keywords: String,
    pub date: String,
    pub category: String,
}

impl ArticleSummary {
    /// Assemble a summary from extracted metadata and an excerpt.
    pub fn new(filename: impl Into<String>, metadata: ArticleMetadata, excerpt: String) -> Self {
        Self {
            filename: filename.into(),
            title: metadata.title,
            excerpt,
            description: metadata.description,
            keywords: metadata.keywords,
            date: metadata.date,
            category: metadata.category,
        }
    }
}

/// The content index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    pub version: String,
    pub last_updated: String,
    pub total: usize,
    pub articles: Vec<ArticleSummary>,
}

impl ContentIndex {
    /// Build an index, sorting articles by file name.
    pub fn new(mut articles: Vec<ArticleSummary>, last_updated: impl Into<String>) -> Self {
        articles.sort_by(|a, b| a.filename.cmp(&b.filename));
        Self {
            version: INDEX_VERSION.to_string(),
            last_updated: last_updated.into(),
            total: articles.len(),
            articles,
        }
    }

    /// Whether `total` matches the article list.
    pub fn is_consistent(&self) -> bool {
        self.total == self.articles.len()
    }

    /// Serialize as pretty JSON (2-space indent).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization(format!("Failed to serialize index: {e}")))
    }

    /// Parse an index from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("Invalid index JSON: {e}")))
    }

    /// Load an index file.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json(&json).map(Some)
    }

    /// Write the index atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())
    }

    /// Look up an article by file name.
    pub fn get(&self, filename: &str) -> Option<&ArticleSummary> {
        self.articles.iter().find(|a| a.filename == filename)
    }

    /// File names in index order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|a| a.filename.as_str())
    }
}

/// Format a stored date for display as `YYYY-MM-DD`.
///
/// Unparsable input is returned unchanged; empty input yields an empty string.
///
/// ```rust
/// use bidsite_index::format_date;
///
/// assert_eq!(format_date("2025-03-01T08:30:00.000Z"), "2025-03-01");
/// assert_eq!(format_date("下周一"), "下周一");
/// ```
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            ["%Y-%m-%d", "%Y/%m/%d"]
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        });

    match parsed {
        Some(day) => day.format("%Y-%m-%d").to_string(),
        None => date.to_string(),
    }
}
