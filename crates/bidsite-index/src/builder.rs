//! Batch index building.
//!
//! `IndexBuilder` scans a flat content directory, extracts metadata and an
//! excerpt from every Markdown article, and writes the [`ContentIndex`]
//! artifact in one atomic step.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bidsite_index::IndexBuilder;
//! use std::path::Path;
//!
//! # async fn example() -> bidsite_core::Result<()> {
//! let builder = IndexBuilder::new().with_excerpt_length(160);
//! let stats = builder
//!     .build(Path::new("markdown"), Path::new("markdown/index.json"))
//!     .await?;
//! println!("Indexed {} articles", stats.articles_indexed);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use bidsite_content::markdown::frontmatter::iso_timestamp;
use bidsite_content::{ExcerptOptions, MetadataDefaults, extract_metadata, generate_excerpt};
use bidsite_core::util::files::{self, ListOptions};
use bidsite_core::{Error, Result};
use chrono::{DateTime, Utc};

use crate::types::{ArticleSummary, ContentIndex};

/// A file left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Statistics about a build.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Number of markdown files found.
    pub files_processed: usize,
    /// Number of articles written to the index.
    pub articles_indexed: usize,
    /// Total bytes of content read.
    pub bytes_processed: usize,
    /// Files that could not be read.
    pub skipped: Vec<SkippedFile>,
    /// Build timestamp stored as `lastUpdated`.
    pub last_updated: String,
}

impl IndexStats {
    /// Number of files that failed.
    pub fn errors(&self) -> usize {
        self.skipped.len()
    }
}

/// Content index builder.
///
/// Files are processed one at a time in file name order. One build timestamp
/// serves as both `lastUpdated` and the default article date.
#[derive(Clone)]
pub struct IndexBuilder {
    excerpt: ExcerptOptions,
    exclude: Vec<String>,
    build_time: Option<DateTime<Utc>>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IndexBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexBuilder")
            .field("excerpt_length", &self.excerpt.max_length)
            .field("exclude", &self.exclude)
            .field("build_time", &self.build_time.map(iso_timestamp))
            .finish()
    }
}

impl IndexBuilder {
    /// Create a builder with the index excerpt preset and `README.md` excluded.
    pub fn new() -> Self {
        Self {
            excerpt: ExcerptOptions::index(),
            exclude: ListOptions::markdown().exclude,
            build_time: None,
        }
    }

    /// Set the excerpt options.
    pub fn with_excerpt_options(mut self, options: ExcerptOptions) -> Self {
        self.excerpt = options;
        self
    }

    /// Set the excerpt length, keeping the format.
    pub fn with_excerpt_length(mut self, max_length: usize) -> Self {
        self.excerpt = self.excerpt.with_max_length(max_length);
        self
    }

    /// Set the file names to leave out.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Pin the build timestamp instead of reading the clock.
    pub fn with_build_time(mut self, at: DateTime<Utc>) -> Self {
        self.build_time = Some(at);
        self
    }

    /// Summarise one article.
    pub fn summarize(
        &self,
        filename: &str,
        content: &str,
        defaults: &MetadataDefaults,
    ) -> ArticleSummary {
        let metadata = extract_metadata(content, defaults);
        let excerpt = generate_excerpt(content, &self.excerpt);
        ArticleSummary::new(filename, metadata, excerpt)
    }

    /// Scan `content_dir` and assemble the index without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDirectory`] if `content_dir` is not a
    /// directory, or an I/O error if it cannot be listed. Unreadable
    /// individual files are recorded in [`IndexStats::skipped`].
    pub async fn collect(&self, content_dir: &Path) -> Result<(ContentIndex, IndexStats)> {
        if !files::is_dir(content_dir).await {
            return Err(Error::missing_directory(content_dir));
        }

        let build_time = self.build_time.unwrap_or_else(Utc::now);
        let options = ListOptions::markdown().with_exclude(self.exclude.clone());
        let listing = files::list_files(content_dir, &options).await?;
        log::info!(
            "Found {} markdown files in {}",
            listing.len(),
            content_dir.display()
        );

        let mut stats = IndexStats::default();
        let mut articles = Vec::with_capacity(listing.len());

        for file in listing {
            stats.files_processed += 1;

            let content = match files::read_file(&file.path).await {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("Skipping {}: {}", file.name, e);
                    stats.skipped.push(SkippedFile {
                        filename: file.name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            stats.bytes_processed += content.len();

            let defaults = MetadataDefaults::at(build_time);
            let summary = self.summarize(&file.name, &content, &defaults);
            log::debug!("Indexed {} as {:?}", summary.filename, summary.title);
            articles.push(summary);
            stats.articles_indexed += 1;
        }

        stats.last_updated = iso_timestamp(build_time);
        let index = ContentIndex::new(articles, stats.last_updated.clone());
        Ok((index, stats))
    }

    /// Scan `content_dir` and write the index to `index_path`.
    ///
    /// Nothing is written when the content directory is missing.
    pub async fn build(&self, content_dir: &Path, index_path: &Path) -> Result<IndexStats> {
        log::info!("Building content index from {}", content_dir.display());

        let (index, stats) = self.collect(content_dir).await?;
        index.save(index_path)?;

        log::info!(
            "Indexed {} articles ({} bytes, {} skipped) into {}",
            stats.articles_indexed,
            stats.bytes_processed,
            stats.errors(),
            index_path.display()
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_summarize() {
        let builder = IndexBuilder::new();
        let defaults = MetadataDefaults::at(fixed_time());
        let summary = builder.summarize(
            "notice.md",
            "<!-- title: 工程公告 | category: 工程招标 -->\n\n项目已立项。",
            &defaults,
        );
        assert_eq!(summary.filename, "notice.md");
        assert_eq!(summary.title, "工程公告");
        assert_eq!(summary.category, "工程招标");
        assert_eq!(summary.excerpt, "项目已立项。");
        assert_eq!(summary.date, "2025-03-01T08:30:00.000Z");
    }

    #[test]
    fn test_with_excerpt_length() {
        let builder = IndexBuilder::new().with_excerpt_length(3);
        let summary = builder.summarize("a.md", "abcdef", &MetadataDefaults::at(fixed_time()));
        assert_eq!(summary.excerpt, "abc...");
    }

    #[test]
    fn test_debug_output() {
        let builder = IndexBuilder::new().with_build_time(fixed_time());
        let debug = format!("{builder:?}");
        assert!(debug.contains("excerpt_length: 200"));
        assert!(debug.contains("README.md"));
        assert!(debug.contains("2025-03-01T08:30:00.000Z"));
    }

    #[tokio::test]
    async fn test_collect_shares_build_time() {
        let temp = TempDir::new().unwrap();
        tokio::fs::write(temp.path().join("a.md"), "正文").await.unwrap();

        let (index, stats) = IndexBuilder::new()
            .with_build_time(fixed_time())
            .collect(temp.path())
            .await
            .unwrap();

        assert_eq!(index.last_updated, "2025-03-01T08:30:00.000Z");
        assert_eq!(index.articles[0].date, index.last_updated);
        assert_eq!(stats.last_updated, index.last_updated);
        assert_eq!(stats.bytes_processed, "正文".len());
    }

    #[tokio::test]
    async fn test_collect_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = IndexBuilder::new()
            .collect(&temp.path().join("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingDirectory(_)));
    }

    #[tokio::test]
    async fn test_collect_rejects_file_as_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.md");
        tokio::fs::write(&file, "x").await.unwrap();

        let err = IndexBuilder::new().collect(&file).await.unwrap_err();
        assert!(matches!(err, Error::MissingDirectory(_)));
    }

    #[tokio::test]
    async fn test_build_missing_directory_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let index_path = temp.path().join("index.json");

        let result = IndexBuilder::new()
            .build(&temp.path().join("missing"), &index_path)
            .await;

        assert!(result.is_err());
        assert!(!index_path.exists());
    }
}
