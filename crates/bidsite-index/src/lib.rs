//! Content index for the bidsite article listing.
//!
//! The index is a single JSON file summarising every Markdown article in the
//! content directory. It is rebuilt from scratch on each run and consumed by
//! the site's listing and search pages.
//!
//! # Modules
//!
//! - [`types`]: `ContentIndex` and `ArticleSummary`, the persisted shape
//! - [`builder`]: `IndexBuilder`, directory scan to JSON artifact
//! - [`freshness`]: compare an existing index with the directory
//! - [`search`]: title/excerpt search over summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use bidsite_index::IndexBuilder;
//! use std::path::Path;
//!
//! # async fn example() -> bidsite_core::Result<()> {
//! let stats = IndexBuilder::new()
//!     .build(Path::new("markdown"), Path::new("markdown/index.json"))
//!     .await?;
//! println!("Indexed {} articles", stats.articles_indexed);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod freshness;
pub mod search;
pub mod types;

pub use builder::{IndexBuilder, IndexStats, SkippedFile};
pub use freshness::{IndexStatus, StaleReport, check_index};
pub use search::{highlight_matches, search_articles};
pub use types::{ArticleSummary, ContentIndex, INDEX_VERSION, format_date};
