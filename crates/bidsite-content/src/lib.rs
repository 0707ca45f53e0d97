//! Article metadata extraction and text helpers for bidsite.
//!
//! This crate turns one Markdown document into the values the site needs:
//! its front-matter record, a plain-text excerpt, SEO display values, and
//! a table of contents. Every function here is pure and never fails;
//! malformed metadata falls back to defaults.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown processing
//!   - [`markdown::frontmatter`]: Three-strategy metadata extraction
//!   - [`markdown::excerpt`]: Staged plain-text excerpt pipeline
//!   - [`markdown::seo`]: Display limits for title, description, keywords
//!   - [`markdown::toc`]: h2/h3 table of contents
//!
//! # Example
//!
//! ```rust
//! use bidsite_content::markdown::{extract_metadata, generate_excerpt, ExcerptOptions, MetadataDefaults};
//!
//! let content = "<!-- title: 工程招标公告 | category: 政府采购 -->\n\n项目概况如下。";
//! let meta = extract_metadata(content, &MetadataDefaults::now());
//! assert_eq!(meta.title, "工程招标公告");
//! assert_eq!(meta.category, "政府采购");
//!
//! let excerpt = generate_excerpt(content, &ExcerptOptions::index());
//! assert_eq!(excerpt, "项目概况如下。");
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    ArticleMetadata, ExcerptFormat, ExcerptOptions, Extraction, MetadataDefaults, MetadataSource,
    SeoMeta, TocEntry, extract_metadata, extract_metadata_now, extract_metadata_with_source,
    extract_toc, generate_excerpt,
};
