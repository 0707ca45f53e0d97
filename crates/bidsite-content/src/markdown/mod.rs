//! Markdown processing for bidsite articles.
//!
//! - [`frontmatter`]: metadata extraction (comment block, YAML block, header lines)
//! - [`excerpt`]: plain-text excerpts for listings and descriptions
//! - [`seo`]: display-limited title, description, and keywords
//! - [`toc`]: table of contents from h2/h3 headings

pub mod excerpt;
pub mod frontmatter;
pub mod seo;
pub mod toc;

#[cfg(test)]
mod proptests;

// Re-export key types and functions
pub use excerpt::{ExcerptFormat, ExcerptOptions, clean_text, generate_excerpt};
pub use frontmatter::{
    ArticleMetadata, Extraction, MetadataDefaults, MetadataSource, extract_metadata,
    extract_metadata_now, extract_metadata_with_source, limit_keywords,
};
pub use seo::SeoMeta;
pub use toc::{TocEntry, extract_toc};
