//! Search-engine display values for an article page.
//!
//! Baidu truncates long titles and descriptions in result listings, so the
//! page head carries shortened copies of the extracted metadata.

use serde::Serialize;

use super::excerpt::{ExcerptOptions, generate_excerpt};
use super::frontmatter::{ArticleMetadata, limit_keywords};

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 30;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 120;

/// Keywords used when an article declares none.
pub const DEFAULT_KEYWORDS: &str = "招标代理,政府采购,工程招标,招投标服务,项目公告";

/// Title, description, and keywords as rendered into the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl SeoMeta {
    /// Derive display values from a document and its extracted metadata.
    ///
    /// A missing description is replaced by a short excerpt of the body.
    pub fn from_document(content: &str, metadata: &ArticleMetadata) -> Self {
        let description = if metadata.description.is_empty() {
            generate_excerpt(content, &ExcerptOptions::fallback_description())
        } else {
            take_chars(&metadata.description, MAX_DESCRIPTION_CHARS)
        };

        let keywords = if metadata.keywords.trim().is_empty() {
            DEFAULT_KEYWORDS.to_string()
        } else {
            limit_keywords(&metadata.keywords)
        };

        Self {
            title: take_chars(&metadata.title, MAX_TITLE_CHARS),
            description,
            keywords,
        }
    }
}

fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
