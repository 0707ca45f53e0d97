//! Article metadata extraction.
//!
//! Articles declare their metadata in one of three places, tried in order:
//!
//! 1. An HTML comment anywhere in the file (the convention the editors use):
//!
//! ```markdown
//! <!-- 百度SEO title: 某某工程招标公告 | keywords: 招标,工程 | description: 项目概况 -->
//! ```
//!
//! 2. A YAML-style block at the very start of the file:
//!
//! ```markdown
//! ---
//! title: "某某工程招标公告"
//! category: 政府采购
//! ---
//! ```
//!
//! 3. Plain `key: value` lines among the first five lines of the file.
//!
//! The first strategy that produces a record wins. Extraction never fails:
//! with nothing recognisable the caller's [`MetadataDefaults`] come back.
//!
//! # Usage
//!
//! ```rust
//! use bidsite_content::markdown::frontmatter::{extract_metadata, MetadataDefaults};
//!
//! let defaults = MetadataDefaults::now();
//! let meta = extract_metadata("---\ntitle: 'Hello'\n---\nBody", &defaults);
//! assert_eq!(meta.title, "Hello");
//! assert_eq!(meta.category, "招标信息");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Title used when an article declares none.
pub const DEFAULT_TITLE: &str = "未命名文章";

/// Category used when an article declares none.
pub const DEFAULT_CATEGORY: &str = "招标信息";

/// Placeholder title left in the editors' comment template.
pub const TEMPLATE_TITLE: &str = "文章标题（百度：20-30个中文字符）";

/// Maximum number of keywords kept from a comment block.
pub const MAX_KEYWORDS: usize = 5;

/// Number of leading lines scanned for `key: value` headers.
pub const HEADER_SCAN_LINES: usize = 5;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const COMMENT_MARKERS: [&str; 4] = [COMMENT_OPEN, COMMENT_CLOSE, "百度SEO", "首行注释规范"];

/// Metadata of one article. All fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub title: String,
    pub description: String,
    /// Comma-separated tag list.
    pub keywords: String,
    pub category: String,
    /// ISO-8601 timestamp as written by the author; not validated.
    pub date: String,
}

/// Fallback values for an extraction run.
///
/// Built fresh for each run so the default `date` reflects that run's clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDefaults {
    pub title: String,
    pub category: String,
    pub date: String,
}

impl MetadataDefaults {
    /// Defaults stamped with the given build time.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            date: iso_timestamp(at),
        }
    }

    /// Defaults stamped with the current time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// The record returned when no metadata is found.
    pub fn metadata(&self) -> ArticleMetadata {
        ArticleMetadata {
            title: self.title.clone(),
            description: String::new(),
            keywords: String::new(),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Where an extracted record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataSource {
    CommentBlock,
    YamlBlock,
    HeaderLines,
    Defaults,
}

/// An extracted record together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub metadata: ArticleMetadata,
    pub source: MetadataSource,
}

type Strategy = fn(&str, &MetadataDefaults) -> Option<ArticleMetadata>;

const STRATEGIES: &[(MetadataSource, Strategy)] = &[
    (MetadataSource::CommentBlock, parse_comment_block),
    (MetadataSource::YamlBlock, parse_yaml_block),
    (MetadataSource::HeaderLines, parse_header_lines),
];

/// Extract metadata, reporting which strategy matched.
pub fn extract_metadata_with_source(content: &str, defaults: &MetadataDefaults) -> Extraction {
    for (source, strategy) in STRATEGIES {
        if let Some(metadata) = strategy(content, defaults) {
            log::debug!("metadata resolved from {source:?}");
            return Extraction {
                metadata,
                source: *source,
            };
        }
    }
    Extraction {
        metadata: defaults.metadata(),
        source: MetadataSource::Defaults,
    }
}

/// Extract metadata from a Markdown document.
pub fn extract_metadata(content: &str, defaults: &MetadataDefaults) -> ArticleMetadata {
    extract_metadata_with_source(content, defaults).metadata
}

/// Extract metadata with defaults stamped at the current time.
pub fn extract_metadata_now(content: &str) -> ArticleMetadata {
    extract_metadata(content, &MetadataDefaults::now())
}

/// Cut a keyword list to its first [`MAX_KEYWORDS`] entries.
///
/// Both `,` and the full-width `，` separate entries. Lists that are already
/// short enough are returned unchanged.
///
/// ```rust
/// use bidsite_content::markdown::limit_keywords;
///
/// assert_eq!(limit_keywords("a,b,c,d,e,f"), "a,b,c,d,e");
/// assert_eq!(limit_keywords("招标，采购"), "招标，采购");
/// ```
pub fn limit_keywords(keywords: &str) -> String {
    let entries: Vec<&str> = keywords
        .split([',', '，'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect();
    if entries.len() > MAX_KEYWORDS {
        entries[..MAX_KEYWORDS].join(",")
    } else {
        keywords.to_string()
    }
}

// ============================================================================
// Field assignment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Keywords,
    Category,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeySet {
    English,
    Bilingual,
}

impl Field {
    fn from_key(key: &str, keys: KeySet) -> Option<Self> {
        let key = key.trim().to_lowercase();
        let field = match key.as_str() {
            "title" => Self::Title,
            "description" => Self::Description,
            "keywords" => Self::Keywords,
            "category" => Self::Category,
            "date" => Self::Date,
            other if keys == KeySet::Bilingual => match other {
                "标题" => Self::Title,
                "描述" => Self::Description,
                "关键词" => Self::Keywords,
                "分类" => Self::Category,
                "日期" => Self::Date,
                _ => return None,
            },
            _ => return None,
        };
        Some(field)
    }

    fn assign(self, meta: &mut ArticleMetadata, value: String) {
        let slot = match self {
            Self::Title => &mut meta.title,
            Self::Description => &mut meta.description,
            Self::Keywords => &mut meta.keywords,
            Self::Category => &mut meta.category,
            Self::Date => &mut meta.date,
        };
        *slot = value;
    }
}

/// Split `key: value` on the first ASCII colon and assign a recognised key.
fn apply_pair(
    meta: &mut ArticleMetadata,
    pair: &str,
    keys: KeySet,
    unquote: bool,
) -> Option<Field> {
    let (key, value) = pair.split_once(':')?;
    let field = Field::from_key(key, keys)?;
    let value = value.trim();
    let value = if unquote { strip_quotes(value) } else { value };
    field.assign(meta, value.to_string());
    Some(field)
}

/// Remove one leading and one trailing quote character.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

// ============================================================================
// Strategies
// ============================================================================

fn parse_comment_block(content: &str, defaults: &MetadataDefaults) -> Option<ArticleMetadata> {
    let start = content.find(COMMENT_OPEN)?;
    let close = content[start + COMMENT_OPEN.len()..].find(COMMENT_CLOSE)?;
    let end = start + COMMENT_OPEN.len() + close + COMMENT_CLOSE.len();

    let mut body = content[start..end].to_string();
    for marker in COMMENT_MARKERS {
        body = body.replace(marker, "");
    }

    let mut meta = defaults.metadata();
    let mut found_title = false;
    for line in body.trim().split('\n') {
        for part in line.split('|') {
            if apply_pair(&mut meta, part, KeySet::Bilingual, true) == Some(Field::Title) {
                found_title = true;
            }
        }
    }

    if !found_title || meta.title.is_empty() || meta.title == TEMPLATE_TITLE {
        return None;
    }
    meta.keywords = limit_keywords(&meta.keywords);
    Some(meta)
}

fn parse_yaml_block(content: &str, defaults: &MetadataDefaults) -> Option<ArticleMetadata> {
    if !content.starts_with("---") {
        return None;
    }
    let end = content[3..].find("\n---")? + 3;

    let mut meta = defaults.metadata();
    for line in content[3..end].split('\n') {
        apply_pair(&mut meta, line, KeySet::English, true);
    }
    Some(meta)
}

fn parse_header_lines(content: &str, defaults: &MetadataDefaults) -> Option<ArticleMetadata> {
    let mut meta = defaults.metadata();
    for line in content.split('\n').take(HEADER_SCAN_LINES) {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        apply_pair(&mut meta, line, KeySet::Bilingual, false);
    }
    Some(meta)
}
