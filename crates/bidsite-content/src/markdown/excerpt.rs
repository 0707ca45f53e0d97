//! Plain-text excerpts from Markdown articles.
//!
//! One staged cleanup pipeline serves both the index excerpt (newlines kept,
//! 200 characters) and the flattened previews and descriptions used on
//! article pages. Lengths are counted in Unicode scalar values, so a cut
//! never splits a code point.
//!
//! # Example
//!
//! ```rust
//! use bidsite_content::markdown::excerpt::{generate_excerpt, ExcerptOptions};
//!
//! let content = "# 公告\n\n本项目**已批准**建设。\n\n- 资金来源：自筹\n";
//! assert_eq!(generate_excerpt(content, &ExcerptOptions::index()), "本项目建设。\n资金来源");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Marker appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// How whitespace is collapsed in the cleaned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcerptFormat {
    /// Runs of blank lines become a single newline.
    #[default]
    Lines,
    /// All whitespace runs become a single space.
    Flat,
}

/// Excerpt length and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Maximum length in characters before the ellipsis.
    pub max_length: usize,
    pub format: ExcerptFormat,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self::index()
    }
}

impl ExcerptOptions {
    /// Excerpt stored in the content index.
    pub fn index() -> Self {
        Self {
            max_length: 200,
            format: ExcerptFormat::Lines,
        }
    }

    /// Listing card preview.
    pub fn preview() -> Self {
        Self {
            max_length: 150,
            format: ExcerptFormat::Flat,
        }
    }

    /// Page `<meta name="description">` text.
    pub fn seo_description() -> Self {
        Self {
            max_length: 120,
            format: ExcerptFormat::Flat,
        }
    }

    /// Description used when an article declares none.
    pub fn fallback_description() -> Self {
        Self {
            max_length: 100,
            format: ExcerptFormat::Flat,
        }
    }

    /// Override the maximum length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Cleanup stages, applied in order.
static STAGES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\r\n", "\n"),
        // HTML comments
        (r"<!--[\s\S]*?-->", ""),
        // YAML blocks
        (r"(?m)^---[\s\S]*?---\n", ""),
        // HTML tags
        (r"</?[A-Za-z][^>]*>", ""),
        // Headings
        (r"(?m)^#.*$", ""),
        // Images, then links with their text
        (r"!\[.*?\]\(.*?\)", ""),
        (r"\[.*?\]\(.*?\)", ""),
        // Inline code
        (r"`{1,3}.*?`{1,3}", ""),
        // Bold, then italic spans with their text
        (r"\*\*.*?\*\*", ""),
        (r"\*.*?\*", ""),
        // List bullets
        (r"(?m)^\s*[-*+]\s", ""),
        (r"(?m)^\s*\d+\.\s", ""),
        // Table rows
        (r"(?m)^.*\|.*$", ""),
        // Full-width colon to end of line
        (r"：.*", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Invalid excerpt stage regex"),
            replacement,
        )
    })
    .collect()
});

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid blank line regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Strip Markdown and HTML syntax, returning trimmed plain text.
pub fn clean_text(content: &str, format: ExcerptFormat) -> String {
    let mut text = content.to_string();
    for (re, replacement) in STAGES.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }

    let collapsed = match format {
        ExcerptFormat::Lines => BLANK_LINES.replace_all(&text, "\n"),
        ExcerptFormat::Flat => WHITESPACE.replace_all(&text, " "),
    };
    collapsed.trim().to_string()
}

/// Generate an excerpt of at most `max_length` characters plus [`ELLIPSIS`].
pub fn generate_excerpt(content: &str, options: &ExcerptOptions) -> String {
    let text = clean_text(content, options.format);
    truncate(text, options)
}

fn truncate(text: String, options: &ExcerptOptions) -> String {
    let Some((cut, _)) = text.char_indices().nth(options.max_length) else {
        return text;
    };
    let head = &text[..cut];
    let head = match options.format {
        ExcerptFormat::Lines => head,
        ExcerptFormat::Flat => head.trim_end(),
    };
    format!("{head}{ELLIPSIS}")
}
