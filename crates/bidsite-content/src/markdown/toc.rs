//! Table of contents from second- and third-level headings.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// One navigable heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level, 2 or 3.
    pub level: u8,
    pub text: String,
    /// Anchor id, `section-{n}` numbered from zero in document order.
    pub anchor: String,
}

/// Collect h2 and h3 headings in document order.
///
/// Inline formatting is dropped from the heading text. A metadata block at
/// the top of the file is not mistaken for a setext heading.
///
/// ```rust
/// use bidsite_content::markdown::toc::extract_toc;
///
/// let toc = extract_toc("# 总览\n\n## 项目概况\n\n### 资金来源\n");
/// assert_eq!(toc.len(), 2);
/// assert_eq!(toc[0].anchor, "section-0");
/// assert_eq!(toc[1].text, "资金来源");
/// ```
pub fn extract_toc(content: &str) -> Vec<TocEntry> {
    let parser = Parser::new_ext(content, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    let mut entries = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = match level {
                    HeadingLevel::H2 => Some((2, String::new())),
                    HeadingLevel::H3 => Some((3, String::new())),
                    _ => None,
                };
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let anchor = format!("section-{}", entries.len());
                    entries.push(TocEntry {
                        level,
                        text: text.trim().to_string(),
                        anchor,
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    entries
}
