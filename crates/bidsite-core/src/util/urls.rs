//! Slug and link helpers for article pages.
//!
//! Article file names are mostly Chinese, so links carry them
//! percent-encoded with the same reserved set browsers use for URI
//! components.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a single URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Build a URL slug from a file name by dropping a `.md` suffix
/// (any case) and encoding the rest.
///
/// # Examples
///
/// ```
/// use bidsite_core::util::urls::generate_slug;
///
/// assert_eq!(generate_slug("notice.md"), "notice");
/// assert_eq!(generate_slug("招标.MD"), "%E6%8B%9B%E6%A0%87");
/// assert_eq!(generate_slug(""), "");
/// ```
pub fn generate_slug(filename: &str) -> String {
    encode_component(strip_md_suffix(filename))
}

/// Decode a slug back into text. Invalid escapes yield the input unchanged.
pub fn decode_slug(slug: &str) -> String {
    match percent_decode_str(slug).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => slug.to_string(),
    }
}

/// Link to the article detail page for a file.
///
/// ```
/// use bidsite_core::util::urls::article_url;
///
/// assert_eq!(article_url("a b.md"), "/post.html?file=a%20b.md");
/// ```
pub fn article_url(filename: &str) -> String {
    format!("/post.html?file={}", encode_component(filename))
}

/// Raw markdown fetch path with a cache-busting timestamp.
pub fn markdown_url(filename: &str, timestamp: i64) -> String {
    let name = if filename.ends_with(".md") {
        filename.to_string()
    } else {
        format!("{filename}.md")
    };
    format!("/markdown/{}?t={timestamp}", encode_component(&name))
}

/// Recover the markdown file name from a legacy `/article/<slug>.html` path.
pub fn filename_from_article_path(path: &str) -> Option<String> {
    let (_, tail) = path.rsplit_once("/article/")?;
    let slug = tail.strip_suffix(".html")?;
    if slug.is_empty() {
        return None;
    }
    Some(format!("{}.md", decode_slug(slug)))
}

fn strip_md_suffix(name: &str) -> &str {
    let len = name.len();
    if len >= 3 && name.is_char_boundary(len - 3) && name[len - 3..].eq_ignore_ascii_case(".md") {
        &name[..len - 3]
    } else {
        name
    }
}
