//! Article search over index summaries.

use regex::RegexBuilder;

use crate::types::ArticleSummary;

/// Articles whose title or excerpt contains `query`, case-insensitively.
///
/// A blank query matches every article. Order is preserved.
pub fn search_articles<'a>(query: &str, articles: &'a [ArticleSummary]) -> Vec<&'a ArticleSummary> {
    if query.trim().is_empty() {
        return articles.iter().collect();
    }

    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle) || a.excerpt.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Wrap every case-insensitive occurrence of `query` in a highlight span.
///
/// ```rust
/// use bidsite_index::highlight_matches;
///
/// assert_eq!(
///     highlight_matches("Rust and rust", "RUST"),
///     r#"<span class="search-highlight">Rust</span> and <span class="search-highlight">rust</span>"#
/// );
/// ```
pub fn highlight_matches(text: &str, query: &str) -> String {
    if query.trim().is_empty() || text.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, r#"<span class="search-highlight">$0</span>"#)
            .into_owned(),
        Err(e) => {
            log::warn!("Cannot highlight query {query:?}: {e}");
            text.to_string()
        }
    }
}
