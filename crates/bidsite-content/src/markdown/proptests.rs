use proptest::prelude::*;

use super::excerpt::{ELLIPSIS, ExcerptFormat, ExcerptOptions, generate_excerpt};
use super::frontmatter::{MetadataDefaults, extract_metadata};

proptest! {
    #[test]
    fn excerpt_never_exceeds_limit(content in "\\PC{0,400}", max in 1usize..250) {
        for format in [ExcerptFormat::Lines, ExcerptFormat::Flat] {
            let options = ExcerptOptions { max_length: max, format };
            let excerpt = generate_excerpt(&content, &options);
            prop_assert!(excerpt.chars().count() <= max + ELLIPSIS.len());
        }
    }

    #[test]
    fn short_plain_text_is_its_own_excerpt(text in "[a-zA-Z0-9\u{4e00}-\u{9fa5} ]{0,150}") {
        let excerpt = generate_excerpt(&text, &ExcerptOptions::index());
        prop_assert_eq!(excerpt, text.trim());
    }

    #[test]
    fn extraction_never_loses_fields(content in "\\PC{0,300}") {
        let defaults = MetadataDefaults::now();
        let meta = extract_metadata(&content, &defaults);
        // Date is only replaced by an explicit date key.
        if !content.to_lowercase().contains("date") && !content.contains("日期") {
            prop_assert_eq!(meta.date, defaults.date);
        }
    }
}
