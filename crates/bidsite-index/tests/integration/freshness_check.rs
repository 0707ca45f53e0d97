//! Integration tests for the freshness check against a freshly built index.

use bidsite_index::{IndexBuilder, IndexStatus, check_index};

use crate::common::{SiteFixture, comment_article};

fn readme() -> Vec<String> {
    vec!["README.md".to_string()]
}

#[tokio::test]
async fn test_fresh_after_build() {
    let site = SiteFixture::new();
    site.write("a.md", comment_article("一", "正文"));

    IndexBuilder::new()
        .build(&site.content_dir, &site.index_path)
        .await
        .unwrap();

    let status = check_index(&site.content_dir, &site.index_path, &readme())
        .await
        .unwrap();
    assert!(status.is_fresh(), "unexpected status: {status:?}");
}

#[tokio::test]
async fn test_stale_after_adding_article() {
    let site = SiteFixture::new();
    site.write("a.md", comment_article("一", "正文"));

    IndexBuilder::new()
        .build(&site.content_dir, &site.index_path)
        .await
        .unwrap();
    site.write("b.md", comment_article("二", "新文章"));

    let status = check_index(&site.content_dir, &site.index_path, &readme())
        .await
        .unwrap();
    match status {
        IndexStatus::Stale(report) => assert_eq!(report.unindexed, vec!["b.md"]),
        other => panic!("expected stale index, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_before_first_build() {
    let site = SiteFixture::new();
    site.write("a.md", "正文");

    let status = check_index(&site.content_dir, &site.index_path, &readme())
        .await
        .unwrap();
    assert_eq!(status, IndexStatus::Missing);
}
