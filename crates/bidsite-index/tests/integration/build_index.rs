//! Integration tests for building the content index.

use bidsite_core::Error;
use bidsite_index::{ContentIndex, IndexBuilder, INDEX_VERSION};

use crate::common::{SiteFixture, build_time, comment_article, yaml_article};

#[tokio::test]
async fn test_build_indexes_all_articles_sorted() {
    let site = SiteFixture::new();
    site.write("c-招标公告.md", comment_article("招标公告", "项目概况。"))
        .write("a-采购结果.md", yaml_article("采购结果", "政府采购", "结果公示。"))
        .write("b-plain.md", "没有元数据的文章。")
        .write("README.md", "# 说明")
        .write("notes.txt", "不是文章");

    let stats = IndexBuilder::new()
        .with_build_time(build_time())
        .build(&site.content_dir, &site.index_path)
        .await
        .expect("build should succeed");

    assert_eq!(stats.files_processed, 3);
    assert_eq!(stats.articles_indexed, 3);
    assert_eq!(stats.errors(), 0);

    let index = ContentIndex::load(&site.index_path).unwrap().unwrap();
    assert_eq!(index.version, INDEX_VERSION);
    assert_eq!(index.total, 3);
    assert_eq!(
        index.filenames().collect::<Vec<_>>(),
        vec!["a-采购结果.md", "b-plain.md", "c-招标公告.md"]
    );
    assert!(index.get("README.md").is_none());

    let yaml = index.get("a-采购结果.md").unwrap();
    assert_eq!(yaml.title, "采购结果");
    assert_eq!(yaml.category, "政府采购");
    assert_eq!(yaml.date, "2024-12-01");
    assert_eq!(yaml.excerpt, "结果公示。");

    let plain = index.get("b-plain.md").unwrap();
    assert_eq!(plain.title, "未命名文章");
    assert_eq!(plain.category, "招标信息");
    assert_eq!(plain.date, "2025-03-01T08:30:00.000Z");

    let comment = index.get("c-招标公告.md").unwrap();
    assert_eq!(comment.title, "招标公告");
    assert_eq!(comment.description, "招标公告简介");
    assert_eq!(comment.keywords, "招标,采购");
    assert_eq!(comment.excerpt, "项目概况。");
}

#[tokio::test]
async fn test_written_json_shape() {
    let site = SiteFixture::new();
    site.write("a.md", comment_article("标题", "正文"));

    IndexBuilder::new()
        .with_build_time(build_time())
        .build(&site.content_dir, &site.index_path)
        .await
        .unwrap();

    let json = site.index_json();
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["lastUpdated"], "2025-03-01T08:30:00.000Z");
    assert_eq!(json["total"], 1);
    let article = &json["articles"][0];
    for key in ["filename", "title", "excerpt", "description", "keywords", "date", "category"] {
        assert!(article.get(key).is_some(), "missing {key}");
    }
    assert_eq!(article.as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn test_rebuild_is_idempotent_apart_from_timestamp() {
    let site = SiteFixture::new();
    // Explicit dates, so only lastUpdated depends on the clock.
    site.write("a.md", yaml_article("一", "招标信息", "正文一"))
        .write("b.md", yaml_article("二", "工程招标", "正文二"));

    let builder = IndexBuilder::new();
    builder.build(&site.content_dir, &site.index_path).await.unwrap();
    let first = ContentIndex::load(&site.index_path).unwrap().unwrap();

    builder.build(&site.content_dir, &site.index_path).await.unwrap();
    let second = ContentIndex::load(&site.index_path).unwrap().unwrap();

    assert_eq!(first.articles, second.articles);
    assert_eq!(first.total, second.total);
}

#[tokio::test]
async fn test_unreadable_file_is_skipped() {
    let site = SiteFixture::new();
    site.write("good.md", comment_article("好", "正文"))
        .write("bad.md", [0xffu8, 0xfe, 0xfd]);

    let stats = IndexBuilder::new()
        .build(&site.content_dir, &site.index_path)
        .await
        .expect("one bad file must not abort the batch");

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.articles_indexed, 1);
    assert_eq!(stats.skipped.len(), 1);
    assert_eq!(stats.skipped[0].filename, "bad.md");

    let index = ContentIndex::load(&site.index_path).unwrap().unwrap();
    assert_eq!(index.filenames().collect::<Vec<_>>(), vec!["good.md"]);
}

#[tokio::test]
async fn test_empty_directory_writes_empty_index() {
    let site = SiteFixture::new();

    let stats = IndexBuilder::new()
        .build(&site.content_dir, &site.index_path)
        .await
        .unwrap();

    assert_eq!(stats.articles_indexed, 0);
    let index = ContentIndex::load(&site.index_path).unwrap().unwrap();
    assert_eq!(index.total, 0);
    assert!(index.articles.is_empty());
}

#[tokio::test]
async fn test_missing_directory_is_an_error() {
    let site = SiteFixture::new();
    let missing = site.root().join("no-such-dir");
    let index_path = site.root().join("index.json");

    let err = IndexBuilder::new()
        .build(&missing, &index_path)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingDirectory(_)));
    assert!(!index_path.exists());
}

#[tokio::test]
async fn test_custom_exclude_list() {
    let site = SiteFixture::new();
    site.write("README.md", "readme").write("draft.md", "草稿");

    let (index, _) = IndexBuilder::new()
        .with_exclude(vec!["draft.md".to_string()])
        .collect(&site.content_dir)
        .await
        .unwrap();

    assert_eq!(index.filenames().collect::<Vec<_>>(), vec!["README.md"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_index_file_is_readable_by_web_server() {
    use std::os::unix::fs::PermissionsExt;

    let site = SiteFixture::new();
    site.write("a.md", comment_article("公告", "正文。"));

    IndexBuilder::new()
        .with_build_time(build_time())
        .build(&site.content_dir, &site.index_path)
        .await
        .unwrap();

    let mode = std::fs::metadata(&site.index_path)
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o044, 0o044);
}
