//! Common fixtures for content index integration tests.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

/// A temporary site layout with a `markdown/` content directory.
pub struct SiteFixture {
    temp: TempDir,
    pub content_dir: PathBuf,
    pub index_path: PathBuf,
}

impl SiteFixture {
    /// Create an empty content directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let content_dir = temp.path().join("markdown");
        std::fs::create_dir(&content_dir).expect("create content dir");
        let index_path = content_dir.join("index.json");
        Self {
            temp,
            content_dir,
            index_path,
        }
    }

    /// Write a file into the content directory.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> &Self {
        std::fs::write(self.content_dir.join(name), content).expect("write fixture");
        self
    }

    /// Root of the temporary site.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Read the written index back as raw JSON.
    pub fn index_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(&self.index_path).expect("read index");
        serde_json::from_str(&text).expect("parse index")
    }
}

/// A fixed build time for reproducible dates.
pub fn build_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap()
}

/// A typical comment-block article.
pub fn comment_article(title: &str, body: &str) -> String {
    format!("<!-- 百度SEO title: {title} | keywords: 招标,采购 | description: {title}简介 -->\n\n# {title}\n\n{body}\n")
}

/// A YAML-block article.
pub fn yaml_article(title: &str, category: &str, body: &str) -> String {
    format!("---\ntitle: \"{title}\"\ncategory: {category}\ndate: 2024-12-01\n---\n\n{body}\n")
}
