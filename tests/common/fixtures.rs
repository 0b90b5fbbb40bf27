// Test fixtures: a small blog corpus and its wire payload

use sitesearch::Document;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Five articles covering every optional-field combination
#[allow(dead_code)] // Used in integration tests
pub fn blog_corpus() -> Vec<Document> {
    vec![
        Document::new("/posts/a", "Hello World").with_content("this is a test of search"),
        Document::new("/posts/rust-async", "Async Rust in Practice")
            .with_description("Notes on tokio, futures and pinning")
            .with_content("Futures are lazy. Nothing happens until a future is polled by an executor."),
        Document::new("/posts/regex", "Escaping a.b patterns")
            .with_description("Why a.b is not aXb")
            .with_content("Literal search for a.b should never match aXb or a-b."),
        Document::new("/posts/empty", "Placeholder"),
        Document::new("/posts/cjk", "中文测试")
            .with_content("这是一个关于搜索引擎的测试文章，包含中文内容。"),
    ]
}

/// The corpus as the site's search-data endpoint serves it
#[allow(dead_code)] // Used in integration tests
pub fn blog_payload() -> String {
    let records: Vec<serde_json::Value> = blog_corpus()
        .into_iter()
        .map(|doc| {
            serde_json::json!({
                "url": doc.url,
                "meta": {
                    "title": doc.title,
                    "description": doc.description,
                },
                "excerpt": doc.description,
                "content": doc.content,
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

/// A payload written to a temporary file
#[allow(dead_code)] // Used in integration tests
pub struct CorpusFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl CorpusFile {
    #[allow(dead_code)] // Used in integration tests
    pub fn with_payload(payload: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("search-data.json");
        std::fs::write(&path, payload).unwrap();
        Self { dir, path }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}
