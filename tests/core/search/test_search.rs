// Integration tests for keyword filtering and result shape

use crate::common::{blog_corpus, create_test_services};
use sitesearch::Document;

#[tokio::test]
async fn test_search_hello_world_scenario() {
    let (services, source) = create_test_services(vec![
        Document::new("/posts/a", "Hello World").with_content("this is a test of search"),
    ]);

    let results = services.search.search("test").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/posts/a");
    assert_eq!(results[0].meta.title, "Hello World");
    assert_eq!(results[0].excerpt, "this is a <mark>test</mark> of search");

    assert!(services.search.search("xyz").await.is_empty());
    assert!(services.search.search("").await.is_empty());
    assert_eq!(source.fetches(), 1);
}

#[tokio::test]
async fn test_search_matches_each_field() {
    let (services, _source) = create_test_services(vec![
        Document::new("/posts/title", "Zebra crossing"),
        Document::new("/posts/desc", "Plain").with_description("about a zebra"),
        Document::new("/posts/body", "Plain").with_content("a zebra in the body"),
        Document::new("/posts/none", "Plain").with_content("horses only"),
    ]);

    let results = services.search.search("ZEBRA").await;
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/posts/title", "/posts/desc", "/posts/body"]);
}

#[tokio::test]
async fn test_search_document_appears_once() {
    let (services, _source) = create_test_services(vec![Document::new("/posts/all", "rust")
        .with_description("rust rust")
        .with_content("rust everywhere, rust")]);

    let results = services.search.search("rust").await;
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_search_order_is_index_order() {
    let (services, _source) = create_test_services(vec![
        Document::new("/posts/3", "third post").with_content("common"),
        Document::new("/posts/1", "first post").with_content("common"),
        Document::new("/posts/2", "second post").with_content("common common common"),
    ]);

    for keyword in ["common", "post", "o"] {
        let results = services.search.search(keyword).await;
        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["/posts/3", "/posts/1", "/posts/2"], "keyword {keyword}");
    }
}

#[tokio::test]
async fn test_search_metacharacters_literal() {
    let (services, _source) = create_test_services(vec![
        Document::new("/posts/dot", "Literal").with_content("the string a.b appears here"),
        Document::new("/posts/x", "Other").with_content("the string aXb appears here"),
    ]);

    let results = services.search.search("a.b").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/posts/dot");

    for keyword in ["*", "+", "?", "(", ")", "a.*"] {
        assert!(
            services.search.search(keyword).await.is_empty(),
            "keyword {keyword} should match nothing"
        );
    }
}

#[tokio::test]
async fn test_search_keyword_with_surrounding_whitespace() {
    let (services, _source) = create_test_services(blog_corpus());

    // Only blank keywords are trimmed away; padding is matched literally
    let results = services.search.search(" test ").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].excerpt, "this is a<mark> test </mark>of search");

    assert!(services.search.search(" hello").await.is_empty());
}

#[tokio::test]
async fn test_search_description_passes_through_unhighlighted() {
    let (services, _source) = create_test_services(blog_corpus());

    let results = services.search.search("tokio").await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].meta.description,
        "Notes on tokio, futures and pinning"
    );
    assert_eq!(
        results[0].excerpt,
        "Notes on <mark>tokio</mark>, futures and pinning"
    );
}

#[tokio::test]
async fn test_search_duplicate_urls_kept() {
    let (services, _source) = create_test_services(vec![
        Document::new("/posts/dup", "Same").with_content("first copy"),
        Document::new("/posts/dup", "Same").with_content("second copy"),
    ]);

    assert_eq!(services.search.search("copy").await.len(), 2);
}

#[tokio::test]
async fn test_search_results_serialize_for_ui() {
    let (services, _source) = create_test_services(blog_corpus());

    let results = services.search.search("hello").await;
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["url"], "/posts/a");
    assert_eq!(json[0]["meta"]["title"], "<mark>Hello</mark> World");
    assert_eq!(json[0]["meta"]["description"], "");
    assert_eq!(json[0]["excerpt"], "No description available.");
}

#[tokio::test]
async fn test_search_ellipsis_stays_unmarked() {
    let description = format!("v1.2 {}", "a".repeat(200));
    let (services, _source) = create_test_services(vec![
        Document::new("/posts/release", "Release").with_description(description),
    ]);

    let results = services.search.search(".").await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].excerpt,
        format!("v1<mark>.</mark>2 {}...", "a".repeat(145))
    );
}
