//! Integration tests against the live Semantic Scholar API.
//!
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use gref::Config;
use gref::actions::{Context, fetch_article, search};

/// "Attention Is All You Need" - Vaswani et al. 2017
const ATTENTION: &str = "649def34f8be52c8b66281af98ae884c09aef38b";

fn context() -> Context {
    let config = Config::from_env().unwrap();
    Context::new(&config).unwrap()
}

#[tokio::test]
async fn test_live_search() {
    let results = search(&context(), "attention is all you need").await.unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|a| !a.id.is_empty()));
}

#[tokio::test]
async fn test_live_fetch_has_links() {
    let article = fetch_article(&context(), ATTENTION).await.unwrap();
    assert_eq!(article.id, ATTENTION);
    assert!(!article.references.is_empty());
    assert!(!article.cited_by.is_empty());
    assert_eq!(article.year(), "2017");
}

#[tokio::test]
async fn test_live_fetch_by_doi_resolves_canonical_id() {
    let article = fetch_article(&context(), "DOI:10.48550/arXiv.1706.03762").await.unwrap();
    assert_eq!(article.id, ATTENTION);
}
