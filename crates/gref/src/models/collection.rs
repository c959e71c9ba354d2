//! Named, ordered, deduplicated set of articles.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Article;

/// A collection ("file") of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection name, also the file stem on disk.
    pub name: String,

    /// When the collection was created.
    pub created_at: DateTime<Utc>,

    /// Last time an article was added.
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    articles: Vec<Article>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self { name: name.into(), created_at: now, updated_at: now, articles: Vec::new() }
    }

    /// Articles in insertion order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the collection has no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Whether an article with this ID is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.articles.iter().any(|a| a.id == id)
    }

    /// Look up an article by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Set of article IDs.
    #[must_use]
    pub fn ids(&self) -> HashSet<&str> {
        self.articles.iter().map(|a| a.id.as_str()).collect()
    }

    /// Append an article unless its ID is already present.
    ///
    /// Returns `true` if the article was added.
    pub fn insert(&mut self, article: Article) -> bool {
        if self.contains(&article.id) {
            return false;
        }
        self.articles.push(article);
        self.updated_at = Utc::now();
        true
    }

    /// Drop duplicate IDs, keeping the first occurrence.
    ///
    /// Files edited by hand may violate the uniqueness invariant; the store
    /// calls this after loading.
    pub(crate) fn dedup(&mut self) -> usize {
        let before = self.articles.len();
        let mut seen = HashSet::new();
        self.articles.retain(|a| seen.insert(a.id.clone()));
        before - self.articles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        Article { id: id.to_string(), ..Default::default() }
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut collection = Collection::new("demo");
        assert!(collection.insert(article("a")));
        assert!(collection.insert(article("b")));
        assert!(!collection.insert(article("a")));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.articles()[0].id, "a");
        assert_eq!(collection.articles()[1].id, "b");
    }

    #[test]
    fn test_dedup_after_load() {
        let json = serde_json::json!({
            "name": "demo",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "articles": [{"id": "a"}, {"id": "b"}, {"id": "a", "title": "dup"}]
        });
        let mut collection: Collection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.dedup(), 1);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("a").unwrap().title, "");
    }
}
