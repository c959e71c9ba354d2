//! Article record stored in collections.

use serde::{Deserialize, Serialize};

use super::{AuthorRef, Paper};
use crate::config::api;

/// A fetched article with its outbound links.
///
/// Articles are snapshots: once fetched they are never refreshed, only
/// added to or removed from a collection as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Semantic Scholar paper ID.
    pub id: String,

    /// Title ("Untitled" when the provider has none).
    #[serde(default)]
    pub title: String,

    /// Authors in byline order.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Abstract text, empty when unavailable.
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    /// Journal or conference.
    #[serde(default)]
    pub venue: String,

    /// Publication date (ISO date or bare year).
    #[serde(default)]
    pub date: String,

    /// Provider citation count at fetch time.
    #[serde(default)]
    pub citation_count: u32,

    /// Digital Object Identifier.
    #[serde(default)]
    pub doi: Option<String>,

    /// IDs of papers this article cites.
    #[serde(default)]
    pub references: Vec<String>,

    /// IDs of papers citing this article.
    #[serde(default)]
    pub cited_by: Vec<String>,

    /// IDs of provider-recommended similar papers.
    #[serde(default)]
    pub similar: Vec<String>,
}

impl Article {
    /// Build an article from an API paper plus its recommendation IDs.
    #[must_use]
    pub fn from_paper(paper: Paper, similar: Vec<String>) -> Self {
        let references = paper.reference_ids();
        let cited_by = paper.citation_ids();
        let date = paper
            .publication_date
            .clone()
            .or_else(|| paper.year.map(|y| y.to_string()))
            .unwrap_or_default();

        Self {
            title: paper.title_or_default().to_string(),
            doi: paper.doi().map(str::to_string),
            citation_count: paper.citation_count.map_or(0, |c| c.max(0).unsigned_abs()),
            id: paper.paper_id,
            authors: paper.authors,
            abstract_text: paper.r#abstract.unwrap_or_default(),
            venue: paper.venue.unwrap_or_default(),
            date,
            references,
            cited_by,
            similar,
        }
    }

    /// Author family names in byline order.
    #[must_use]
    pub fn surnames(&self) -> Vec<&str> {
        self.authors.iter().map(AuthorRef::surname).collect()
    }

    /// Publication year, or "n.d." when the date is unknown.
    #[must_use]
    pub fn year(&self) -> &str {
        self.date.split(['-', ' ']).next().filter(|y| !y.is_empty()).unwrap_or("n.d.")
    }

    /// Provider page for this article.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", api::PAPER_PAGE, self.id)
    }

    /// Every linked ID: references, then citing papers, then similar papers.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.references
            .iter()
            .chain(&self.cited_by)
            .chain(&self.similar)
            .map(String::as_str)
    }
}
