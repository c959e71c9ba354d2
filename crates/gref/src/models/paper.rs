//! Paper data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::AuthorRef;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// External identifiers; only the DOI is kept.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Papers this paper cites (only with `references.*` fields).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub references: Vec<PaperRef>,

    /// Papers citing this paper (only with `citations.*` fields).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub citations: Vec<PaperRef>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// IDs of resolved references, in API order.
    #[must_use]
    pub fn reference_ids(&self) -> Vec<String> {
        PaperRef::resolved_ids(&self.references)
    }

    /// IDs of resolved citing papers, in API order.
    #[must_use]
    pub fn citation_ids(&self) -> Vec<String> {
        PaperRef::resolved_ids(&self.citations)
    }
}

/// Minimal paper reference (used in citation lists).
///
/// The API returns `"paperId": null` for references it could not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRef {
    /// Paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,
}

impl PaperRef {
    pub(crate) fn resolved_ids(refs: &[Self]) -> Vec<String> {
        refs.iter().filter_map(|r| r.paper_id.clone()).filter(|id| !id.is_empty()).collect()
    }
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
}

/// Search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Indicates if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

/// Recommendations API response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Recommended papers, most similar first.
    #[serde(default)]
    pub recommended_papers: Vec<PaperRef>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
