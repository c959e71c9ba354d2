//! Search and fetch.

use std::io::{self, Write};

use crate::config::fields;
use crate::console::Console;
use crate::error::{ClientResult, CommandError};
use crate::models::{Article, Collection};

use super::Context;

/// Ranked search results as (link-less) articles.
///
/// # Errors
///
/// Returns error on API failure.
pub async fn search(ctx: &Context, query: &str) -> ClientResult<Vec<Article>> {
    let result = ctx.client.search_papers(query, ctx.search_limit, fields::SEARCH).await?;
    tracing::debug!(query, total = result.total, shown = result.data.len(), "Search finished");
    Ok(result.data.into_iter().map(|p| Article::from_paper(p, Vec::new())).collect())
}

/// Fetch one article with its references, citing papers and similar papers.
///
/// Recommendations are best effort: if that lookup fails the article is
/// still returned, with no similar papers.
///
/// # Errors
///
/// Returns error if the paper itself cannot be fetched.
pub async fn fetch_article(ctx: &Context, id: &str) -> ClientResult<Article> {
    let paper = ctx.client.get_paper(id, fields::ARTICLE).await?;

    let similar = if ctx.similar_limit > 0 {
        match ctx.client.get_recommendations(&paper.paper_id, ctx.similar_limit).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(id, error = %e, "Recommendations unavailable");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    Ok(Article::from_paper(paper, similar))
}

/// Outcome of adding a batch of IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// IDs of articles appended, in order.
    pub added: Vec<String>,
    /// Requested IDs already present.
    pub skipped: Vec<String>,
    /// Requested IDs whose fetch failed.
    pub failed: Vec<String>,
}

/// Fetch each ID and append it to `collection`, reporting per item.
///
/// A failed fetch is reported and the remaining IDs are still processed.
/// Requests may use any ID form the provider accepts (`DOI:…`, `PMID:…`);
/// deduplication uses the canonical ID it returns.
///
/// # Errors
///
/// Only console I/O failures are returned.
pub async fn add_articles<O: Write, E: Write>(
    ctx: &Context,
    collection: &mut Collection,
    ids: &[String],
    console: &mut Console<O, E>,
) -> io::Result<AddReport> {
    let mut report = AddReport::default();

    for id in ids {
        if collection.contains(id) {
            console.say(format!("Already have {id}..."))?;
            report.skipped.push(id.clone());
            continue;
        }

        match fetch_article(ctx, id).await {
            Ok(article) => {
                let canonical = article.id.clone();
                if collection.insert(article) {
                    console.say(format!("Found {canonical}..."))?;
                    report.added.push(canonical);
                } else {
                    console.say(format!("Already have {canonical}..."))?;
                    report.skipped.push(id.clone());
                }
            }
            Err(e) => {
                tracing::warn!(id, error = %e, retryable = e.is_retryable(), "Fetch failed");
                let message = CommandError::from(e).to_user_message();
                console.warn(format!("Failed {id}: {message}"))?;
                report.failed.push(id.clone());
            }
        }
    }

    Ok(report)
}
