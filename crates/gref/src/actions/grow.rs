//! Citation-neighborhood expansion.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};

use crate::console::Console;
use crate::models::Collection;

use super::Context;
use super::search::add_articles;

/// Outcome of a GROW run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrowReport {
    /// Cycles that fetched at least one candidate.
    pub cycles: u32,
    /// IDs appended, in order.
    pub added: Vec<String>,
    /// IDs whose fetch failed.
    pub failed: Vec<String>,
}

/// Linked IDs not yet in the collection, most-linked first.
///
/// Counts every occurrence across the references, cited-by and similar
/// lists of all articles. Ties are broken by ID ascending. IDs in
/// `exclude` are left out.
#[must_use]
pub fn frontier(collection: &Collection, exclude: &HashSet<String>) -> Vec<(String, usize)> {
    let present = collection.ids();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in collection.articles() {
        for id in article.links() {
            if !present.contains(id) && !exclude.contains(id) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> =
        counts.into_iter().map(|(id, n)| (id.to_string(), n)).collect();
    // BTreeMap order is already ID ascending; a stable sort keeps it for ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Run up to `cycles` expansion cycles, fetching `ctx.grow_batch` articles each.
///
/// Stops early once the frontier is empty. Failed IDs are skipped for the
/// rest of the run. Articles are appended to `collection` as they arrive,
/// so a cancelled run keeps everything fetched so far.
///
/// # Errors
///
/// Only console I/O failures are returned.
pub async fn grow<O: Write, E: Write>(
    ctx: &Context,
    collection: &mut Collection,
    cycles: u32,
    console: &mut Console<O, E>,
) -> io::Result<GrowReport> {
    let mut report = GrowReport::default();
    let mut failed: HashSet<String> = HashSet::new();

    for cycle in 1..=cycles {
        let batch: Vec<String> = frontier(collection, &failed)
            .into_iter()
            .take(ctx.grow_batch)
            .map(|(id, _)| id)
            .collect();

        if batch.is_empty() {
            tracing::info!(cycle, "Frontier exhausted");
            console.say("Nothing left to grow!")?;
            break;
        }

        tracing::debug!(cycle, batch = batch.len(), "Grow cycle");
        let added = add_articles(ctx, collection, &batch, console).await?;

        report.cycles += 1;
        report.added.extend(added.added);
        failed.extend(added.failed.iter().cloned());
        report.failed.extend(added.failed);
        // IDs that resolve to an article already present would otherwise be
        // ranked again every cycle.
        failed.extend(added.skipped);
    }

    tracing::info!(
        name = %collection.name,
        cycles = report.cycles,
        added = report.added.len(),
        failed = report.failed.len(),
        "Grow finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn article(id: &str, references: &[&str], cited_by: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            references: references.iter().map(ToString::to_string).collect(),
            cited_by: cited_by.iter().map(ToString::to_string).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_frontier_ranks_by_count_then_id() {
        let mut collection = Collection::new("demo");
        collection.insert(article("a", &["x", "y", "b"], &["z"]));
        collection.insert(article("b", &["y"], &["x", "w"]));

        let ranked = frontier(&collection, &HashSet::new());
        assert_eq!(
            ranked,
            vec![
                ("x".to_string(), 2),
                ("y".to_string(), 2),
                ("w".to_string(), 1),
                ("z".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_frontier_respects_exclusions() {
        let mut collection = Collection::new("demo");
        collection.insert(article("a", &["x", "y"], &[]));

        let exclude: HashSet<String> = ["x".to_string()].into_iter().collect();
        let ranked = frontier(&collection, &exclude);
        assert_eq!(ranked, vec![("y".to_string(), 1)]);
    }

    #[test]
    fn test_frontier_of_empty_collection() {
        assert!(frontier(&Collection::new("demo"), &HashSet::new()).is_empty());
    }
}
