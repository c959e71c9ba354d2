//! Text projections of a collection: CSV table, summaries, word pairs.

use crate::formatters::article_summary_wide;
use crate::formatters::csv::csv_row;
use crate::models::{Article, Collection};
use crate::similarity::{ranked_pairs, word_pairs};

const CSV_HEADER: [&str; 11] = [
    "id",
    "title",
    "authors",
    "venue",
    "date",
    "citations",
    "doi",
    "abstract",
    "references",
    "cited_by",
    "similar",
];

/// Separator for list-valued CSV cells.
const LIST_SEPARATOR: &str = "|";

/// One CSV row per article, header first.
#[must_use]
pub fn csv_table(collection: &Collection) -> String {
    let mut out = csv_row(CSV_HEADER);
    out.push('\n');
    for article in collection.articles() {
        out.push_str(&csv_row(article_fields(article)));
        out.push('\n');
    }
    out
}

fn article_fields(article: &Article) -> Vec<String> {
    let authors: Vec<&str> = article.authors.iter().map(|a| a.name_or_default()).collect();
    vec![
        article.id.clone(),
        article.title.clone(),
        authors.join(LIST_SEPARATOR),
        article.venue.clone(),
        article.date.clone(),
        article.citation_count.to_string(),
        article.doi.clone().unwrap_or_default(),
        article.abstract_text.clone(),
        article.references.join(LIST_SEPARATOR),
        article.cited_by.join(LIST_SEPARATOR),
        article.similar.join(LIST_SEPARATOR),
    ]
}

/// Wide summaries separated by blank lines; empty for an empty collection.
#[must_use]
pub fn text_summaries(collection: &Collection) -> String {
    collection
        .articles()
        .iter()
        .map(|a| format!("{}\n", article_summary_wide(a)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word-pair statistics over all abstracts.
///
/// Returns the file body (`"<w1> <w2>",<count>` per line, most frequent
/// first) and the ranked pairs for display.
#[must_use]
pub fn word_pair_report(collection: &Collection) -> (String, Vec<(String, usize)>) {
    let table = word_pairs(collection.articles().iter().map(|a| a.abstract_text.as_str()));
    let ranked = ranked_pairs(table);

    let mut body = String::new();
    for (pair, count) in &ranked {
        body.push_str(&format!("\"{pair}\",{count}\n"));
    }
    (body, ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorRef;

    fn sample() -> Collection {
        let mut collection = Collection::new("demo");
        collection.insert(Article {
            id: "p1".to_string(),
            title: "Gene drives, revisited".to_string(),
            authors: vec![
                AuthorRef { author_id: None, name: Some("Ann Lee".to_string()) },
                AuthorRef { author_id: None, name: Some("Bo Wu".to_string()) },
            ],
            abstract_text: "gene drive gene drive".to_string(),
            date: "2021".to_string(),
            citation_count: 3,
            references: vec!["r1".to_string(), "r2".to_string()],
            ..Default::default()
        });
        collection
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let table = csv_table(&Collection::new("empty"));
        assert_eq!(
            table,
            "id,title,authors,venue,date,citations,doi,abstract,references,cited_by,similar\n"
        );
    }

    #[test]
    fn test_csv_row_joins_lists() {
        let table = csv_table(&sample());
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("p1,\"Gene drives, revisited\",Ann Lee|Bo Wu,,2021,3,,"));
        assert!(row.ends_with(",r1|r2,,"));
    }

    #[test]
    fn test_text_summaries() {
        assert_eq!(text_summaries(&Collection::new("empty")), "");
        let text = text_summaries(&sample());
        assert!(text.starts_with("Title: Gene drives, revisited\n"));
        assert!(text.contains("By: Lee, Wu"));
    }

    #[test]
    fn test_word_pair_report() {
        let (body, ranked) = word_pair_report(&sample());
        assert_eq!(body, "\"gene drive\",2\n\"drive gene\",1\n");
        assert_eq!(ranked.len(), 2);
    }
}
