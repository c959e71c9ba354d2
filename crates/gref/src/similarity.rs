//! Word statistics over abstracts.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.]+").expect("valid word regex"));

/// Split text into words (runs of word characters and dots).
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Occurrence count per item.
pub fn counts<I, T>(items: I) -> BTreeMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut table = BTreeMap::new();
    for item in items {
        *table.entry(item).or_insert(0) += 1;
    }
    table
}

/// Count-weighted Jaccard similarity of two texts, case-insensitive.
///
/// The share of all word occurrences (in both texts) that belong to words
/// the texts have in common. 0.0 when both texts are empty.
#[must_use]
pub fn jaccard(x: &str, y: &str) -> f64 {
    let tx = counts(tokenize(x).into_iter().map(str::to_uppercase));
    let ty = counts(tokenize(y).into_iter().map(str::to_uppercase));

    let total: usize = tx.values().chain(ty.values()).sum();
    if total == 0 {
        return 0.0;
    }

    let shared: usize = tx
        .iter()
        .filter_map(|(word, cx)| ty.get(word).map(|cy| cx + cy))
        .sum();

    shared as f64 / total as f64
}

/// Adjacent word pairs ("w1 w2") counted across all texts.
pub fn word_pairs<'a, I>(texts: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = HashMap::new();
    for text in texts {
        let words = tokenize(text);
        for pair in words.windows(2) {
            *table.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
    }
    table
}

/// Pairs sorted by count descending, then alphabetically.
#[must_use]
pub fn ranked_pairs(table: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<_> = table.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_dots() {
        assert_eq!(tokenize("e.g. CRISPR-Cas9, v2.1!"), vec!["e.g.", "CRISPR", "Cas9", "v2.1"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_jaccard_bounds() {
        assert_eq!(jaccard("", ""), 0.0);
        assert_eq!(jaccard("alpha beta", "gamma"), 0.0);
        assert!((jaccard("Alpha beta", "alpha BETA") - 1.0).abs() < f64::EPSILON);

        // alpha: 1 + 1 shared out of 2 + 1 = 3 occurrences
        let partial = jaccard("alpha beta", "alpha");
        assert!((partial - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_pairs() {
        let table = word_pairs(["gene drive gene drive", "gene drive"]);
        assert_eq!(table["gene drive"], 3);
        assert_eq!(table["drive gene"], 1);

        let ranked = ranked_pairs(table);
        assert_eq!(ranked[0], ("gene drive".to_string(), 3));
    }
}
