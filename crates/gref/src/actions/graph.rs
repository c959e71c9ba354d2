//! Citation graph in Graphviz DOT form.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;

use crate::formatters::{article_label, article_summary_wide};
use crate::models::{Article, Collection};
use crate::similarity::jaccard;

/// Fill color of a node that only cites.
const CITING_COLOR: [u8; 3] = [255, 220, 140];
/// Fill color of a node that is only ever cited.
const CITED_COLOR: [u8; 3] = [150, 230, 255];

const GRAPH_ATTRS: &str = "pad=0.7
layout=dot
rankdir=BT
ranksep=0.5
nodesep=0.0
splines=true
outputorder=edgesfirst

node [shape=note style=filled fontsize=9 fillcolor=none target=\"_blank\" ordering=\"in\"]
edge [arrowhead=none]";

/// Directed citation graph restricted to one collection.
///
/// Edges point from the cited article to the citing one.
#[derive(Debug)]
pub struct CitationGraph<'a> {
    articles: Vec<&'a Article>,
    edges: BTreeSet<(&'a str, &'a str)>,
}

impl<'a> CitationGraph<'a> {
    /// Collect edges from both the reference and cited-by lists.
    ///
    /// Links to articles outside the collection and self-citations are
    /// dropped; an edge found from both ends appears once.
    #[must_use]
    pub fn build(collection: &'a Collection) -> Self {
        let ids = collection.ids();
        let mut edges = BTreeSet::new();

        for article in collection.articles() {
            let this = article.id.as_str();
            for cited in &article.references {
                if let Some(&cited) = ids.get(cited.as_str()) {
                    if cited != this {
                        edges.insert((cited, this));
                    }
                }
            }
            for citing in &article.cited_by {
                if let Some(&citing) = ids.get(citing.as_str()) {
                    if citing != this {
                        edges.insert((this, citing));
                    }
                }
            }
        }

        let mut articles: Vec<&Article> = collection.articles().iter().collect();
        articles.sort_by(|a, b| a.id.cmp(&b.id));

        Self { articles, edges }
    }

    /// Nodes sorted by ID.
    #[must_use]
    pub fn articles(&self) -> &[&'a Article] {
        &self.articles
    }

    /// `(cited, citing)` pairs, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `(times cited, times citing)` within the graph.
    #[must_use]
    pub fn degree(&self, id: &str) -> (usize, usize) {
        self.edges.iter().fold((0, 0), |(cited, citing), (x, y)| {
            (cited + usize::from(*x == id), citing + usize::from(*y == id))
        })
    }

    /// Render as a DOT digraph.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let by_id: HashMap<&str, &Article> =
            self.articles.iter().map(|a| (a.id.as_str(), *a)).collect();

        let mut nodes = Vec::with_capacity(self.articles.len());
        for article in &self.articles {
            let (cited, citing) = self.degree(&article.id);
            let ratio = if cited + citing == 0 {
                0.5
            } else {
                cited as f64 / (cited + citing) as f64
            };
            let margin = 0.05 + (1.0 + article.cited_by.len() as f64).log10() / 10.0;

            nodes.push(format!(
                "\"{}\" [label=\"{}\" href=\"{}\" tooltip=\"{}\" fillcolor=\"{}\" margin={:.4}]",
                escape(&article.id),
                escape(&article_label(article)),
                escape(&article.url()),
                escape(&article_summary_wide(article)),
                hex_color(lerp(CITING_COLOR, CITED_COLOR, ratio)),
                margin,
            ));
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (x, y) in &self.edges {
            let similarity = match (by_id.get(x), by_id.get(y)) {
                (Some(a), Some(b)) => jaccard(&a.abstract_text, &b.abstract_text),
                _ => 0.0,
            };
            let penwidth = 50.0 * similarity.powi(6);
            edges.push(format!("\"{}\":n->\"{}\":s [penwidth={penwidth:.6}]", escape(x), escape(y)));
        }

        let mut dot = String::from("digraph {\n\n");
        let _ = writeln!(dot, "{GRAPH_ATTRS}\n");
        let _ = writeln!(dot, "    {}\n", nodes.join("\n    "));
        let _ = writeln!(dot, "    {}\n", edges.join("\n    "));
        dot.push_str("}\n");
        dot
    }
}

/// Linear interpolation between two colors; `t` is clamped to `[0, 1]`.
fn lerp(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let value = f64::from(from[i]) + (f64::from(to[i]) - f64::from(from[i])) * t;
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}

fn hex_color([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Escape a value for a double-quoted DOT string.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "'").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, references: &[&str], cited_by: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            abstract_text: "shared words here".to_string(),
            references: references.iter().map(ToString::to_string).collect(),
            cited_by: cited_by.iter().map(ToString::to_string).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(hex_color(lerp(CITING_COLOR, CITED_COLOR, 0.0)), "#FFDC8C");
        assert_eq!(hex_color(lerp(CITING_COLOR, CITED_COLOR, 1.0)), "#96E6FF");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a \"b\"\nc"), "a 'b'\\nc");
    }

    #[test]
    fn test_edges_from_both_directions_deduplicate() {
        let mut collection = Collection::new("demo");
        // b cites a, and a lists b as citing it.
        collection.insert(article("a", &[], &["b", "outside"]));
        collection.insert(article("b", &["a", "b", "elsewhere"], &[]));

        let graph = CitationGraph::build(&collection);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("a", "b")]);
        assert_eq!(graph.degree("a"), (1, 0));
        assert_eq!(graph.degree("b"), (0, 1));
    }

    #[test]
    fn test_dot_output() {
        let mut collection = Collection::new("demo");
        collection.insert(article("a", &[], &[]));
        collection.insert(article("b", &["a"], &[]));

        let dot = CitationGraph::build(&collection).to_dot();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("rankdir=BT"));
        assert!(dot.contains("\"a\":n->\"b\":s [penwidth=50.000000]"));
        // a is only cited, b only cites.
        let node = |id: &str| {
            dot.lines().find(|l| l.trim_start().starts_with(&format!("\"{id}\" ["))).unwrap()
        };
        assert!(node("a").contains("fillcolor=\"#96E6FF\""));
        assert!(node("b").contains("fillcolor=\"#FFDC8C\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let dot = CitationGraph::build(&Collection::new("empty")).to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(!dot.contains("->"));
        assert!(!dot.contains("label="));
    }
}
