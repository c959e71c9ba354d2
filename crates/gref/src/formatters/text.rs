//! Plain-text layout: wrapping, alignment and article summaries.

use crate::models::Article;

/// Greedy word wrap.
///
/// Hyphenated words may break after the hyphen. Lines stay strictly
/// shorter than `length` unless a single word is longer. Text with fewer
/// than two words is returned unchanged.
#[must_use]
pub fn wrap(text: &str, length: usize) -> String {
    let spaced = text.replace('-', "- ");
    let mut words = spaced.split_whitespace();
    let Some(first) = words.next() else {
        return text.to_string();
    };
    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    let mut line = first.to_string();
    for word in rest {
        if line.len() + 1 + word.len() < length {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(line.replace("- ", "-"));
            line = word.to_string();
        }
    }
    lines.push(line.replace("- ", "-"));

    lines.join("\n")
}

/// Indent continuation lines so they align after `target` (plus `shift`).
#[must_use]
pub fn adjust(text: &str, target: char, shift: usize) -> String {
    let column = text.find(target).map_or(0, |i| i + shift);
    text.replace('\n', &format!("\n{}", " ".repeat(column)))
}

/// Compact summary shown in search results.
///
/// ```text
///    ID: 649def34f8be52c8b66281af98ae884c09aef38b
/// Title: Construction of the Literature Graph in
///        Semantic Scholar
///    By: Ammar, Groeneveld, Bhagavatula
/// ```
#[must_use]
pub fn article_summary(article: &Article) -> String {
    let names = article.surnames().join(", ");
    [
        format!("   ID: {}", article.id),
        adjust(&format!("Title: {}", wrap(&article.title, 69)), ':', 2),
        adjust(&format!("   By: {}", wrap(&names, 69)), ':', 2),
    ]
    .join("\n")
}

/// Full summary used in text exports and graph tooltips.
#[must_use]
pub fn article_summary_wide(article: &Article) -> String {
    let abstract_text =
        if article.abstract_text.is_empty() { "(none)" } else { article.abstract_text.as_str() };
    [
        format!("Title: {}", article.title),
        "~".to_string(),
        format!("By: {}", article.surnames().join(", ")),
        format!("Date: {}", article.date),
        "~".to_string(),
        format!("Abstract: {}", abstract_text.replace('"', "'")),
        "~".to_string(),
        format!("ID: {}", article.id),
        format!("Venue: {}", article.venue),
    ]
    .join("\n")
}

/// Short in-text citation, e.g. `Smith, et al. (2020)`, wrapped for a graph node.
#[must_use]
pub fn article_label(article: &Article) -> String {
    let names = article.surnames();
    let authors = match names.as_slice() {
        [] => "Anonymous".to_string(),
        [one] => (*one).to_string(),
        [a, b] => format!("{a} & {b}"),
        [a, b, c] => format!("{a}, {b}, & {c}"),
        [first, ..] => format!("{first}, et al."),
    };
    wrap(&format!("{} ({})", authors, article.year()), 20)
}
