//! CSV output.

/// Escape a field for CSV output.
///
/// Quotes fields containing separators, quotes or line breaks, and prefixes
/// values that a spreadsheet would evaluate as a formula.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    let formula = s.starts_with(['=', '+', '-', '@']);
    if s.contains([',', '"', '\n', '\r']) {
        let escaped = s.replace('"', "\"\"");
        if formula {
            format!("\"'{}\"", escaped)
        } else {
            format!("\"{}\"", escaped)
        }
    } else if formula {
        format!("'{}", s)
    } else {
        s.to_string()
    }
}

/// Join escaped fields into one CSV line (without terminator).
#[must_use]
pub fn csv_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields.into_iter().map(|f| csv_escape(f.as_ref())).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_untouched() {
        assert_eq!(csv_escape("Nature"), "Nature");
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn test_quotes_and_commas() {
        assert_eq!(csv_escape("a, b"), "\"a, b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_formula_injection() {
        assert_eq!(csv_escape("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(csv_escape("-1, 2"), "\"'-1, 2\"");
    }

    #[test]
    fn test_row() {
        assert_eq!(csv_row(["id", "a,b", "c"]), "id,\"a,b\",c");
    }
}
