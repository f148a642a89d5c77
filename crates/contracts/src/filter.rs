//! Client-side substring search over fetched rows.

use crate::row::{value_text, Row};

/// True when any stringified value of the row contains `needle_lower`
/// (already lowercased) as a substring.
pub fn row_matches(row: &Row, needle_lower: &str) -> bool {
    row.values()
        .any(|value| value_text(value).to_lowercase().contains(needle_lower))
}

/// Rows whose stringified values contain `term` case-insensitively in at
/// least one column. An empty term returns the rows unchanged. The source
/// slice is never mutated; filtering is recomputed per keystroke.
pub fn filter_rows(rows: &[Row], term: &str) -> Vec<Row> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person_rows() -> Vec<Row> {
        vec![
            json!({"personid": 1, "name": "John Doe"})
                .as_object()
                .cloned()
                .unwrap(),
            json!({"personid": 2, "name": "Jane Smith"})
                .as_object()
                .cloned()
                .unwrap(),
        ]
    }

    #[test]
    fn test_empty_term_returns_all_rows() {
        let rows = person_rows();
        assert_eq!(filter_rows(&rows, ""), rows);
    }

    #[test]
    fn test_search_jane_keeps_only_jane_smith() {
        let filtered = filter_rows(&person_rows(), "jane");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["name"], "Jane Smith");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filtered = filter_rows(&person_rows(), "JOHN");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["name"], "John Doe");
    }

    #[test]
    fn test_numbers_match_by_stringified_value() {
        let filtered = filter_rows(&person_rows(), "2");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["personid"], 2);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        assert!(filter_rows(&person_rows(), "zzz").is_empty());
    }
}
