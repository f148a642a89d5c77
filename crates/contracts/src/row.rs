use serde_json::Value;

/// One record returned by or sent to the backend, keyed by column name.
///
/// Rows carry no identity beyond their primary key value and are replaced
/// wholesale on every fetch, never patched in place.
pub type Row = serde_json::Map<String, Value>;

/// Stringify a single JSON value for display and search.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text for one table cell. Absent, null and empty values render as "-".
pub fn cell_text(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => "-".to_string(),
        Some(value) => {
            let text = value_text(value);
            if text.is_empty() {
                "-".to_string()
            } else {
                text
            }
        }
    }
}

/// Column order for rows of unknown shape (canned query results):
/// the key order of the first row.
pub fn derived_columns(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_cell_text_renders_scalars() {
        let r = row(json!({"personid": 1, "name": "John Doe"}));
        assert_eq!(cell_text(&r, "personid"), "1");
        assert_eq!(cell_text(&r, "name"), "John Doe");
    }

    #[test]
    fn test_cell_text_dash_for_missing_null_and_empty() {
        let r = row(json!({"comment": null, "purpose": ""}));
        assert_eq!(cell_text(&r, "comment"), "-");
        assert_eq!(cell_text(&r, "purpose"), "-");
        assert_eq!(cell_text(&r, "absent"), "-");
    }

    #[test]
    fn test_derived_columns_from_first_row() {
        let rows = vec![row(json!({"license_plate": "ABC123", "type": "Car"}))];
        assert_eq!(derived_columns(&rows), vec!["license_plate", "type"]);
        assert!(derived_columns(&[]).is_empty());
    }
}
