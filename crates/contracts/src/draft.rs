//! Form draft state and request-body construction for the mutation forms.
//!
//! Validation here is the gate in front of the network: a draft that fails
//! to build never produces a request body, so the forms cannot issue a call
//! with a missing required field or primary key.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::registry::{FieldSpec, FieldType, TableConfig};

/// Raw input values keyed by field name, one entry per field.
pub type Draft = HashMap<String, String>;

/// Local validation failure. Blocks the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingField(String),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingField(label) => write!(f, "{} is required", label),
        }
    }
}

impl std::error::Error for DraftError {}

/// Fresh draft with every field of the table set to an empty string.
pub fn empty_draft(config: &TableConfig) -> Draft {
    config
        .fields
        .iter()
        .map(|field| (field.name.to_string(), String::new()))
        .collect()
}

fn raw_value<'a>(draft: &'a Draft, name: &str) -> &'a str {
    draft.get(name).map(|s| s.trim()).unwrap_or("")
}

// Number-typed inputs become JSON numbers when they parse; everything else
// stays a string and the backend coerces.
fn encode(field: &FieldSpec, raw: &str) -> Value {
    if field.field_type == FieldType::Number {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::from(n);
        }
        if let Ok(n) = raw.parse::<f64>() {
            return Value::from(n);
        }
    }
    Value::String(raw.to_string())
}

/// Body for `POST /{table}/insert`. Every required field must be non-empty;
/// empty optional fields are omitted.
pub fn build_insert(config: &TableConfig, draft: &Draft) -> Result<crate::row::Row, DraftError> {
    let mut body = crate::row::Row::new();
    for field in &config.fields {
        let raw = raw_value(draft, field.name);
        if raw.is_empty() {
            if field.required {
                return Err(DraftError::MissingField(field.label.to_string()));
            }
            continue;
        }
        body.insert(field.name.to_string(), encode(field, raw));
    }
    Ok(body)
}

/// Primary key value plus body for `PUT /{table}/update/{pk}`.
///
/// The primary key is required regardless of its own flag and is returned
/// separately; the body carries only the non-empty fields to change and
/// never the primary key itself.
pub fn build_update(
    config: &TableConfig,
    draft: &Draft,
) -> Result<(String, crate::row::Row), DraftError> {
    let pk = raw_value(draft, config.primary_key);
    if pk.is_empty() {
        return Err(DraftError::MissingField(config.primary_key_label.to_string()));
    }
    let mut body = crate::row::Row::new();
    for field in &config.fields {
        if field.name == config.primary_key {
            continue;
        }
        let raw = raw_value(draft, field.name);
        if raw.is_empty() {
            continue;
        }
        body.insert(field.name.to_string(), encode(field, raw));
    }
    Ok((pk.to_string(), body))
}

/// Primary key value for `DELETE /{table}/delete/{pk}`. Rejected locally
/// before any confirmation is shown.
pub fn delete_key(primary_key_label: &str, input: &str) -> Result<String, DraftError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(primary_key_label.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::table_config;

    fn filled_person_draft() -> Draft {
        let mut draft = empty_draft(table_config("person"));
        draft.insert("personid".into(), "7".into());
        draft.insert("name".into(), "John Doe".into());
        draft.insert("role".into(), "Employee".into());
        draft.insert("contact".into(), "john@example.com".into());
        draft.insert("biometric_data".into(), "FP007".into());
        draft
    }

    #[test]
    fn test_empty_draft_has_one_empty_entry_per_field() {
        let config = table_config("vehicle");
        let draft = empty_draft(config);
        assert_eq!(draft.len(), config.fields.len());
        assert!(draft.values().all(String::is_empty));
    }

    #[test]
    fn test_insert_requires_every_required_field() {
        let config = table_config("person");
        let mut draft = filled_person_draft();
        draft.insert("contact".into(), "  ".into());
        assert_eq!(
            build_insert(config, &draft),
            Err(DraftError::MissingField("Contact".into()))
        );
    }

    #[test]
    fn test_insert_encodes_numbers_and_strings() {
        let config = table_config("person");
        let body = build_insert(config, &filled_person_draft()).unwrap();
        assert_eq!(body["personid"], 7);
        assert_eq!(body["name"], "John Doe");
    }

    #[test]
    fn test_unparseable_number_stays_a_string() {
        let config = table_config("person");
        let mut draft = filled_person_draft();
        draft.insert("personid".into(), "abc".into());
        let body = build_insert(config, &draft).unwrap();
        assert_eq!(body["personid"], "abc");
    }

    #[test]
    fn test_update_requires_primary_key() {
        let config = table_config("person");
        let mut draft = empty_draft(config);
        draft.insert("name".into(), "Jane Smith".into());
        assert_eq!(
            build_update(config, &draft),
            Err(DraftError::MissingField("Person ID".into()))
        );
    }

    #[test]
    fn test_update_body_never_contains_primary_key() {
        let config = table_config("person");
        let (pk, body) = build_update(config, &filled_person_draft()).unwrap();
        assert_eq!(pk, "7");
        assert!(!body.contains_key("personid"));
        assert_eq!(body["name"], "John Doe");
    }

    #[test]
    fn test_update_omits_untouched_fields() {
        let config = table_config("vehicle");
        let mut draft = empty_draft(config);
        draft.insert("license_plate".into(), "ABC123".into());
        draft.insert("type".into(), "Truck".into());
        let (pk, body) = build_update(config, &draft).unwrap();
        assert_eq!(pk, "ABC123");
        assert_eq!(body.len(), 1);
        assert_eq!(body["type"], "Truck");
    }

    #[test]
    fn test_delete_key_rejects_empty_input() {
        assert_eq!(
            delete_key("Person ID", "   "),
            Err(DraftError::MissingField("Person ID".into()))
        );
        assert_eq!(delete_key("Person ID", " 5 "), Ok("5".to_string()));
    }
}
