//! Static table registry: which columns, editable fields and primary key
//! apply to each table route.

use once_cell::sync::Lazy;

/// Input control for one editable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Email,
    Date,
    Select,
}

impl FieldType {
    /// HTML `type` attribute for non-select fields.
    pub fn as_input_type(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::Select => "select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Descriptor of one editable attribute of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    /// Non-empty only for `FieldType::Select`.
    pub options: &'static [SelectOption],
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            required: true,
            options: &[],
        }
    }

    fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            name,
            label,
            field_type: FieldType::Select,
            required: true,
            options,
        }
    }
}

/// Static descriptor of one table's displayable columns, editable fields
/// and primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub key: &'static str,
    pub title: &'static str,
    /// Display order; superset of the keys present in returned rows.
    pub columns: &'static [&'static str],
    pub primary_key: &'static str,
    pub primary_key_label: &'static str,
    pub fields: Vec<FieldSpec>,
}

const ROLE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Employee", label: "Employee" },
    SelectOption { value: "Visitor", label: "Visitor" },
    SelectOption { value: "Contractor", label: "Contractor" },
];

const VEHICLE_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Car", label: "Car" },
    SelectOption { value: "Motorcycle", label: "Motorcycle" },
    SelectOption { value: "Truck", label: "Truck" },
    SelectOption { value: "Van", label: "Van" },
];

static TABLES: Lazy<Vec<TableConfig>> = Lazy::new(|| {
    vec![
        TableConfig {
            key: "person",
            title: "Person Table",
            columns: &["personid", "name", "role", "contact", "biometric_data"],
            primary_key: "personid",
            primary_key_label: "Person ID",
            fields: vec![
                FieldSpec::new("personid", "Person ID", FieldType::Number),
                FieldSpec::new("name", "Name", FieldType::Text),
                FieldSpec::select("role", "Role", ROLE_OPTIONS),
                FieldSpec::new("contact", "Contact", FieldType::Email),
                FieldSpec::new("biometric_data", "Biometric Data", FieldType::Text),
            ],
        },
        TableConfig {
            key: "visitor",
            title: "Visitor Table",
            columns: &["visitorid", "host_id", "purpose", "visit_bandid"],
            primary_key: "visitorid",
            primary_key_label: "Visitor ID",
            fields: vec![
                FieldSpec::new("visitorid", "Visitor ID", FieldType::Number),
                FieldSpec::new("host_id", "Host ID (Person)", FieldType::Number),
                FieldSpec::new("purpose", "Purpose", FieldType::Text),
                FieldSpec::new("visit_bandid", "Visit Band ID", FieldType::Text),
            ],
        },
        TableConfig {
            key: "visitor_band",
            title: "Visitor Band Table",
            columns: &["visit_bandid", "issue_date", "expiry_date"],
            primary_key: "visit_bandid",
            primary_key_label: "Visit Band ID",
            fields: vec![
                FieldSpec::new("visit_bandid", "Visit Band ID", FieldType::Text),
                FieldSpec::new("issue_date", "Issue Date", FieldType::Date),
                FieldSpec::new("expiry_date", "Expiry Date", FieldType::Date),
            ],
        },
        TableConfig {
            key: "vehicle",
            title: "Vehicle Table",
            columns: &["license_plate", "type", "personid"],
            primary_key: "license_plate",
            primary_key_label: "License Plate",
            fields: vec![
                FieldSpec::new("license_plate", "License Plate", FieldType::Text),
                FieldSpec::select("type", "Vehicle Type", VEHICLE_TYPE_OPTIONS),
                FieldSpec::new("personid", "Person ID", FieldType::Number),
            ],
        },
    ]
});

/// All registered tables, dashboard order.
pub fn all_tables() -> &'static [TableConfig] {
    &TABLES
}

/// Exact lookup by table key.
pub fn lookup(key: &str) -> Option<&'static TableConfig> {
    TABLES.iter().find(|table| table.key == key)
}

/// Config for a table key, or the default (`person`) config when the key is
/// unrecognized. This never errors: unknown routes degrade to the default
/// table instead of a broken page. Callers that care should use [`lookup`]
/// and log the miss.
pub fn table_config(key: &str) -> &'static TableConfig {
    lookup(key).unwrap_or_else(default_table)
}

/// The documented fallback for unknown table keys.
pub fn default_table() -> &'static TableConfig {
    &TABLES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        for key in ["person", "visitor", "visitor_band", "vehicle"] {
            assert_eq!(table_config(key).key, key);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(table_config("no_such_table").key, "person");
        assert_eq!(table_config("").key, "person");
        assert!(lookup("no_such_table").is_none());
    }

    #[test]
    fn test_primary_key_is_a_column_and_a_field() {
        for table in all_tables() {
            assert!(
                table.columns.contains(&table.primary_key),
                "{}: primary key not in columns",
                table.key
            );
            assert!(
                table.fields.iter().any(|f| f.name == table.primary_key),
                "{}: primary key not in fields",
                table.key
            );
        }
    }

    #[test]
    fn test_options_only_on_select_fields() {
        for table in all_tables() {
            for field in &table.fields {
                if field.field_type == FieldType::Select {
                    assert!(!field.options.is_empty(), "{}.{}", table.key, field.name);
                } else {
                    assert!(field.options.is_empty(), "{}.{}", table.key, field.name);
                }
            }
        }
    }

    #[test]
    fn test_fields_cover_columns() {
        for table in all_tables() {
            for column in table.columns {
                assert!(
                    table.fields.iter().any(|f| &f.name == column),
                    "{}: column {} has no field",
                    table.key,
                    column
                );
            }
        }
    }
}
