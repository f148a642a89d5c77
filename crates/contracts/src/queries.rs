//! Catalog of predefined read-only backend queries.
//!
//! Execution is delegated entirely to the backend (`GET /query/{id}`); the
//! SQL text here is informational, shown read-only next to the picker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySpec {
    pub id: &'static str,
    pub name: &'static str,
    pub sql: &'static str,
}

static QUERIES: &[QuerySpec] = &[
    QuerySpec {
        id: "all_visitors",
        name: "All Visitors",
        sql: "SELECT * FROM visitor",
    },
    QuerySpec {
        id: "all_vehicles",
        name: "All Vehicles Linked to Person",
        sql: "SELECT v.*, p.name FROM vehicle v JOIN person p ON v.personid = p.personid",
    },
    QuerySpec {
        id: "active_bands",
        name: "Active Visitor Bands",
        sql: "SELECT * FROM visitor_band WHERE expiry_date >= CURRENT_DATE",
    },
];

pub fn all_queries() -> &'static [QuerySpec] {
    QUERIES
}

pub fn find_query(id: &str) -> Option<&'static QuerySpec> {
    QUERIES.iter().find(|query| query.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_query() {
        assert_eq!(find_query("all_visitors").unwrap().name, "All Visitors");
        assert!(find_query("drop_tables").is_none());
    }

    #[test]
    fn test_query_ids_are_unique() {
        for (i, a) in QUERIES.iter().enumerate() {
            for b in &QUERIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
