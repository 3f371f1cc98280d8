use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

#[cfg(test)]
pub mod memory;

/// One result row, column name to value, in column order.
pub type Record = Map<String, JsonValue>;

/// Outcome of a statement that does not return rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOutcome {
    pub rows_affected: u64,
    /// Auto-increment id assigned by the insert, 0 when the key is client supplied.
    pub last_insert_id: u64,
}

/// Failures reported by the backing store.
///
/// Both variants carry the store's own description unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    Query(String),
}

/// The relational store behind the pathways resource.
///
/// Each method runs exactly one parameterized statement. Implementations are
/// shared across all request handlers for the life of the process.
#[async_trait]
pub trait PathwayStore: Send + Sync {
    /// All pathways ordered by name
    async fn list_pathways(&self) -> Result<Vec<Record>, StoreError>;

    /// Pathways whose id matches exactly; empty when none do
    async fn find_pathway(&self, pathway_id: &str) -> Result<Vec<Record>, StoreError>;

    /// The registration results report ordered by member name
    async fn list_registration_results(&self) -> Result<Vec<Record>, StoreError>;

    async fn insert_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError>;

    async fn rename_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError>;

    async fn delete_pathway(&self, pathway_id: &str) -> Result<WriteOutcome, StoreError>;

    /// Delete through the `sp_deleteRow` stored routine
    async fn delete_via_procedure(&self, alum_id: &str) -> Result<WriteOutcome, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_column_order() {
        let mut record = Record::new();
        record.insert("RegisterID".to_string(), JsonValue::from(7));
        record.insert("Member_Name".to_string(), JsonValue::from("Zoe Park"));
        record.insert("PathwayName".to_string(), JsonValue::from("Welding"));

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["RegisterID", "Member_Name", "PathwayName"]);

        let body = serde_json::to_string(&record).unwrap();
        assert_eq!(
            body,
            r#"{"RegisterID":7,"Member_Name":"Zoe Park","PathwayName":"Welding"}"#
        );

        let parsed: Record = serde_json::from_str(&body).unwrap();
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, ["RegisterID", "Member_Name", "PathwayName"]);
    }
}
