//! In-memory `PathwayStore` used by the handler tests.

use super::{PathwayStore, Record, StoreError, WriteOutcome};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    pathways: Mutex<BTreeMap<String, String>>,
    registration_results: Mutex<Vec<Record>>,
    failure: Mutex<Option<String>>,
    statements: AtomicUsize,
}

pub fn pathway_record(pathway_id: &str, pathway_name: &str) -> Record {
    let mut record = Record::new();
    record.insert("PathwayID".to_string(), JsonValue::from(pathway_id));
    record.insert("PathwayName".to_string(), JsonValue::from(pathway_name));
    record
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pathways(pathways: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut rows = store.pathways.lock().unwrap();
            for (id, name) in pathways {
                rows.insert(id.to_string(), name.to_string());
            }
        }
        store
    }

    pub fn set_registration_results(&self, rows: Vec<Record>) {
        *self.registration_results.lock().unwrap() = rows;
    }

    /// Make every following statement fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Number of statements issued so far, failed ones included.
    pub fn statements(&self) -> usize {
        self.statements.load(Ordering::SeqCst)
    }

    pub fn pathway_name(&self, pathway_id: &str) -> Option<String> {
        self.pathways.lock().unwrap().get(pathway_id).cloned()
    }

    pub fn pathway_count(&self) -> usize {
        self.pathways.lock().unwrap().len()
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Query(message.clone())),
            None => Ok(()),
        }
    }

    fn remove(&self, pathway_id: &str) -> WriteOutcome {
        let removed = self.pathways.lock().unwrap().remove(pathway_id);
        WriteOutcome {
            rows_affected: u64::from(removed.is_some()),
            last_insert_id: 0,
        }
    }
}

#[async_trait]
impl PathwayStore for MemoryStore {
    async fn list_pathways(&self) -> Result<Vec<Record>, StoreError> {
        self.begin()?;
        let pathways = self.pathways.lock().unwrap();
        let mut rows: Vec<(&String, &String)> = pathways.iter().collect();
        rows.sort_by(|a, b| a.1.cmp(b.1));
        Ok(rows.into_iter().map(|(id, name)| pathway_record(id, name)).collect())
    }

    async fn find_pathway(&self, pathway_id: &str) -> Result<Vec<Record>, StoreError> {
        self.begin()?;
        Ok(self
            .pathways
            .lock()
            .unwrap()
            .get(pathway_id)
            .map(|name| vec![pathway_record(pathway_id, name)])
            .unwrap_or_default())
    }

    async fn list_registration_results(&self) -> Result<Vec<Record>, StoreError> {
        self.begin()?;
        let mut rows = self.registration_results.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            let key = |r: &Record| {
                r.get("Member_Name")
                    .and_then(JsonValue::as_str)
                    .unwrap_or("")
                    .to_string()
            };
            key(a).cmp(&key(b))
        });
        Ok(rows)
    }

    async fn insert_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError> {
        self.begin()?;
        let mut pathways = self.pathways.lock().unwrap();
        if pathways.contains_key(pathway_id) {
            return Err(StoreError::Duplicate(format!(
                "Duplicate entry '{}' for key 'pathways.PRIMARY'",
                pathway_id
            )));
        }
        pathways.insert(pathway_id.to_string(), pathway_name.to_string());
        Ok(WriteOutcome {
            rows_affected: 1,
            last_insert_id: 0,
        })
    }

    async fn rename_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError> {
        self.begin()?;
        let mut pathways = self.pathways.lock().unwrap();
        let rows_affected = match pathways.get_mut(pathway_id) {
            Some(name) => {
                *name = pathway_name.to_string();
                1
            }
            None => 0,
        };
        Ok(WriteOutcome {
            rows_affected,
            last_insert_id: 0,
        })
    }

    async fn delete_pathway(&self, pathway_id: &str) -> Result<WriteOutcome, StoreError> {
        self.begin()?;
        Ok(self.remove(pathway_id))
    }

    async fn delete_via_procedure(&self, alum_id: &str) -> Result<WriteOutcome, StoreError> {
        self.begin()?;
        Ok(self.remove(alum_id))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.begin()
    }
}
