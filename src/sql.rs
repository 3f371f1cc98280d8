//! Parameterized statements issued against the pathways schema.
//!
//! Every statement uses positional `?` placeholders; values never appear in
//! the SQL text.

pub const PATHWAYS_TABLE: &str = "pathways";
pub const REGISTRATION_RESULTS_VIEW: &str = "vw_register_results";
pub const DELETE_ROW_PROCEDURE: &str = "sp_deleteRow";

/// SQL text plus the values bound to its placeholders, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<String>,
}

impl Statement {
    fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn bind(mut self, value: &str) -> Self {
        self.params.push(value.to_string());
        self
    }
}

pub fn select_pathways() -> Statement {
    Statement::new(format!("SELECT * FROM {} ORDER BY PathwayName", PATHWAYS_TABLE))
}

pub fn select_pathway(pathway_id: &str) -> Statement {
    Statement::new(format!("SELECT * FROM {} WHERE PathwayID = ?", PATHWAYS_TABLE)).bind(pathway_id)
}

pub fn select_registration_results() -> Statement {
    Statement::new(format!(
        "SELECT * FROM {} ORDER BY Member_Name",
        REGISTRATION_RESULTS_VIEW
    ))
}

pub fn insert_pathway(pathway_id: &str, pathway_name: &str) -> Statement {
    Statement::new(format!(
        "INSERT INTO {} (PathwayID, PathwayName) VALUES (?, ?)",
        PATHWAYS_TABLE
    ))
    .bind(pathway_id)
    .bind(pathway_name)
}

pub fn rename_pathway(pathway_id: &str, pathway_name: &str) -> Statement {
    Statement::new(format!(
        "UPDATE {} SET PathwayName = ? WHERE PathwayID = ?",
        PATHWAYS_TABLE
    ))
    .bind(pathway_name)
    .bind(pathway_id)
}

pub fn delete_pathway(pathway_id: &str) -> Statement {
    Statement::new(format!("DELETE FROM {} WHERE PathwayID = ?", PATHWAYS_TABLE)).bind(pathway_id)
}

pub fn call_delete_row(alum_id: &str) -> Statement {
    Statement::new(format!("CALL {}(?)", DELETE_ROW_PROCEDURE)).bind(alum_id)
}

pub fn health_check() -> Statement {
    Statement::new("SELECT 1")
}
