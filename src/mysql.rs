use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{Column, Row, TypeInfo};

use crate::config::Config;
use crate::sql::{self, Statement};
use crate::store::{PathwayStore, Record, StoreError, WriteOutcome};

/// Shareable MySQL-backed store for use across async handlers
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Connect to MySQL using the provided config.
    ///
    /// The first connection is opened eagerly so that an unreachable server
    /// or bad credentials fail here instead of on the first request.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name);

        tracing::info!(
            "Connecting to MySQL at {}:{} (schema: {})",
            config.db_host,
            config.db_port,
            config.db_name
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to MySQL at {}:{}",
                    config.db_host, config.db_port
                )
            })?;

        tracing::info!("Connected to MySQL database: {}", config.db_name);

        Ok(Self { pool })
    }

    async fn fetch(&self, statement: &Statement) -> Result<Vec<Record>, StoreError> {
        tracing::debug!(sql = %statement.sql, params = ?statement.params, "query");
        let mut query = sqlx::query(&statement.sql);
        for param in &statement.params {
            query = query.bind(param.as_str());
        }
        let rows = query.fetch_all(&self.pool).await?;
        tracing::debug!("Rows returned: {}", rows.len());
        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn execute(&self, statement: &Statement) -> Result<WriteOutcome, StoreError> {
        tracing::debug!(sql = %statement.sql, params = ?statement.params, "execute");
        let mut query = sqlx::query(&statement.sql);
        for param in &statement.params {
            query = query.bind(param.as_str());
        }
        let result = query.execute(&self.pool).await?;
        let outcome = WriteOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        };
        tracing::debug!(
            "Affected rows: {}, insert id: {}",
            outcome.rows_affected,
            outcome.last_insert_id
        );
        Ok(outcome)
    }
}

#[async_trait]
impl PathwayStore for MySqlStore {
    async fn list_pathways(&self) -> Result<Vec<Record>, StoreError> {
        self.fetch(&sql::select_pathways()).await
    }

    async fn find_pathway(&self, pathway_id: &str) -> Result<Vec<Record>, StoreError> {
        self.fetch(&sql::select_pathway(pathway_id)).await
    }

    async fn list_registration_results(&self) -> Result<Vec<Record>, StoreError> {
        self.fetch(&sql::select_registration_results()).await
    }

    async fn insert_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError> {
        self.execute(&sql::insert_pathway(pathway_id, pathway_name)).await
    }

    async fn rename_pathway(
        &self,
        pathway_id: &str,
        pathway_name: &str,
    ) -> Result<WriteOutcome, StoreError> {
        self.execute(&sql::rename_pathway(pathway_id, pathway_name)).await
    }

    async fn delete_pathway(&self, pathway_id: &str) -> Result<WriteOutcome, StoreError> {
        self.execute(&sql::delete_pathway(pathway_id)).await
    }

    async fn delete_via_procedure(&self, alum_id: &str) -> Result<WriteOutcome, StoreError> {
        self.execute(&sql::call_delete_row(alum_id)).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let rows = self.fetch(&sql::health_check()).await?;
        if rows.is_empty() {
            return Err(StoreError::Query(
                "Health check query returned no results".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.message().to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

fn row_to_record(row: &MySqlRow) -> Record {
    let mut record = Record::new();
    for column in row.columns() {
        let type_name = column.type_info().name();
        let kind = ColumnKind::from_type_name(type_name);
        let value = match decode_cell(row, column.ordinal(), kind) {
            Ok(cell) => cell_to_json(cell),
            Err(err) => {
                tracing::debug!(
                    "Could not decode column {} ({}): {}",
                    column.name(),
                    type_name,
                    err
                );
                JsonValue::Null
            }
        };
        record.insert(column.name().to_string(), value);
    }
    record
}

/// How a column is decoded, chosen from its MySQL type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Null,
    Bool,
    Int,
    UInt,
    Year,
    Float,
    Double,
    Decimal,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Text,
}

impl ColumnKind {
    fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "NULL" => ColumnKind::Null,
            "BOOLEAN" => ColumnKind::Bool,
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => ColumnKind::Int,
            t if t.ends_with("UNSIGNED") => ColumnKind::UInt,
            "YEAR" => ColumnKind::Year,
            "FLOAT" => ColumnKind::Float,
            "DOUBLE" => ColumnKind::Double,
            "DECIMAL" => ColumnKind::Decimal,
            "DATE" => ColumnKind::Date,
            "TIME" => ColumnKind::Time,
            "DATETIME" => ColumnKind::DateTime,
            "TIMESTAMP" => ColumnKind::Timestamp,
            "JSON" => ColumnKind::Json,
            _ => ColumnKind::Text,
        }
    }
}

/// A decoded, non-NULL column value
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Json(JsonValue),
    Text(String),
    Bytes(Vec<u8>),
}

/// Read one column; `None` is SQL NULL.
fn decode_cell(
    row: &MySqlRow,
    index: usize,
    kind: ColumnKind,
) -> Result<Option<Cell>, sqlx::Error> {
    Ok(match kind {
        ColumnKind::Null => None,
        ColumnKind::Bool => row.try_get::<Option<bool>, _>(index)?.map(Cell::Bool),
        ColumnKind::Int => row.try_get::<Option<i64>, _>(index)?.map(Cell::Int),
        ColumnKind::UInt => row.try_get::<Option<u64>, _>(index)?.map(Cell::UInt),
        ColumnKind::Year => row
            .try_get::<Option<u16>, _>(index)?
            .map(|y| Cell::UInt(u64::from(y))),
        ColumnKind::Float => row
            .try_get::<Option<f32>, _>(index)?
            .map(|f| Cell::Float(f64::from(f))),
        ColumnKind::Double => row.try_get::<Option<f64>, _>(index)?.map(Cell::Float),
        // Binary protocol sends DECIMAL as its text form
        ColumnKind::Decimal => row
            .try_get_unchecked::<Option<String>, _>(index)?
            .map(Cell::Decimal),
        ColumnKind::Date => row.try_get::<Option<NaiveDate>, _>(index)?.map(Cell::Date),
        ColumnKind::Time => row.try_get::<Option<NaiveTime>, _>(index)?.map(Cell::Time),
        ColumnKind::DateTime => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(Cell::DateTime),
        ColumnKind::Timestamp => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(Cell::Timestamp),
        ColumnKind::Json => row.try_get::<Option<JsonValue>, _>(index)?.map(Cell::Json),
        ColumnKind::Text => match row.try_get::<Option<String>, _>(index) {
            Ok(text) => text.map(Cell::Text),
            Err(_) => row.try_get::<Option<Vec<u8>>, _>(index)?.map(Cell::Bytes),
        },
    })
}

fn cell_to_json(cell: Option<Cell>) -> JsonValue {
    let Some(cell) = cell else {
        return JsonValue::Null;
    };
    match cell {
        Cell::Bool(b) => JsonValue::Bool(b),
        Cell::Int(n) => JsonValue::from(n),
        Cell::UInt(n) => JsonValue::from(n),
        Cell::Float(f) => JsonValue::from(f),
        Cell::Decimal(text) => decimal_to_value(text),
        Cell::Date(d) => JsonValue::String(d.to_string()),
        Cell::Time(t) => JsonValue::String(t.to_string()),
        Cell::DateTime(d) => JsonValue::String(d.to_string()),
        Cell::Timestamp(d) => JsonValue::String(d.to_rfc3339()),
        Cell::Json(value) => value,
        Cell::Text(text) => JsonValue::String(text),
        Cell::Bytes(bytes) => JsonValue::String(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

fn decimal_to_value(text: String) -> JsonValue {
    match text.parse::<serde_json::Number>() {
        Ok(number) => JsonValue::Number(number),
        Err(_) => JsonValue::String(text),
    }
}
