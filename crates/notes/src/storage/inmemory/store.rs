//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notes_core::note::Note;
use notes_core::storage::{NoteStore, Result, StoreError, TableAdmin};
use notes_core::table::{TableMeta, TableSchema, TableStatus};

use crate::storage::wait::poll_until_active;

type Table = HashMap<String, Note>;

/// In-memory storage backend.
///
/// Tables must be created before use, like on the real backend: item
/// operations on a missing table fail with `TableNotFound`. Created tables
/// are active immediately. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    table_name: String,
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryStore {
    /// Creates a store bound to `table_name`, with no tables yet.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a store whose table already exists and is empty.
    pub fn with_table(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        let tables = HashMap::from([(table_name.clone(), Table::new())]);
        Self {
            table_name,
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    fn table_not_found(&self, table_name: &str) -> StoreError {
        StoreError::TableNotFound {
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl NoteStore for InMemoryStore {
    async fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let tables = self.tables.read().await;
        let table = tables
            .get(&self.table_name)
            .ok_or_else(|| self.table_not_found(&self.table_name))?;
        Ok(table.get(id).cloned())
    }

    async fn put_note(&self, note: &Note) -> Result<()> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(&self.table_name)
            .ok_or_else(|| self.table_not_found(&self.table_name))?;
        table.insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn scan_notes(&self) -> Result<Vec<Note>> {
        let tables = self.tables.read().await;
        let table = tables
            .get(&self.table_name)
            .ok_or_else(|| self.table_not_found(&self.table_name))?;
        Ok(table.values().cloned().collect())
    }
}

#[async_trait]
impl TableAdmin for InMemoryStore {
    async fn describe_table(&self, table_name: &str) -> Result<TableMeta> {
        let tables = self.tables.read().await;
        let table = tables
            .get(table_name)
            .ok_or_else(|| self.table_not_found(table_name))?;
        Ok(TableMeta {
            table_name: table_name.to_string(),
            status: TableStatus::Active,
            item_count: Some(table.len() as i64),
        })
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.contains_key(&schema.table_name) {
            return Err(StoreError::TableAlreadyExists {
                table_name: schema.table_name.clone(),
            });
        }
        tables.insert(schema.table_name.clone(), Table::new());
        Ok(())
    }

    async fn wait_until_active(&self, table_name: &str) -> Result<()> {
        // Tables are active as soon as they exist.
        poll_until_active(self, table_name, 1, Duration::ZERO).await
    }
}
