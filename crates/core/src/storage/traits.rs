use async_trait::async_trait;

use crate::note::Note;
use crate::table::{TableMeta, TableSchema};

use super::Result;

/// Item-level access to the notes table.
///
/// An implementation is bound to a single table when it is constructed.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Gets a note by its ID.
    async fn get_note(&self, id: &str) -> Result<Option<Note>>;

    /// Writes a note, replacing any item with the same ID.
    async fn put_note(&self, note: &Note) -> Result<()>;

    /// Returns every note in the table, in no particular order.
    async fn scan_notes(&self) -> Result<Vec<Note>>;
}

/// Table-level administration used by the startup bootstrap.
#[async_trait]
pub trait TableAdmin: Send + Sync {
    /// Fetches table metadata. Fails with `TableNotFound` if the table is absent.
    async fn describe_table(&self, table_name: &str) -> Result<TableMeta>;

    /// Creates a table. Fails with `TableAlreadyExists` if it is already there.
    async fn create_table(&self, schema: &TableSchema) -> Result<()>;

    /// Blocks until the table is active, or fails with `ActivationTimeout`.
    async fn wait_until_active(&self, table_name: &str) -> Result<()>;
}
