//! Application state with store-backed note access.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The backing store is selected via feature flags; every
//! factory bootstraps the notes table before handing out state.

use std::sync::Arc;

use notes_core::storage::{NoteStore, TableAdmin};

use crate::bootstrap::{ensure_table, BootstrapReport};
use crate::config::Config;
use crate::repository::NoteRepository;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteRepository,
}

impl AppState {
    /// Creates an AppState around the given store.
    pub(crate) fn from_store(store: Arc<dyn NoteStore>) -> Self {
        Self {
            notes: NoteRepository::new(store),
        }
    }
}

/// Brings the notes table to a usable state, or explains why it can't.
async fn bootstrap(admin: &dyn TableAdmin, config: &Config) -> Result<BootstrapReport, anyhow::Error> {
    let schema = config.table_schema();

    let report = ensure_table(admin, &schema).await.map_err(|err| {
        tracing::error!(
            table_name = %schema.table_name,
            step = %err.step,
            error = %err.source,
            "Table bootstrap failed, make sure {} is reachable and the credentials allow table access",
            config.store.target_display()
        );
        anyhow::Error::new(err)
    })?;

    tracing::info!(
        table_name = %report.table_name,
        created = report.created,
        "Notes table is ready"
    );

    Ok(report)
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::dynamodb::DynamoDbStore;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = DynamoDbStore::from_config(&config.store).await;

            tracing::info!(
                target_env = %config.store.target_display(),
                table_name = %store.table_name(),
                "Using DynamoDB storage"
            );

            bootstrap(&store, config).await?;

            Ok(Self::from_store(Arc::new(store)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::inmemory::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = InMemoryStore::new(config.store.table_name.clone());

            tracing::info!(table_name = %config.store.table_name, "Using in-memory storage");

            bootstrap(&store, config).await?;

            Ok(Self::from_store(Arc::new(store)))
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Test state over an in-memory store whose table already exists.
    fn default() -> Self {
        use crate::storage::inmemory::InMemoryStore;

        Self::from_store(Arc::new(InMemoryStore::with_table(
            notes_core::table::DEFAULT_TABLE_NAME,
        )))
    }
}
