use thiserror::Error;

/// Errors that can occur when talking to the backing key-value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Table not found: {table_name}")]
    TableNotFound { table_name: String },
    #[error("Table already exists: {table_name}")]
    TableAlreadyExists { table_name: String },
    #[error("Table {table_name} did not become active after {attempts} attempts")]
    ActivationTimeout { table_name: String, attempts: u32 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
