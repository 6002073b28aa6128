//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the store traits that
//! keeps every table in a HashMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use notes::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::with_table("Notes");
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
