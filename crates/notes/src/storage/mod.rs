//! Storage backend implementations.
//!
//! This module provides concrete implementations of the store traits defined
//! in `notes_core::storage`. The backend is selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local storage, data is lost on exit
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory store is always compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p notes
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p notes --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p notes --no-default-features --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub mod wait;
