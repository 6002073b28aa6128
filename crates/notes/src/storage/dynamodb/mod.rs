//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the store traits
//! using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod paging;
mod store;

pub use store::DynamoDbStore;
