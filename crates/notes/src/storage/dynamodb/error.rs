//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `notes_core::storage`.
//! Transport failures (the request never got an answer) become
//! `ConnectionFailed`; everything else is classified from the service error.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use notes_core::storage::StoreError;

/// Map dispatch and timeout failures to `ConnectionFailed`.
fn transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError>
where
    E: Error + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            StoreError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

fn table_not_found(table_name: &str) -> StoreError {
    StoreError::TableNotFound {
        table_name: table_name.to_string(),
    }
}

fn unclassified(operation: &str, err: &(dyn Error + 'static)) -> StoreError {
    StoreError::QueryFailed(format!(
        "{} failed: {}",
        operation,
        DisplayErrorContext(err)
    ))
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table_name: &str,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_found(table_name),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => unclassified("GetItem", &err),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_found(table_name),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => unclassified("PutItem", &err),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table_name: &str,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_found(table_name),
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => unclassified("Scan", &err),
    }
}

/// Map a DescribeTable SDK error to StoreError.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
    table_name: &str,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => table_not_found(table_name),
        DescribeTableError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => unclassified("DescribeTable", &err),
    }
}

/// Map a CreateTable SDK error to StoreError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table_name: &str,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => StoreError::TableAlreadyExists {
            table_name: table_name.to_string(),
        },
        CreateTableError::LimitExceededException(_) => {
            StoreError::QueryFailed("Table limit exceeded for this account".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => unclassified("CreateTable", &err),
    }
}

/// Map a request builder error to StoreError.
pub fn map_build_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::InvalidData(err.to_string())
}
