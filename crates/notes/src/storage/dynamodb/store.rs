//! DynamoDB store implementation.
//!
//! Implements `NoteStore` and `TableAdmin` from `notes_core::storage` on top
//! of a single DynamoDB table keyed by note id.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode as SdkBillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use notes_core::note::Note;
use notes_core::storage::{NoteStore, Result, StoreError, TableAdmin};
use notes_core::table::{AttributeType, BillingMode, TableMeta, TableSchema};

use super::client::{create_client, to_table_status};
use super::conversions::{item_to_note, note_key, note_to_item};
use super::error::{
    map_build_error, map_create_table_error, map_describe_table_error, map_get_item_error,
    map_put_item_error, map_scan_error,
};
use super::paging::{collect_pages, Page};
use crate::config::StoreConfig;
use crate::storage::wait::poll_until_active;

/// DynamoDB-backed note store.
///
/// Item operations target `table_name`; table administration takes the
/// table name as an argument so the bootstrap can drive it.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    wait_max_attempts: u32,
    wait_interval: Duration,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            wait_max_attempts: 60,
            wait_interval: Duration::from_secs(2),
        }
    }

    /// Creates a store from configuration, building the SDK client.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
            .with_wait_policy(config.wait_max_attempts, config.wait_interval)
    }

    /// Overrides how `wait_until_active` polls.
    pub fn with_wait_policy(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.wait_max_attempts = max_attempts;
        self.wait_interval = interval;
        self
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl NoteStore for DynamoDbStore {
    async fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(note_key(id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(item_to_note(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_note(&self, note: &Note) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_to_item(note)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }

    async fn scan_notes(&self) -> Result<Vec<Note>> {
        let client = &self.client;
        let table_name = self.table_name.as_str();

        let items = collect_pages(move |start_key| async move {
            let result = client
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_scan_error(e, table_name))?;

            Ok::<_, StoreError>(Page {
                items: result.items.unwrap_or_default(),
                last_evaluated_key: result.last_evaluated_key,
            })
        })
        .await?;

        items.iter().map(item_to_note).collect()
    }
}

#[async_trait]
impl TableAdmin for DynamoDbStore {
    async fn describe_table(&self, table_name: &str) -> Result<TableMeta> {
        let response = self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_describe_table_error(e, table_name))?;

        let table = response.table().ok_or_else(|| {
            StoreError::InvalidData(format!("DescribeTable returned no table for {}", table_name))
        })?;

        Ok(TableMeta {
            table_name: table.table_name().unwrap_or(table_name).to_string(),
            status: to_table_status(table.table_status()),
            item_count: table.item_count(),
        })
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let key = &schema.partition_key;

        let key_schema = KeySchemaElement::builder()
            .attribute_name(&key.name)
            .key_type(KeyType::Hash)
            .build()
            .map_err(map_build_error)?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(&key.name)
            .attribute_type(to_scalar_type(&key.attribute_type))
            .build()
            .map_err(map_build_error)?;

        self.client
            .create_table()
            .table_name(&schema.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(to_billing_mode(&schema.billing_mode))
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &schema.table_name))?;

        Ok(())
    }

    async fn wait_until_active(&self, table_name: &str) -> Result<()> {
        poll_until_active(self, table_name, self.wait_max_attempts, self.wait_interval).await
    }
}

fn to_scalar_type(attribute_type: &AttributeType) -> ScalarAttributeType {
    match attribute_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(billing_mode: &BillingMode) -> SdkBillingMode {
    match billing_mode {
        BillingMode::PayPerRequest => SdkBillingMode::PayPerRequest,
    }
}
