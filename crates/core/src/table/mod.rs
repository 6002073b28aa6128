pub mod bootstrap;
mod meta;
mod schema;

pub use meta::{TableMeta, TableStatus};
pub use schema::{
    notes_table_schema, AttributeType, BillingMode, KeyAttribute, TableSchema,
    DEFAULT_TABLE_NAME, NOTE_ID_ATTRIBUTE,
};
