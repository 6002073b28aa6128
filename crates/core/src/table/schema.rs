//! Table schema configuration (Functional Core - pure data).

/// Default name of the notes table.
pub const DEFAULT_TABLE_NAME: &str = "Notes";

/// Name of the hash key attribute on the notes table.
pub const NOTE_ID_ATTRIBUTE: &str = "id";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types usable in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableSchema {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Human-readable summary, used in startup logs.
    pub fn describe(&self) -> String {
        let billing = match self.billing_mode {
            BillingMode::PayPerRequest => "PAY_PER_REQUEST",
        };
        format!(
            "{} (hash key: {} {}, billing: {})",
            self.table_name,
            self.partition_key.name,
            self.partition_key.attribute_type.code(),
            billing
        )
    }
}

impl AttributeType {
    /// The single-letter type code DynamoDB uses.
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
        }
    }
}

/// Returns the canonical notes table schema: one string hash key, on-demand billing.
pub fn notes_table_schema() -> TableSchema {
    TableSchema {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: NOTE_ID_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}
