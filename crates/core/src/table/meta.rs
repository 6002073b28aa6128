/// Metadata returned by a table description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub table_name: String,
    pub status: TableStatus,
    /// Approximate item count, when the backend reports one.
    pub item_count: Option<i64>,
}

/// Table lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Creating,
    Active,
    Updating,
    Deleting,
    Unknown,
}

impl TableStatus {
    /// Whether the table accepts reads and writes.
    ///
    /// An `Updating` table still serves traffic.
    pub fn is_usable(&self) -> bool {
        matches!(self, TableStatus::Active | TableStatus::Updating)
    }
}
