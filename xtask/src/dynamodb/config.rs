//! Table schema (Functional Core - pure data).

use todoql_core::config::TableConfig;
use todoql_core::storage::{PARTITION_KEY_ATTRIBUTE, SORT_KEY_ATTRIBUTE};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// DynamoDB attribute types.
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
}

/// Returns the single-table schema every todoql item lives in.
///
/// String `pk` hash key, string `sk` range key, no secondary indexes.
pub fn todoql_table_schema() -> TableSchema {
    TableSchema {
        table_name: TableConfig::default().table_name,
        partition_key: KeyAttribute::string(PARTITION_KEY_ATTRIBUTE),
        sort_key: KeyAttribute::string(SORT_KEY_ATTRIBUTE),
        billing_mode: BillingMode::PayPerRequest,
    }
}
