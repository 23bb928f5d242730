//! Conversions between store attribute values and `aws-sdk-dynamodb` values.
//!
//! Shared by the DynamoDB backend and the table seeding task.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;

use super::{AttributeValue, Item};

/// SDK representation of an item.
pub type DynamoItem = HashMap<String, DynamoValue>;

pub fn to_dynamo_value(value: AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::S(value) => DynamoValue::S(value),
        AttributeValue::Bool(value) => DynamoValue::Bool(value),
    }
}

pub fn to_dynamo_item(item: Item) -> DynamoItem {
    item.into_iter()
        .map(|(name, value)| (name, to_dynamo_value(value)))
        .collect()
}

/// Converts an SDK item, dropping attributes of types the service never writes.
pub fn from_dynamo_item(item: DynamoItem) -> Item {
    item.into_iter()
        .filter_map(|(name, value)| match value {
            DynamoValue::S(value) => Some((name, AttributeValue::S(value))),
            DynamoValue::Bool(value) => Some((name, AttributeValue::Bool(value))),
            _ => None,
        })
        .collect()
}
