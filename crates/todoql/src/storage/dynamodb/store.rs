//! DynamoDB store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use todoql_core::storage::dynamodb::{from_dynamo_item, to_dynamo_item};
use todoql_core::storage::{
    DeleteItem, Item, PutItem, QueryItems, Result, ReturnValues, StoreClient, UpdateItem,
};

use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};
use crate::config::{Config, LOCAL_ENDPOINT, LOCAL_REGION};

/// DynamoDB-based store over a single table.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from the application configuration.
    ///
    /// Uses the AWS SDK default credential chain. Offline and test runs talk
    /// to the local endpoint instead of the regional one.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(endpoint) = config.endpoint_override() {
            tracing::info!(endpoint, "Using DynamoDB endpoint override");
            loader = loader.endpoint_url(endpoint);
            if endpoint == LOCAL_ENDPOINT {
                loader = loader.region(aws_config::Region::new(LOCAL_REGION));
            }
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table.table_name.clone())
    }
}

fn return_value(return_values: ReturnValues) -> ReturnValue {
    match return_values {
        ReturnValues::None => ReturnValue::None,
        ReturnValues::AllNew => ReturnValue::AllNew,
        ReturnValues::AllOld => ReturnValue::AllOld,
    }
}

#[async_trait]
impl StoreClient for DynamoDbStore {
    async fn put(&self, request: PutItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_dynamo_item(request.item)))
            .set_condition_expression(request.condition.map(|c| c.expression().to_string()))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, request: UpdateItem) -> Result<Option<Item>> {
        let update_expression = request.update_expression();
        let names = request.expression_attribute_names();
        let values = to_dynamo_item(request.expression_attribute_values());

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(to_dynamo_item(request.key.to_item())))
            .update_expression(update_expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .set_condition_expression(request.condition.map(|c| c.expression().to_string()))
            .return_values(return_value(request.return_values))
            .send()
            .await
            .map_err(map_update_item_error)?;

        Ok(result.attributes.map(from_dynamo_item))
    }

    async fn delete(&self, request: DeleteItem) -> Result<Option<Item>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(to_dynamo_item(request.key.to_item())))
            .set_condition_expression(request.condition.map(|c| c.expression().to_string()))
            .return_values(return_value(request.return_values))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(result.attributes.map(from_dynamo_item))
    }

    async fn query(&self, request: QueryItems) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        // Page through LastEvaluatedKey.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(request.key_condition_expression())
                .set_expression_attribute_names(Some(request.expression_attribute_names()))
                .set_expression_attribute_values(Some(to_dynamo_item(
                    request.expression_attribute_values(),
                )))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            items.extend(result.items.unwrap_or_default().into_iter().map(from_dynamo_item));

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }
}
