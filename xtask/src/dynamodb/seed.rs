//! Demo data generation and insertion.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use todoql_core::config::TableConfig;
use todoql_core::entity::{todo_item, user_item, Todo, User};
use todoql_core::id::IdGenerator;
use todoql_core::storage::dynamodb::to_dynamo_item;
use todoql_core::storage::Item;

/// Maximum number of requests in a single BatchWriteItem call.
const BATCH_SIZE: usize = 25;

const NAMES: &[(&str, &str)] = &[
    ("Ada Lovelace", "Analyst"),
    ("Grace Hopper", "Rear Admiral"),
    ("Alan Turing", "Mathematician"),
    ("Barbara Liskov", "Professor"),
    ("Ken Thompson", "Engineer"),
];

const CONTENTS: &[&str] = &[
    "Review the pull request",
    "Write the release notes",
    "Water the plants",
    "Book the conference room",
    "Answer the support ticket",
    "Update the dependencies",
    "Plan the sprint",
];

/// A single record to be written to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedRecord {
    User(User),
    Todo(Todo),
}

impl SeedRecord {
    /// Encodes the record the same way the resolvers store it.
    pub fn to_item(&self, table: &TableConfig) -> Item {
        match self {
            Self::User(user) => user_item(
                &table.partition_key,
                &table.user_sort_key(&user.user_id),
                &user.name,
                &user.title,
            ),
            Self::Todo(todo) => todo_item(
                &table.partition_key,
                &table.todo_sort_key(&todo.user_id, &todo.todo_id),
                &todo.content,
                todo.is_completed,
            ),
        }
    }

    /// One-line description for the seed preview.
    pub fn describe(&self) -> String {
        match self {
            Self::User(user) => format!("user {} ({})", user.name, user.user_id),
            Self::Todo(todo) => {
                let mark = if todo.is_completed { "x" } else { " " };
                format!("[{}] {} ({})", mark, todo.content, todo.user_id)
            }
        }
    }
}

/// Pure function: Generates `users` users with `todos_per_user` todos each.
///
/// Names and contents cycle through fixed lists; every third todo is completed.
pub fn generate_seed_records(
    users: u32,
    todos_per_user: u32,
    ids: &dyn IdGenerator,
) -> Vec<SeedRecord> {
    let mut records = Vec::new();

    for user_index in 0..users as usize {
        let (name, title) = NAMES[user_index % NAMES.len()];
        let user_id = ids.generate();
        records.push(SeedRecord::User(User {
            user_id: user_id.clone(),
            name: name.to_string(),
            title: title.to_string(),
        }));

        for todo_index in 0..todos_per_user as usize {
            records.push(SeedRecord::Todo(Todo {
                user_id: user_id.clone(),
                todo_id: ids.generate(),
                content: CONTENTS[(user_index + todo_index) % CONTENTS.len()].to_string(),
                is_completed: todo_index % 3 == 0,
            }));
        }
    }

    records
}

/// Writes the records in batches and returns how many were inserted.
pub async fn seed_records(
    client: &Client,
    table: &TableConfig,
    records: &[SeedRecord],
) -> Result<usize> {
    let mut inserted = 0;

    for chunk in records.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|record| {
                let put = PutRequest::builder()
                    .set_item(Some(to_dynamo_item(record.to_item(table))))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        client
            .batch_write_item()
            .request_items(&table.table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len();
    }

    Ok(inserted)
}
