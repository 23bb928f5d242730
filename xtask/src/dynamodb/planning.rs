//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableSchema;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the HASH key attribute, if the table reports one.
    pub partition_key: Option<String>,
    /// Name of the RANGE key attribute, if the table has one.
    pub sort_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { schema: TableSchema },
    /// Table exists with a different key schema and cannot be reused.
    Incompatible { table_name: String, reason: String },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableSchema) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            schema: desired.clone(),
        };
    };

    let expected = (
        Some(desired.partition_key.name.as_str()),
        Some(desired.sort_key.name.as_str()),
    );
    let actual = (state.partition_key.as_deref(), state.sort_key.as_deref());

    if actual == expected {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::Incompatible {
            table_name: desired.table_name.clone(),
            reason: format!(
                "expected keys ({}, {}), found ({}, {})",
                desired.partition_key.name,
                desired.sort_key.name,
                actual.0.unwrap_or("-"),
                actual.1.unwrap_or("-"),
            ),
        }
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { schema } => vec![
            format!("+ Create table: {}", schema.table_name),
            format!("  Partition key: {} (S)", schema.partition_key.name),
            format!("  Sort key: {} (S)", schema.sort_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::Incompatible { table_name, reason } => {
            vec![format!("~ Table '{}' cannot be used: {}", table_name, reason)]
        }
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::todoql_table_schema;

    fn state(partition_key: Option<&str>, sort_key: Option<&str>) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: partition_key.map(String::from),
            sort_key: sort_key.map(String::from),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let schema = todoql_table_schema();
        let plan = calculate_deploy_plan(None, &schema);

        assert_eq!(plan, DeployPlan::CreateTable { schema });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let schema = todoql_table_schema();
        let current = state(Some("pk"), Some("sk"));

        assert_eq!(
            calculate_deploy_plan(Some(&current), &schema),
            DeployPlan::NoChanges {
                table_name: "todoql".to_string()
            }
        );
    }

    #[test]
    fn test_hash_only_table_is_incompatible() {
        let schema = todoql_table_schema();
        let current = state(Some("pk"), None);

        let plan = calculate_deploy_plan(Some(&current), &schema);
        let DeployPlan::Incompatible { reason, .. } = &plan else {
            panic!("expected incompatible plan, got {plan:?}");
        };
        assert_eq!(reason, "expected keys (pk, sk), found (pk, -)");
    }

    #[test]
    fn test_destroy_plan() {
        let current = state(Some("pk"), Some("sk"));

        assert_eq!(
            calculate_destroy_plan(Some(&current), "todoql"),
            DestroyPlan::DeleteTable {
                table_name: "todoql".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "todoql"),
            DestroyPlan::AlreadyGone {
                table_name: "todoql".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = DeployPlan::CreateTable {
            schema: todoql_table_schema(),
        };

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: todoql",
                "  Partition key: pk (S)",
                "  Sort key: sk (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }
}
