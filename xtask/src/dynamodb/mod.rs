//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use todoql_core::config::TableConfig;
use todoql_core::id::RandomIdGenerator;

/// Records shown in the seed preview before the rest are summarized.
const PREVIEW_LIMIT: usize = 5;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the todoql table.
    Deploy(DeployCommand),

    /// Seed the table with demo users and todos.
    Seed(SeedCommand),
}

/// Deploy or destroy the todoql table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the todoql DynamoDB table.

By default, this command creates the single table every user and todo
lives in: a string `pk` partition key, a string `sk` sort key and
on-demand billing. An existing table with the same keys is left alone.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "todoql")]
    pub table_name: String,
}

/// Seed the table with demo users and todos.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo users and todos into DynamoDB.

Items are written with the same keys the API uses, so the seeded data is
immediately visible through getUsers, getTodos and getTodosOfUser.")]
pub struct SeedCommand {
    /// Number of users to generate.
    #[arg(long, default_value = "3")]
    pub users: u32,

    /// Number of todos generated for every user.
    #[arg(long, default_value = "3")]
    pub todos_per_user: u32,

    /// Table name to use.
    #[arg(long, default_value = "todoql")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let schema = config::todoql_table_schema().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &schema);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            if line.starts_with('+') {
                aprintln!("  {}", p_g(&line));
            } else if line.starts_with('~') {
                aprintln!("  {}", p_y(&line));
            } else {
                aprintln!("  {}", line);
            }
        }
        aprintln!();
    }

    match plan {
        planning::DeployPlan::NoChanges { .. } => {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }
        planning::DeployPlan::Incompatible { .. } => {
            return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
        }
        planning::DeployPlan::CreateTable { .. } => {}
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let table = TableConfig {
        table_name: cmd.table_name,
        ..TableConfig::default()
    };

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!("{} {}", p_b("Table:"), table.table_name);
        aprintln!("{} {}", p_b("Users:"), cmd.users);
        aprintln!("{} {}", p_b("Todos per user:"), cmd.todos_per_user);
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;

    let table_state = client::get_table_state(&dynamo_client, &table.table_name).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: table.table_name,
        });
    }

    let records = seed::generate_seed_records(cmd.users, cmd.todos_per_user, &RandomIdGenerator);

    if !global.is_silent() {
        aprintln!("{}", p_c("Records to create:"));
        for record in records.iter().take(PREVIEW_LIMIT) {
            aprintln!("  {}", record.describe());
        }
        if records.len() > PREVIEW_LIMIT {
            aprintln!("  ... and {} more", records.len() - PREVIEW_LIMIT);
        }
        aprintln!();
    }

    if records.is_empty() {
        if !global.is_silent() {
            aprintln!("{}", p_g("Nothing to seed."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm(&format!("Insert {} records?", records.len()), true)?;
    }

    let inserted = seed::seed_records(&dynamo_client, &table, &records).await?;

    if !global.is_silent() {
        aprintln!("{} {} records inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}
