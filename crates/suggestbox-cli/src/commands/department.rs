//! Department commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use suggestbox_core::error::AppError;
use suggestbox_database::repositories::DepartmentRepository;

use crate::output;
use crate::output::OutputFormat;

/// Arguments for department commands
#[derive(Debug, Args)]
pub struct DepartmentArgs {
    /// Department subcommand
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

/// Department subcommands
#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// List departments
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct DepartmentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

/// Execute department commands
pub async fn execute(
    args: &DepartmentArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let repo = DepartmentRepository::new(db.pool().clone());

    match &args.command {
        DepartmentCommand::List => {
            let rows: Vec<DepartmentRow> = repo
                .list()
                .await?
                .into_iter()
                .map(|d| DepartmentRow {
                    id: d.id,
                    name: d.name,
                })
                .collect();
            if rows.is_empty() {
                output::print_warning("No departments yet. Start the server once to seed them.");
            }
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
