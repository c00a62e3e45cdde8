//! Admin account commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use suggestbox_auth::password::{PasswordHasher, PasswordValidator};
use suggestbox_core::error::AppError;
use suggestbox_database::repositories::{AdminRepository, DepartmentRepository, ReplyRepository};
use suggestbox_entity::admin::AdminUser;
use suggestbox_service::AdminService;

use crate::output;
use crate::output::OutputFormat;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List admin accounts
    List,
    /// Reset an admin's password
    ResetPassword {
        /// Username of the admin
        username: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// One row of `admin list`.
#[derive(Debug, Serialize, Tabled)]
struct AdminRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "All depts")]
    can_view_all: bool,
    #[tabled(rename = "Root")]
    is_root: bool,
}

impl From<AdminUser> for AdminRow {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            role: admin.role.to_string(),
            department: admin.department_name.unwrap_or_else(|| "-".to_string()),
            can_view_all: admin.can_view_all,
            is_root: admin.is_root,
        }
    }
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let pool = db.pool().clone();
    let admin_repo = Arc::new(AdminRepository::new(pool.clone()));

    match &args.command {
        AdminCommand::List => {
            let rows: Vec<AdminRow> = admin_repo
                .list()
                .await?
                .into_iter()
                .map(AdminRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        AdminCommand::ResetPassword { username, password } => {
            let service = AdminService::new(
                admin_repo,
                Arc::new(DepartmentRepository::new(pool.clone())),
                Arc::new(ReplyRepository::new(pool)),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
            );

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            service.reset_password(username, &password).await?;
            output::print_success(&format!("Password reset for admin '{username}'"));
        }
    }

    db.close().await;
    Ok(())
}
