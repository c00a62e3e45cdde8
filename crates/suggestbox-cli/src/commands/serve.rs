//! Start the SuggestBox server.

use clap::Args;

use suggestbox_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting SuggestBox server...");
    output::print_kv("Address", &config.server.bind_address());
    output::print_kv("Database", &config.database.url);

    let db = super::connect(&config).await?;
    suggestbox_api::app::run_server(config, db).await
}
