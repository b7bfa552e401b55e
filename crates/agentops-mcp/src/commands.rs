use super::args::{Cli, Commands, TracesCommand};
use super::handlers;
use super::logging;
use agentops_sdk::ApiConfig;
use anyhow::{Context, Result};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = ApiConfig::resolve(
        cli.api_url.as_deref(),
        cli.timeout_secs,
        cli.config.as_deref(),
    )?;
    tracing::debug!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "resolved configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => runtime.block_on(handlers::serve::handle(&config)),

        Commands::Traces { api_key, command } => {
            let api_key = api_key.unwrap_or_default();
            match command {
                TracesCommand::List { limit } => {
                    runtime.block_on(handlers::traces::handle_list(&config, &api_key, limit))
                }
                TracesCommand::Show { trace_id } => {
                    runtime.block_on(handlers::traces::handle_show(&config, &api_key, &trace_id))
                }
            }
        }
    }
}
