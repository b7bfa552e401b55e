use crate::types::LogLevel;
use agentops_types::DEFAULT_LIST_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcp-server-agentops-api")]
#[command(about = "Provide MCP tools for interacting with the AgentOps API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Base URL for AgentOps API [default: $AGENTOPS_API_URL, config file, or https://api.agentops.ai]"
    )]
    pub api_url: Option<String>,

    #[arg(
        long,
        global = true,
        help = "HTTP timeout in seconds, 0 disables it [default: 30]"
    )]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "TOML file with api_url / timeout_secs")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the MCP server over stdio (default)")]
    Serve,

    #[command(about = "Query traces directly, printing the raw API response")]
    Traces {
        #[arg(
            long,
            env = "AGENTOPS_API_KEY",
            hide_env_values = true,
            global = true,
            help = "AgentOps API key"
        )]
        api_key: Option<String>,

        #[command(subcommand)]
        command: TracesCommand,
    },
}

#[derive(Subcommand)]
pub enum TracesCommand {
    #[command(about = "List the most recent traces")]
    List {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },

    #[command(about = "Show one trace with all of its spans")]
    Show {
        #[arg(help = "Trace ID (from the trace_id field of `traces list`)")]
        trace_id: String,
    },
}
