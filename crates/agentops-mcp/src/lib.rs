// NOTE: Process model
//
// stdout belongs to the MCP protocol in `serve` mode, so every diagnostic goes
// to stderr through tracing. The direct `traces` commands print only the raw
// response body on stdout, which keeps them pipeable into `jq`.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod types;

pub use args::{Cli, Commands, TracesCommand};
pub use commands::run;
