use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Output always goes to stderr so stdout stays
/// reserved for protocol frames and raw response bodies.
///
/// `RUST_LOG` directives are honoured on top of `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(to_directive(level))
        .from_env_lossy();

    // A subscriber may already be installed when run() is called from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn to_directive(level: LogLevel) -> tracing_subscriber::filter::Directive {
    let level = match level {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    };
    tracing_subscriber::filter::LevelFilter::from_level(level).into()
}
