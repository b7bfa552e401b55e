pub mod serve;
pub mod traces;

use agentops_sdk::{ApiConfig, ReqwestTransport, Transport};
use anyhow::Result;
use std::sync::Arc;

fn transport(config: &ApiConfig) -> Result<Arc<dyn Transport>> {
    Ok(Arc::new(ReqwestTransport::new(config.timeout())?))
}
