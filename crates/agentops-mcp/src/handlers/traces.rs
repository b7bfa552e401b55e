use agentops_sdk::{ApiClient, ApiConfig, Credential, RawResponse};
use anyhow::Result;
use std::io::Write;

pub async fn handle_list(config: &ApiConfig, api_key: &str, limit: u32) -> Result<()> {
    let credential = Credential::new(api_key)?;
    let client = ApiClient::new(super::transport(config)?, &config.api_url)?;
    let body = client.fetch_traces(&credential, limit).await?;
    print_raw(&body)
}

pub async fn handle_show(config: &ApiConfig, api_key: &str, trace_id: &str) -> Result<()> {
    let credential = Credential::new(api_key)?;
    let client = ApiClient::new(super::transport(config)?, &config.api_url)?;
    let body = client.fetch_trace_detail(&credential, trace_id).await?;
    print_raw(&body)
}

fn print_raw(body: &RawResponse) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", body.as_str())?;
    stdout.flush()?;
    Ok(())
}
