//! Sample trace data.

use serde_json::{Value, json};

pub const VALID_KEY: &str = "key-123";
pub const PROJECT_ID: &str = "proj-fixture";
pub const FAKE_BASE_URL: &str = "http://agentops.test";

/// Full detail of a trace with `span_count` spans.
///
/// Timestamps are derived from `index` so traces sort newest-first by index.
pub fn trace_detail(index: usize, span_count: usize) -> Value {
    let trace_id = trace_id(index);
    let start = format!("2026-10-{:02}T12:00:00Z", 28 - (index % 27));
    let end = format!("2026-10-{:02}T12:00:05Z", 28 - (index % 27));

    let spans: Vec<Value> = (0..span_count)
        .map(|i| {
            json!({
                "span_id": format!("{}-span-{}", trace_id, i),
                "parent_span_id": if i == 0 { Value::Null } else { json!(format!("{}-span-0", trace_id)) },
                "span_name": if i == 0 { "agent.run".to_string() } else { format!("llm.call.{}", i) },
                "start_time": start,
                "end_time": end,
                "attributes": { "llm.model": "gpt-4o", "llm.tokens.total": 120 + i },
            })
        })
        .collect();

    json!({
        "trace_id": trace_id,
        "project_id": PROJECT_ID,
        "start_time": start,
        "end_time": end,
        "tags": ["fixture"],
        "metadata": { "environment": "test", "sdk_version": "0.4.0" },
        "spans": spans,
    })
}

/// Listing entry derived from a detail document.
pub fn trace_summary(detail: &Value) -> Value {
    json!({
        "trace_id": detail["trace_id"],
        "span_count": detail["spans"].as_array().map(|s| s.len()).unwrap_or(0),
        "start_time": detail["start_time"],
        "end_time": detail["end_time"],
    })
}

pub fn trace_id(index: usize) -> String {
    format!("{:032x}", 0xa9e7_0000_u64 + index as u64)
}

/// `count` traces, newest first, with 1..=3 spans each.
pub fn sample_traces(count: usize) -> Vec<Value> {
    (0..count).map(|i| trace_detail(i, 1 + i % 3)).collect()
}
