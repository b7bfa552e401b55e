//! Drive an MCP server process over stdio.

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// A running server with piped stdin/stdout. Killed on drop.
pub struct McpHarness {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    next_id: u64,
}

impl McpHarness {
    /// Spawn `command` (e.g. the server binary with its arguments).
    pub fn spawn(mut command: Command) -> Result<Self> {
        let mut process = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to spawn MCP server")?;

        let stdin = process.stdin.take().context("Failed to open stdin")?;
        let stdout = process.stdout.take().context("Failed to open stdout")?;

        Ok(Self {
            process,
            stdin,
            stdout: BufReader::new(stdout),
            next_id: 1,
        })
    }

    /// Send a request and wait for its response line.
    pub fn request(&mut self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id;
        self.next_id += 1;

        self.send_raw(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        })
        .to_string())?;

        let response = self.read_response()?;
        if response["id"] != json!(id) {
            bail!("response id mismatch: expected {}, got {}", id, response["id"]);
        }
        Ok(response)
    }

    /// Send a notification; no response is expected.
    pub fn notify(&mut self, method: &str) -> Result<()> {
        self.send_raw(&json!({ "jsonrpc": "2.0", "method": method }).to_string())
    }

    /// `tools/call` shortcut.
    pub fn call_tool(&mut self, name: &str, arguments: Value) -> Result<Value> {
        self.request(
            "tools/call",
            json!({
                "name": name,
                "arguments": arguments
            }),
        )
    }

    /// Write one raw line, bypassing JSON encoding.
    pub fn send_raw(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdin, "{}", line)?;
        self.stdin.flush()?;
        Ok(())
    }

    pub fn read_response(&mut self) -> Result<Value> {
        let mut line = String::new();
        let read = self.stdout.read_line(&mut line)?;
        if read == 0 {
            bail!("MCP server closed stdout");
        }
        Ok(serde_json::from_str(&line)?)
    }
}

impl Drop for McpHarness {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Text of the first content item of a successful `tools/call` response.
pub fn tool_text(response: &Value) -> Option<&str> {
    response["result"]["content"][0]["text"].as_str()
}
