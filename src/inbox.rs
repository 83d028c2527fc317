//! Inbox provider subprocess protocol.
//!
//! Schedule emails can be fetched from a mail account through an external
//! binary (`uplift-inbox-<name>`) speaking JSON over stdin/stdout. The
//! protocol is language-agnostic: any executable that answers a `search`
//! request can be a provider.
//!
//! Providers manage their own credentials and tokens; this side only sends
//! a search query and reads back matching messages.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use uplift_core::error::{UpliftError, UpliftResult};

const INBOX_TIMEOUT: Duration = Duration::from_secs(30);

/// A message returned by an inbox provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmail {
    pub subject: String,
    pub body: String,
}

/// Request sent to the provider.
#[derive(Debug, Serialize, Deserialize)]
struct Request {
    command: String,
    #[serde(default)]
    params: serde_json::Value,
}

/// Response sent back by the provider.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Response<T> {
    Success { data: T },
    Error { error: String },
}

#[derive(Clone)]
pub struct InboxProvider(String);

impl InboxProvider {
    pub fn from_name(name: &str) -> Self {
        InboxProvider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> UpliftResult<std::path::PathBuf> {
        let binary_name = format!("uplift-inbox-{}", self.0);
        which::which(&binary_name).map_err(|_| UpliftError::InboxNotInstalled(self.0.clone()))
    }

    /// Search the inbox and return matching messages.
    pub async fn search(&self, query: &str) -> UpliftResult<Vec<RawEmail>> {
        let params = serde_json::json!({ "query": query });
        timeout(INBOX_TIMEOUT, self.call("search", params))
            .await
            .map_err(|_| UpliftError::InboxTimeout(INBOX_TIMEOUT.as_secs()))?
    }

    async fn call(&self, command: &str, params: serde_json::Value) -> UpliftResult<Vec<RawEmail>> {
        let request = Request {
            command: command.to_string(),
            params,
        };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| UpliftError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = Command::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                UpliftError::Inbox(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(UpliftError::Inbox(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.is_empty() {
            return Err(UpliftError::Inbox("Provider returned no response".into()));
        }

        let response: Response<Vec<RawEmail>> = serde_json::from_str(&response_str)
            .map_err(|e| UpliftError::Inbox(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(UpliftError::Inbox(error)),
        }
    }
}
