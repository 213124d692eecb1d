use async_trait::async_trait;
use serde_json::{Map, Value};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::RuntimeConfig;
use crate::errors::runtime::RuntimeError;
use crate::models::container::{ContainerDetail, ContainerStatsRow, ContainerSummary};
use crate::repositories::container_runtime::ContainerRuntime;

const LIST_FORMAT: &str =
    r#"{"id":"{{.ID}}","name":"{{.Names}}","image":"{{.Image}}","status":"{{.Status}}"}"#;

/// Talks to a Docker-compatible runtime through its command-line client.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
    command_timeout: Duration,
}

impl DockerCli {
    pub fn new(binary: impl Into<String>, command_timeout: Duration) -> DockerCli {
        DockerCli {
            binary: binary.into(),
            command_timeout,
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> DockerCli {
        DockerCli::new(config.binary.clone(), config.command_timeout())
    }

    fn label(&self, subcommand: &str) -> String {
        format!("{} {}", self.binary, subcommand)
    }

    async fn execute_runtime_command(
        &self,
        label: &str,
        args: &[&str],
    ) -> Result<Output, RuntimeError> {
        debug!(command = %label, "Running container runtime command");

        let child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!(command = %label, error = %e, "Failed to spawn container runtime");
                RuntimeError::CommandFailed {
                    command: label.to_string(),
                    reason: format!("Failed to execute {}: {}", self.binary, e),
                }
            })?;

        match timeout(self.command_timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => {
                warn!(command = %label, error = %e, "Container runtime command failed");
                Err(RuntimeError::CommandFailed {
                    command: label.to_string(),
                    reason: format!("Failed to collect output: {}", e),
                })
            }
            Err(_) => {
                warn!(
                    command = %label,
                    timeout_secs = self.command_timeout.as_secs(),
                    "Container runtime command timed out"
                );
                Err(RuntimeError::Timeout {
                    command: label.to_string(),
                    seconds: self.command_timeout.as_secs(),
                })
            }
        }
    }
}

#[async_trait]
impl ContainerRuntime for DockerCli {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let label = self.label("ps");
        let output = self
            .execute_runtime_command(&label, &["ps", "-a", "--format", LIST_FORMAT])
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            warn!(command = %label, %stderr, "Listing containers failed");
            return Err(RuntimeError::CommandFailed {
                command: label,
                reason: stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_container_listing(&stdout))
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerDetail, RuntimeError> {
        let label = self.label("inspect");
        let output = self
            .execute_runtime_command(&label, &["inspect", id])
            .await?;

        // The runtime reports every failure the same way, so any non-zero
        // exit is treated as an unknown container.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            debug!(container_id = %id, %stderr, "Inspect returned non-zero exit status");
            return Err(RuntimeError::ContainerNotFound {
                id: id.to_string(),
                reason: stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_inspect_output(&label, &stdout)
    }

    async fn container_stats(&self, id: &str) -> Result<ContainerStatsRow, RuntimeError> {
        let label = self.label("stats");
        let output = self
            .execute_runtime_command(&label, &["stats", "--no-stream", id])
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            debug!(container_id = %id, %stderr, "Stats returned non-zero exit status");
            return Err(RuntimeError::ContainerNotFound {
                id: id.to_string(),
                reason: stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_stats_table(&label, &stdout)
    }
}

/// Parses one JSON object per line. Lines that are not a well-formed
/// container record are logged and dropped.
pub fn parse_container_listing(stdout: &str) -> Vec<ContainerSummary> {
    stdout
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match serde_json::from_str::<ContainerSummary>(line) {
            Ok(container) => Some(container),
            Err(e) => {
                warn!(%line, error = %e, "Skipping malformed container listing line");
                None
            }
        })
        .collect()
}

pub fn parse_inspect_output(command: &str, stdout: &str) -> Result<ContainerDetail, RuntimeError> {
    let records: Vec<Value> =
        serde_json::from_str(stdout).map_err(|e| RuntimeError::ParseFailed {
            command: command.to_string(),
            reason: format!("Failed to parse container details: {}", e),
        })?;

    records
        .into_iter()
        .next()
        .ok_or_else(|| RuntimeError::ParseFailed {
            command: command.to_string(),
            reason: "Inspect output contained no records".to_string(),
        })
}

/// Pairs the header line with the first data line by position. Surplus
/// tokens on either side are ignored.
pub fn parse_stats_table(command: &str, stdout: &str) -> Result<ContainerStatsRow, RuntimeError> {
    let mut lines = stdout.trim().lines();
    let (header, values) = match (lines.next(), lines.next()) {
        (Some(header), Some(values)) => (header, values),
        _ => {
            return Err(RuntimeError::ParseFailed {
                command: command.to_string(),
                reason: "Invalid stats output".to_string(),
            })
        }
    };

    let row: Map<String, Value> = header
        .split_whitespace()
        .zip(values.split_whitespace())
        .map(|(column, value)| (column.to_string(), Value::String(value.to_string())))
        .collect();

    Ok(row)
}
