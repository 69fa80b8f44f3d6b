use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};
use xdns_application::ports::NetworkRestarter;
use xdns_domain::DomainError;

/// Restarts networking by running an external command, e.g.
/// `/etc/init.d/network restart`.
#[derive(Debug, Clone)]
pub struct CommandNetworkRestarter {
    program: String,
    args: Vec<String>,
}

impl CommandNetworkRestarter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_command(command: &[String]) -> Result<Self, DomainError> {
        let (program, args) = command.split_first().ok_or_else(|| {
            DomainError::ConfigError("Network restart command is empty".to_string())
        })?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl NetworkRestarter for CommandNetworkRestarter {
    async fn restart(&self, timeout: Duration) -> Result<(), DomainError> {
        let command = self.display_command();
        info!(command = %command, timeout_secs = timeout.as_secs(), "Restarting network");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::NetworkRestartFailed(format!("{}: {}", command, e)))?;

        let status = match tokio::time::timeout(timeout, child.wait()).await {
            Ok(status) => status
                .map_err(|e| DomainError::NetworkRestartFailed(format!("{}: {}", command, e)))?,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    warn!(command = %command, error = %e, "Failed to kill network restart");
                }
                return Err(DomainError::NetworkRestartTimeout(timeout.as_secs()));
            }
        };

        if !status.success() {
            return Err(DomainError::NetworkRestartFailed(format!(
                "{} exited with {}",
                command, status
            )));
        }

        Ok(())
    }
}
