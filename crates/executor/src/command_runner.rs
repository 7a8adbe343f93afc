use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("Command timed out: {0}")]
    Timeout(String),
}

#[derive(Debug)]
pub struct CommandOutput {
    pub exit_ok: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands with a bounded timeout. Every packaging-system
/// query and launch attempt goes through one of these methods.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run to completion and capture output. A timeout kills the child.
    pub async fn run_captured(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<CommandOutput, ExecError> {
        tracing::debug!("Running command: {} {:?}", program, args);

        let exec = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, exec)
            .await
            .map_err(|_| ExecError::Timeout(program.to_string()))?
            .map_err(|source| ExecError::Spawn {
                command: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            exit_ok: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with all stdio discarded; `Ok(true)` means exit code zero.
    pub async fn run_silenced(&self, program: &str, args: &[&str]) -> Result<bool, ExecError> {
        tracing::debug!("Running command silenced: {} {:?}", program, args);

        let exec = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        let status = timeout(self.timeout, exec)
            .await
            .map_err(|_| ExecError::Timeout(program.to_string()))?
            .map_err(|source| ExecError::Spawn {
                command: program.to_string(),
                source,
            })?;

        Ok(status.success())
    }

    /// Fire-and-forget spawn with stdio discarded. The child is never
    /// awaited; success means the OS accepted the spawn, not that the
    /// program keeps running.
    pub fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        tracing::debug!("Spawning detached: {} {:?}", program, args);

        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                command: program.to_string(),
                source,
            })?;

        Ok(())
    }

    /// Whether `name` resolves to an executable on the search path.
    pub async fn binary_exists(&self, name: &str) -> bool {
        let probe = Command::new("which")
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match timeout(self.timeout, probe).await {
            Ok(Ok(status)) => status.success(),
            _ => false,
        }
    }
}
