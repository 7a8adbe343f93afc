use async_trait::async_trait;
use openapp_executor::{CommandRunner, ExecError};

/// Outcome of one strategy. `Skipped` (required tool absent) is not a
/// failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Launched,
    Skipped,
    Failed(String),
}

#[async_trait]
pub trait LaunchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, runner: &CommandRunner, launcher_id: &str) -> Attempt;
}

/// Spawn the identifier itself when it resolves to an executable on PATH.
/// Fire-and-forget: spawn acceptance is success, the child is not awaited.
pub struct DirectExec;

#[async_trait]
impl LaunchStrategy for DirectExec {
    fn name(&self) -> &'static str {
        "direct execution"
    }

    async fn attempt(&self, runner: &CommandRunner, launcher_id: &str) -> Attempt {
        if !runner.binary_exists(launcher_id).await {
            return Attempt::Skipped;
        }
        match runner.spawn_detached(launcher_id, &[]) {
            Ok(()) => Attempt::Launched,
            Err(err) => Attempt::Failed(err.to_string()),
        }
    }
}

/// Launch through a helper tool (`gtk-launch`, `flatpak run`, `snap run`,
/// `xdg-open`). Success iff the helper exits zero within the timeout.
pub struct HelperCommand {
    pub label: &'static str,
    pub program: &'static str,
    pub prefix: &'static [&'static str],
}

#[async_trait]
impl LaunchStrategy for HelperCommand {
    fn name(&self) -> &'static str {
        self.label
    }

    async fn attempt(&self, runner: &CommandRunner, launcher_id: &str) -> Attempt {
        if !runner.binary_exists(self.program).await {
            return Attempt::Skipped;
        }

        let mut args: Vec<&str> = self.prefix.to_vec();
        args.push(launcher_id);

        match runner.run_silenced(self.program, &args).await {
            Ok(true) => Attempt::Launched,
            Ok(false) => Attempt::Failed("exited non-zero".to_string()),
            Err(ExecError::Timeout(_)) => Attempt::Failed("timed out".to_string()),
            Err(err) => Attempt::Failed(err.to_string()),
        }
    }
}
