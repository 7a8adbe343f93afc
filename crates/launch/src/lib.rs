//! Launch strategy chain: try each OS-level launch mechanism in fixed
//! order and stop at the first success.

pub mod strategies;

use openapp_executor::CommandRunner;
use strategies::{Attempt, LaunchStrategy};

/// The fixed strategy order: direct executable, gtk-launch, flatpak run,
/// snap run, xdg-open as the last resort.
pub fn default_strategies() -> Vec<Box<dyn LaunchStrategy>> {
    vec![
        Box::new(strategies::DirectExec),
        Box::new(strategies::HelperCommand {
            label: "gtk-launch",
            program: "gtk-launch",
            prefix: &[],
        }),
        Box::new(strategies::HelperCommand {
            label: "flatpak run",
            program: "flatpak",
            prefix: &["run"],
        }),
        Box::new(strategies::HelperCommand {
            label: "snap run",
            program: "snap",
            prefix: &["run"],
        }),
        Box::new(strategies::HelperCommand {
            label: "xdg-open",
            program: "xdg-open",
            prefix: &[],
        }),
    ]
}

/// Try every applicable strategy until one launches `launcher_id`.
/// Strategies whose tool is absent are skipped, not failed; `false` means
/// every applicable strategy failed or none was applicable.
pub async fn launch(runner: &CommandRunner, launcher_id: &str) -> bool {
    for strategy in default_strategies() {
        match strategy.attempt(runner, launcher_id).await {
            Attempt::Launched => {
                tracing::info!("Launched '{}' via {}", launcher_id, strategy.name());
                return true;
            }
            Attempt::Skipped => {
                tracing::debug!("{} unavailable, skipping", strategy.name());
            }
            Attempt::Failed(reason) => {
                tracing::info!("{} failed for '{}': {}", strategy.name(), launcher_id, reason);
            }
        }
    }
    false
}
