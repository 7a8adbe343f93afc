//! The `open_app` tool: discover installed GUI applications, resolve the
//! requested name, and launch it through the strategy chain. One request
//! in, one outcome out; the catalog is rebuilt fresh on every call.

use crate::traits::{Tool, ToolError, ToolResult};
use async_trait::async_trait;
use openapp_core::{Catalog, EngineConfig, LaunchOutcome, MatchCandidate};
use openapp_executor::CommandRunner;
use openapp_resolver::Resolution;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub struct OpenAppTool {
    config: EngineConfig,
}

impl OpenAppTool {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    async fn run_query(
        &self,
        query: &str,
        catalog: &Catalog,
        runner: &CommandRunner,
    ) -> LaunchOutcome {
        match openapp_resolver::resolve(query, catalog) {
            Resolution::NotFound => LaunchOutcome::NotFound,
            Resolution::Exact(entry) => try_launch(runner, entry.launcher_id, None).await,
            Resolution::Fuzzy { entry, score } => {
                tracing::info!(
                    "Close match for '{}': {} ({}% match), launching automatically",
                    query,
                    entry.launcher_id,
                    score
                );
                try_launch(runner, entry.launcher_id, Some(query.to_string())).await
            }
            Resolution::Ambiguous(candidates) => LaunchOutcome::Ambiguous {
                query: query.to_string(),
                candidates,
            },
        }
    }
}

impl Default for OpenAppTool {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

async fn try_launch(
    runner: &CommandRunner,
    launcher_id: String,
    matched_from: Option<String>,
) -> LaunchOutcome {
    if openapp_launch::launch(runner, &launcher_id).await {
        LaunchOutcome::Launched {
            launcher_id,
            matched_from,
        }
    } else {
        LaunchOutcome::LaunchFailed { launcher_id }
    }
}

/// Map the terminal outcome to (success, user message, machine reason).
/// The chain cannot tell a wrong identifier from a broken install once
/// resolution succeeded, so the failure notice names both possibilities.
fn render_outcome(outcome: &LaunchOutcome) -> (bool, String, Option<String>) {
    match outcome {
        LaunchOutcome::Launched {
            launcher_id,
            matched_from: None,
        } => (
            true,
            format!("Successfully launched {}", launcher_id),
            None,
        ),
        LaunchOutcome::Launched {
            launcher_id,
            matched_from: Some(query),
        } => (
            true,
            format!("Successfully launched {} (matched from '{}')", launcher_id, query),
            None,
        ),
        LaunchOutcome::LaunchFailed { launcher_id } => (
            false,
            format!(
                "Unable to launch '{}'. It may require reinstalling or extra permissions.",
                launcher_id
            ),
            Some("launch failed".to_string()),
        ),
        LaunchOutcome::NotFound => (
            false,
            openapp_resolver::NO_APPS_HINT.to_string(),
            Some("no applications found".to_string()),
        ),
        LaunchOutcome::Ambiguous { query, candidates } => (
            false,
            render_candidates(query, candidates),
            Some("ambiguous query".to_string()),
        ),
    }
}

fn render_candidates(query: &str, candidates: &[MatchCandidate]) -> String {
    let mut text = format!("Similar applications to '{}':\n", query);
    for candidate in candidates {
        text.push_str(&format!(
            "{} ({}) - {}% match\n",
            candidate.launcher_id, candidate.display_name, candidate.score
        ));
    }
    text.push_str("\nUse one of these names with open_app to launch.");
    text
}

#[derive(Debug, Default, Deserialize)]
struct OpenAppInput {
    app_name: Option<String>,
}

#[async_trait]
impl Tool for OpenAppTool {
    fn name(&self) -> &str {
        "open_app"
    }

    fn description(&self) -> &str {
        "Launch a GUI application by exact or approximate name, or list installed applications (desktop entries, Flatpak, Snap)"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "app_name": {
                    "type": "string",
                    "description": "Exact or approximate launcher id, e.g. 'firefox' or 'org.gimp.GIMP'. Omit to list available applications."
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let input: OpenAppInput = if args.is_null() {
            OpenAppInput::default()
        } else {
            serde_json::from_value(args).map_err(|e| ToolError::Validation(e.to_string()))?
        };

        let runner = CommandRunner::new(Duration::from_millis(self.config.command_timeout_ms));
        let catalog = openapp_sources::discover(&self.config, &runner).await;

        let query = input
            .app_name
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        match query {
            None => Ok(ToolResult::ok(
                json!({ "message": openapp_resolver::listing(&catalog) }),
            )),
            Some(query) => {
                tracing::info!("Processing request for app: {}", query);
                let outcome = self.run_query(query, &catalog, &runner).await;
                let (success, message, error) = render_outcome(&outcome);
                Ok(ToolResult {
                    success,
                    output: json!({ "message": message }),
                    error,
                })
            }
        }
    }
}
