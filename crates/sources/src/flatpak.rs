use openapp_executor::CommandRunner;
use std::collections::BTreeMap;

/// Installed Flatpak applications as `{app id: display name}`. Absent
/// tool, timeout, or a failed query all degrade to an empty map.
pub async fn installed_apps(runner: &CommandRunner) -> BTreeMap<String, String> {
    if !runner.binary_exists("flatpak").await {
        tracing::debug!("flatpak not on PATH, skipping");
        return BTreeMap::new();
    }

    match runner
        .run_captured("flatpak", &["list", "--app", "--columns=application,name"])
        .await
    {
        Ok(out) if out.exit_ok => parse_list(&out.stdout),
        Ok(out) => {
            tracing::warn!("flatpak list exited non-zero: {}", out.stderr.trim());
            BTreeMap::new()
        }
        Err(err) => {
            tracing::warn!("flatpak list failed: {}", err);
            BTreeMap::new()
        }
    }
}

/// Parse tab-separated `application<TAB>name` lines; malformed lines are
/// dropped.
fn parse_list(stdout: &str) -> BTreeMap<String, String> {
    let mut apps = BTreeMap::new();
    for line in stdout.lines() {
        let parts: Vec<&str> = line
            .split('\t')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() >= 2 {
            apps.insert(parts[0].to_string(), parts[1].to_string());
        }
    }
    apps
}
