use openapp_executor::CommandRunner;
use std::collections::BTreeMap;

/// Installed snaps as `{name: name}`. Snap's listing carries no richer
/// display name, so the package name serves as both.
pub async fn installed_snaps(runner: &CommandRunner) -> BTreeMap<String, String> {
    if !runner.binary_exists("snap").await {
        tracing::debug!("snap not on PATH, skipping");
        return BTreeMap::new();
    }

    match runner.run_captured("snap", &["list", "--color=never"]).await {
        Ok(out) if out.exit_ok => parse_list(&out.stdout),
        Ok(out) => {
            tracing::warn!("snap list exited non-zero: {}", out.stderr.trim());
            BTreeMap::new()
        }
        Err(err) => {
            tracing::warn!("snap list failed: {}", err);
            BTreeMap::new()
        }
    }
}

/// First column of every line after the header.
fn parse_list(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| (name.to_string(), name.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_skips_header() {
        let stdout = "Name     Version  Rev   Tracking  Publisher  Notes\n\
                      firefox  128.0    4451  latest    mozilla    -\n\
                      core22   20240111 1122  latest    canonical  base\n";
        let snaps = parse_list(stdout);
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps.get("firefox").unwrap(), "firefox");
        assert!(!snaps.contains_key("Name"));
    }

    #[test]
    fn test_parse_list_ignores_blank_lines() {
        let snaps = parse_list("Name Version\nfirefox 1.0\n\n");
        assert_eq!(snaps.len(), 1);
    }

    #[test]
    fn test_parse_list_empty_output() {
        assert!(parse_list("").is_empty());
    }
}
