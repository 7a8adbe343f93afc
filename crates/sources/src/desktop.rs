use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Scan the given directories for `*.desktop` files and map file stems to
/// display names. Later directories overwrite earlier ones on stem
/// collision, so user-local entries shadow system-wide ones.
pub async fn desktop_entries(dirs: &[PathBuf]) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for dir in dirs {
        // Absent directory is not an error: zero entries from it.
        let mut read_dir = match tokio::fs::read_dir(dir).await {
            Ok(read_dir) => read_dir,
            Err(_) => continue,
        };

        loop {
            match read_dir.next_entry().await {
                Ok(Some(file)) => {
                    let path = file.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("desktop") {
                        continue;
                    }
                    if let Some((stem, name)) = read_entry(&path).await {
                        entries.insert(stem, name);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!("Stopped scanning {}: {}", dir.display(), err);
                    break;
                }
            }
        }
    }

    tracing::debug!("Desktop entries found: {}", entries.len());
    entries
}

async fn read_entry(path: &Path) -> Option<(String, String)> {
    let bytes = tokio::fs::read(path).await.ok()?;
    let content = String::from_utf8_lossy(&bytes);
    let name = display_name(&content)?;
    let stem = path.file_stem()?.to_string_lossy().to_string();
    Some((stem, name))
}

/// Extract the display name from desktop-entry content, or `None` when the
/// application is hidden or carries no `Name=` line.
fn display_name(content: &str) -> Option<String> {
    if content.contains("NoDisplay=true") || content.contains("Hidden=true") {
        return None;
    }

    content.lines().find_map(|line| {
        line.strip_prefix("Name=")
            .map(|value| value.trim().to_string())
    })
}
