use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine settings a hosting runtime may load from its own config file.
/// Defaults reproduce the stock behavior; nothing here persists between
/// requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Timeout applied to every external command the engine runs.
    pub command_timeout_ms: u64,
    /// Override of the desktop-entry directories; `None` scans the
    /// standard system-wide locations followed by the user-local one.
    pub desktop_entry_dirs: Option<Vec<PathBuf>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: 5_000,
            desktop_entry_dirs: None,
        }
    }
}

impl EngineConfig {
    /// Desktop-entry directories in scan order. Later directories win
    /// stem collisions, so the user-local directory comes last.
    pub fn desktop_dirs(&self) -> Vec<PathBuf> {
        if let Some(dirs) = &self.desktop_entry_dirs {
            return dirs.clone();
        }

        let mut dirs = vec![
            PathBuf::from("/usr/share/applications"),
            PathBuf::from("/usr/local/share/applications"),
        ];
        if let Ok(home) = std::env::var("HOME") {
            dirs.push(PathBuf::from(home).join(".local/share/applications"));
        }
        dirs
    }
}
