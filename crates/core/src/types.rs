use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Packaging system an entry was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceOrigin {
    Desktop,
    Flatpak,
    Snap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Stable identifier usable for launching: desktop-entry stem,
    /// Flatpak application ID, or Snap package name.
    pub launcher_id: String,
    pub display_name: String,
    pub origin: SourceOrigin,
}

impl AppEntry {
    pub fn new(
        launcher_id: impl Into<String>,
        display_name: impl Into<String>,
        origin: SourceOrigin,
    ) -> Self {
        Self {
            launcher_id: launcher_id.into(),
            display_name: display_name.into(),
            origin,
        }
    }
}

/// Merged namespace of all discoverable applications for one request.
///
/// Keys are unique launcher ids; on collision only the highest-precedence
/// origin survives (Flatpak < Snap < Desktop).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, AppEntry>,
}

impl Catalog {
    /// Build the catalog by successive overwrite: Flatpak first, then Snap,
    /// then Desktop, so Desktop wins all key collisions.
    pub fn merge(
        flatpak: BTreeMap<String, String>,
        snap: BTreeMap<String, String>,
        desktop: BTreeMap<String, String>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for (origin, source) in [
            (SourceOrigin::Flatpak, flatpak),
            (SourceOrigin::Snap, snap),
            (SourceOrigin::Desktop, desktop),
        ] {
            for (id, name) in source {
                entries.insert(id.clone(), AppEntry::new(id, name, origin));
            }
        }
        Self { entries }
    }

    pub fn get(&self, launcher_id: &str) -> Option<&AppEntry> {
        self.entries.get(launcher_id)
    }

    /// Entries in ascending launcher-id order.
    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fuzzy suggestion with a normalized 0-100 similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub launcher_id: String,
    pub display_name: String,
    pub score: u8,
}

/// Terminal result of one resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    Launched {
        launcher_id: String,
        /// Original query when the target was fuzzy-corrected.
        matched_from: Option<String>,
    },
    LaunchFailed {
        launcher_id: String,
    },
    NotFound,
    Ambiguous {
        query: String,
        candidates: Vec<MatchCandidate>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_desktop_wins_collisions() {
        let catalog = Catalog::merge(
            map(&[("firefox", "Firefox (flatpak)")]),
            map(&[("firefox", "firefox")]),
            map(&[("firefox", "Firefox")]),
        );

        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("firefox").unwrap();
        assert_eq!(entry.display_name, "Firefox");
        assert_eq!(entry.origin, SourceOrigin::Desktop);
    }

    #[test]
    fn test_merge_snap_wins_over_flatpak() {
        let catalog = Catalog::merge(
            map(&[("spotify", "Spotify (flatpak)")]),
            map(&[("spotify", "spotify")]),
            map(&[]),
        );

        assert_eq!(catalog.get("spotify").unwrap().origin, SourceOrigin::Snap);
    }

    #[test]
    fn test_merge_keeps_non_colliding_entries() {
        let catalog = Catalog::merge(
            map(&[("org.gimp.GIMP", "GNU Image Manipulation Program")]),
            map(&[("spotify", "spotify")]),
            map(&[("firefox", "Firefox")]),
        );

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("org.gimp.GIMP").unwrap().origin,
            SourceOrigin::Flatpak
        );
    }

    #[test]
    fn test_merge_is_deterministic() {
        let build = || {
            Catalog::merge(
                map(&[("a", "1"), ("b", "2")]),
                map(&[("b", "3"), ("c", "4")]),
                map(&[("c", "5"), ("d", "6")]),
            )
        };
        let first: Vec<_> = build().iter().cloned().collect();
        let second: Vec<_> = build().iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_is_sorted_by_launcher_id() {
        let catalog = Catalog::merge(
            map(&[("zed", "Zed")]),
            map(&[]),
            map(&[("code", "Visual Studio Code"), ("firefox", "Firefox")]),
        );

        let ids: Vec<&str> = catalog.iter().map(|e| e.launcher_id.as_str()).collect();
        assert_eq!(ids, vec!["code", "firefox", "zed"]);
    }
}
