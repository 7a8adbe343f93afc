//! Query resolution against the merged application catalog.

pub mod scoring;

use openapp_core::{AppEntry, Catalog, MatchCandidate};

/// Fuzzy score at or above which the top candidate is accepted without
/// asking the user. Hard cutoff: 79 disambiguates, 80 launches.
pub const AUTO_ACCEPT_SCORE: u8 = 80;

/// Maximum ranked suggestions returned for an ambiguous query.
pub const MAX_CANDIDATES: usize = 5;

/// Maximum entries shown by the no-query catalog listing.
pub const LISTING_LIMIT: usize = 15;

pub const NO_APPS_HINT: &str =
    "No applications found. Try common names like 'firefox', 'code', 'nautilus'.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Query equals a launcher id (case-insensitively); fuzzy was bypassed.
    Exact(AppEntry),
    /// Top fuzzy candidate cleared the auto-accept cutoff.
    Fuzzy { entry: AppEntry, score: u8 },
    /// Ranked suggestions, best first; nothing will be launched.
    Ambiguous(Vec<MatchCandidate>),
    NotFound,
}

pub fn resolve(query: &str, catalog: &Catalog) -> Resolution {
    if catalog.is_empty() {
        return Resolution::NotFound;
    }

    let key = query.trim().to_lowercase();

    if let Some(entry) = catalog.iter().find(|e| e.launcher_id.to_lowercase() == key) {
        tracing::debug!("Exact match for '{}': {}", key, entry.launcher_id);
        return Resolution::Exact(entry.clone());
    }

    let mut candidates: Vec<MatchCandidate> = catalog
        .iter()
        .map(|entry| MatchCandidate {
            launcher_id: entry.launcher_id.clone(),
            display_name: entry.display_name.clone(),
            score: scoring::similarity(&key, &entry.launcher_id.to_lowercase()),
        })
        .collect();

    // Stable sort keeps equal scores in catalog (alphabetical) order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_CANDIDATES);

    match candidates.first() {
        Some(top) if top.score >= AUTO_ACCEPT_SCORE => match catalog.get(&top.launcher_id) {
            Some(entry) => {
                tracing::debug!(
                    "Fuzzy match for '{}': {} ({}%)",
                    key,
                    entry.launcher_id,
                    top.score
                );
                Resolution::Fuzzy {
                    entry: entry.clone(),
                    score: top.score,
                }
            }
            None => Resolution::Ambiguous(candidates),
        },
        Some(_) => Resolution::Ambiguous(candidates),
        None => Resolution::NotFound,
    }
}

/// Alphabetical `"id (name)"` listing capped at [`LISTING_LIMIT`] lines,
/// with an overflow count when the catalog is larger.
pub fn listing(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return NO_APPS_HINT.to_string();
    }

    let total = catalog.len();
    let lines: Vec<String> = catalog
        .iter()
        .take(LISTING_LIMIT)
        .map(|entry| format!("{} ({})", entry.launcher_id, entry.display_name))
        .collect();

    let mut text = format!(
        "Available applications ({} shown):\n{}",
        lines.len(),
        lines.join("\n")
    );
    if total > LISTING_LIMIT {
        text.push_str(&format!("\n... and {} more", total - LISTING_LIMIT));
    }
    text
}
