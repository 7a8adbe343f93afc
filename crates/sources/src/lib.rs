//! Application discovery across the three Linux packaging systems.
//!
//! Each reader is best-effort and read-only: a missing tool, a timed-out
//! query, or an absent directory contributes zero entries and never fails
//! the request.

pub mod desktop;
pub mod flatpak;
pub mod snap;

use openapp_core::{Catalog, EngineConfig};
use openapp_executor::CommandRunner;

/// Scan all three sources concurrently and merge them into one catalog.
/// The merge waits for every reader; precedence on id collision is
/// Flatpak < Snap < Desktop.
pub async fn discover(config: &EngineConfig, runner: &CommandRunner) -> Catalog {
    let dirs = config.desktop_dirs();
    let (flatpak, snap, desktop) = tokio::join!(
        flatpak::installed_apps(runner),
        snap::installed_snaps(runner),
        desktop::desktop_entries(&dirs),
    );

    let catalog = Catalog::merge(flatpak, snap, desktop);
    tracing::info!("Discovered {} applications", catalog.len());
    catalog
}
