//! CLI command implementations.

pub mod add;
pub mod chart;
pub mod list;
pub mod menu;
pub mod remove;
pub mod render;
pub mod sort;

use peopledb_core::{load_with_report, CoreResult, PeopleStore, StoreConfig};
use std::path::Path;
use tracing::{debug, warn};

/// Loads the data file, or starts an empty store if it does not exist yet.
pub fn open_or_create(path: &Path) -> CoreResult<PeopleStore> {
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, starting empty");
        return PeopleStore::new();
    }
    open(path)
}

/// Loads the data file, warning about lines that were skipped.
pub fn open(path: &Path) -> CoreResult<PeopleStore> {
    let (store, report) = load_with_report(path, StoreConfig::default())?;
    if report.skipped() > 0 {
        warn!(
            path = %path.display(),
            malformed = report.malformed,
            rejected = report.rejected,
            "skipped lines while loading"
        );
    }
    Ok(store)
}
