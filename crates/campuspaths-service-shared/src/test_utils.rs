//! Test fixtures for handler testing.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Directory holding the fixture campus dataset.
pub const TEST_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures");

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared `AppState` loaded once from the fixture dataset.
///
/// # Panics
///
/// Panics if the fixture dataset cannot be loaded.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let dir = fixture_dir();
            AppState::load(Some(&dir))
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", dir, e))
        })
        .clone()
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_DIR)
}

/// Building names present in the fixture dataset.
pub mod fixture_buildings {
    /// Paul G. Allen Center.
    pub const CSE: &str = "CSE";

    pub const SUZZALLO: &str = "Suzzallo Library";

    pub const RAITT: &str = "RAI";

    /// Linked only to an isolated walkway; no route reaches it.
    pub const TOWER: &str = "TWR";
}
