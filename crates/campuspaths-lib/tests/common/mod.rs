//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use campuspaths_lib::{load_campus_map, CampusMap, DatasetPaths};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the checked-in fixture campus.
#[allow(dead_code)]
pub fn fixture_map() -> CampusMap {
    load_campus_map(&DatasetPaths::in_dir(&fixtures_dir())).expect("fixture dataset loads")
}
