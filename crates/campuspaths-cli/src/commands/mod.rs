// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod buildings;
pub mod interactive;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use campuspaths_lib::{load_campus_map, resolve_dataset, CampusMap};

/// Locate and load the campus dataset.
pub fn load_map(data_dir: Option<&Path>) -> Result<CampusMap> {
    let paths = resolve_dataset(data_dir).context("failed to locate the campus dataset")?;
    load_campus_map(&paths).with_context(|| {
        format!(
            "failed to load campus dataset from {} and {}",
            paths.buildings.display(),
            paths.paths.display()
        )
    })
}
