//! Buildings command handler.

use std::io::Write;

use anyhow::{Context, Result};

use campuspaths_lib::CampusMap;

use crate::output::render_buildings;

/// Handle the buildings subcommand.
pub fn handle_buildings_command<W: Write>(map: &CampusMap, out: &mut W) -> Result<()> {
    render_buildings(map, out).context("failed to write building list")
}
