//! Route command handler for walking directions between two buildings.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use campuspaths_lib::{CampusMap, RouteSummary};

use crate::output::{render_json, render_text, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting building, short or long name.
    pub from: String,
    /// Destination building, short or long name.
    pub to: String,
    pub format: OutputFormat,
}

/// Handle the route subcommand.
///
/// Unknown buildings and unreachable destinations are reported in the output
/// and are not errors.
pub fn handle_route_command<W: Write>(
    map: &CampusMap,
    args: &RouteCommandArgs,
    out: &mut W,
) -> Result<()> {
    let result = map.find_path(&args.from, &args.to);
    let summary = RouteSummary::from_result(map, &args.from, &args.to, &result);
    debug!(status = ?summary.status, steps = summary.steps.len(), "route computed");

    match args.format {
        OutputFormat::Text => render_text(&summary, out),
        OutputFormat::Json => render_json(map, &summary, out),
    }
    .context("failed to write route output")
}
