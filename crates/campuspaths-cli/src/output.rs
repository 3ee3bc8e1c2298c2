//! Output formatting for route and building listings.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campuspaths_lib::{CampusMap, RouteSummary};

/// Number of alternative names offered for an unknown building.
pub const SUGGESTION_LIMIT: usize = 3;

/// Supported output formats for the route command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable walking directions.
    #[default]
    Text,
    /// Structured JSON for scripting.
    Json,
}

/// JSON payload: the route summary plus name suggestions for unknown buildings.
#[derive(Debug, Serialize)]
pub struct RouteJson<'a> {
    #[serde(flatten)]
    pub summary: &'a RouteSummary,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub suggestions: BTreeMap<String, Vec<String>>,
}

impl<'a> RouteJson<'a> {
    pub fn new(map: &CampusMap, summary: &'a RouteSummary) -> Self {
        let suggestions = summary
            .unknown
            .iter()
            .map(|name| (name.clone(), map.suggest_buildings(name, SUGGESTION_LIMIT)))
            .filter(|(_, names)| !names.is_empty())
            .collect();
        Self {
            summary,
            lines: summary.lines(),
            suggestions,
        }
    }
}

/// Render a route summary as walking directions.
pub fn render_text<W: Write>(summary: &RouteSummary, out: &mut W) -> io::Result<()> {
    out.write_all(summary.render_plain().as_bytes())
}

/// Render a route summary in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<W: Write>(
    map: &CampusMap,
    summary: &RouteSummary,
    out: &mut W,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &RouteJson::new(map, summary))
        .map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Print every building as `\t<short>: <long>`, ordered by short name.
pub fn render_buildings<W: Write>(map: &CampusMap, out: &mut W) -> io::Result<()> {
    writeln!(out, "Buildings:")?;
    for building in map.buildings() {
        writeln!(out, "\t{}: {}", building.short_name, building.long_name)?;
    }
    Ok(())
}
