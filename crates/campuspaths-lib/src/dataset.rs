//! Loading of the campus dataset.
//!
//! The dataset consists of two tab-separated files in one directory:
//!
//! - `campus_buildings.tsv`: `shortName  longName  x  y`
//! - `campus_paths.tsv`: `x1,y1  x2,y2  distance`
//!
//! Both files start with a header line, which is always skipped whatever it
//! contains. After it, lines beginning with `#` are comments, blank lines are
//! ignored, and quotation marks are stripped from
//! every field. Any malformed line aborts the load with
//! [`Error::DatasetFormat`]; no partially populated map is ever returned.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use directories::ProjectDirs;
use tracing::{debug, info};

use crate::campus::{Building, CampusMap, Coordinates};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Default filename for the building directory.
pub const BUILDINGS_FILENAME: &str = "campus_buildings.tsv";

/// Default filename for the walkable path segments.
pub const PATHS_FILENAME: &str = "campus_paths.tsv";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "CAMPUSPATHS_DATA_DIR";

const BUILDING_FIELDS: usize = 4;
const PATH_FIELDS: usize = 3;

/// Physical lines consumed before the record reader starts.
const HEADER_LINES: u64 = 1;

/// Locations of the dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub buildings: PathBuf,
    pub paths: PathBuf,
}

impl DatasetPaths {
    /// Dataset files with their default names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            buildings: dir.join(BUILDINGS_FILENAME),
            paths: dir.join(PATHS_FILENAME),
        }
    }

    fn ensure_exists(self) -> Result<Self> {
        for path in [&self.buildings, &self.paths] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(self)
    }
}

/// Resolve the default dataset directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("edu", "campuspaths", "campuspaths")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset files.
///
/// Resolution order:
/// 1. Explicit `target` directory when provided.
/// 2. `CAMPUSPATHS_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let dir = if let Some(explicit) = target {
        explicit.to_path_buf()
    } else if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        PathBuf::from(env_path)
    } else {
        default_data_dir()?
    };
    debug!(dir = %dir.display(), "resolved dataset directory");
    DatasetPaths::in_dir(&dir).ensure_exists()
}

/// Load buildings and paths and assemble the campus map.
pub fn load_campus_map(paths: &DatasetPaths) -> Result<CampusMap> {
    let buildings = load_buildings(&paths.buildings)?;
    let graph = load_paths(&paths.paths)?;
    info!(
        buildings = buildings.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "campus dataset loaded"
    );
    Ok(CampusMap::new(graph, buildings))
}

/// Load the building directory from a file.
pub fn load_buildings(path: &Path) -> Result<Vec<Building>> {
    let file = File::open(path)?;
    parse_buildings(file, path)
}

/// Load the walkable path graph from a file.
pub fn load_paths(path: &Path) -> Result<Graph<Coordinates>> {
    let file = File::open(path)?;
    parse_paths(file, path)
}

/// Parse building records. `source` is only used in error messages.
pub fn parse_buildings<R: Read>(reader: R, source: &Path) -> Result<Vec<Building>> {
    let mut buildings = Vec::new();
    for record in tsv_reader(reader)?.records() {
        let record = record?;
        let line = line_of(&record);
        let fields = fields(&record, BUILDING_FIELDS, source, line)?;
        let x = parse_number(&fields[2], "x coordinate", source, line)?;
        let y = parse_number(&fields[3], "y coordinate", source, line)?;
        buildings.push(Building::new(
            fields[0].clone(),
            fields[1].clone(),
            Coordinates::new(x, y),
        ));
    }
    Ok(buildings)
}

/// Parse path records into a graph. Every coordinate mentioned becomes a node.
pub fn parse_paths<R: Read>(reader: R, source: &Path) -> Result<Graph<Coordinates>> {
    let mut graph = Graph::new();
    for record in tsv_reader(reader)?.records() {
        let record = record?;
        let line = line_of(&record);
        let fields = fields(&record, PATH_FIELDS, source, line)?;
        let from = parse_coordinates(&fields[0], source, line)?;
        let to = parse_coordinates(&fields[1], source, line)?;
        let distance = parse_number(&fields[2], "distance", source, line)?;

        graph.ensure_node(from);
        graph.ensure_node(to);
        graph
            .add_edge(from, to, distance)
            .map_err(|err| format_error(source, line, err.to_string()))?;
    }
    Ok(graph)
}

/// Drop the header line, then read tab-separated records from the rest.
fn tsv_reader<R: Read>(reader: R) -> Result<csv::Reader<BufReader<R>>> {
    let mut reader = BufReader::new(reader);
    let mut header = Vec::new();
    reader.read_until(b'\n', &mut header)?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader))
}

/// Line number in the source file, counting the header.
fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default() + HEADER_LINES
}

fn fields(record: &StringRecord, expected: usize, source: &Path, line: u64) -> Result<Vec<String>> {
    if record.len() != expected {
        return Err(format_error(
            source,
            line,
            format!("expected {expected} tab-separated fields, found {}", record.len()),
        ));
    }
    Ok(record.iter().map(|field| field.replace('"', "")).collect())
}

fn parse_number(raw: &str, what: &str, source: &Path, line: u64) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format_error(source, line, format!("invalid {what} '{raw}': {err}")))?;
    if !value.is_finite() {
        return Err(format_error(source, line, format!("{what} '{raw}' is not finite")));
    }
    Ok(value)
}

fn parse_coordinates(raw: &str, source: &Path, line: u64) -> Result<Coordinates> {
    let Some((x, y)) = raw.split_once(',') else {
        return Err(format_error(
            source,
            line,
            format!("coordinate pair '{raw}' must look like 'x,y'"),
        ));
    };
    Ok(Coordinates::new(
        parse_number(x, "x coordinate", source, line)?,
        parse_number(y, "y coordinate", source, line)?,
    ))
}

fn format_error(source: &Path, line: u64, message: String) -> Error {
    Error::DatasetFormat {
        path: source.to_path_buf(),
        line,
        message,
    }
}
