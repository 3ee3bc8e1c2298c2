use serde::Serialize;

use crate::campus::{Building, CampusMap, Coordinates};
use crate::direction::Direction;
use crate::routing::PathResult;

/// Classifies how a route query ended.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Found,
    UnknownBuilding,
    NoPath,
}

/// Endpoint building of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub short_name: String,
    pub long_name: String,
    pub location: Coordinates,
}

impl RouteEndpoint {
    fn for_name(map: &CampusMap, name: &str, location: Coordinates) -> Self {
        match map.building(name) {
            Some(Building {
                short_name,
                long_name,
                ..
            }) => Self {
                short_name: short_name.clone(),
                long_name: long_name.clone(),
                location,
            },
            None => Self {
                short_name: name.to_string(),
                long_name: name.to_string(),
                location,
            },
        }
    }
}

/// Single walking step of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub from: Coordinates,
    pub to: Coordinates,
    pub distance: f64,
    pub direction: Direction,
}

/// Structured representation of a route query that consumers can render or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub status: RouteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<RouteEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<RouteEndpoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<String>,
    pub steps: Vec<RouteStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
}

impl RouteSummary {
    /// Describe the outcome of `map.find_path(start_name, destination_name)`.
    pub fn from_result(
        map: &CampusMap,
        start_name: &str,
        destination_name: &str,
        result: &PathResult<Coordinates>,
    ) -> Self {
        match result {
            PathResult::Unresolved { start, destination } => {
                let mut unknown: Vec<String> = start.iter().cloned().collect();
                if let Some(name) = destination {
                    if !unknown.contains(name) {
                        unknown.push(name.clone());
                    }
                }
                Self {
                    status: RouteStatus::UnknownBuilding,
                    start: None,
                    destination: None,
                    unknown,
                    steps: Vec::new(),
                    total_distance: None,
                }
            }
            PathResult::NoPath { start, destination } => Self {
                status: RouteStatus::NoPath,
                start: Some(RouteEndpoint::for_name(map, start_name, *start)),
                destination: Some(RouteEndpoint::for_name(map, destination_name, *destination)),
                unknown: Vec::new(),
                steps: Vec::new(),
                total_distance: None,
            },
            PathResult::AlreadyThere { node } => Self {
                status: RouteStatus::Found,
                start: Some(RouteEndpoint::for_name(map, start_name, *node)),
                destination: Some(RouteEndpoint::for_name(map, destination_name, *node)),
                unknown: Vec::new(),
                steps: Vec::new(),
                total_distance: Some(0.0),
            },
            PathResult::Found {
                start,
                destination,
                path,
            } => {
                let steps = path
                    .edges()
                    .iter()
                    .enumerate()
                    .map(|(index, edge)| RouteStep {
                        index,
                        from: *edge.start(),
                        to: *edge.destination(),
                        distance: edge.weight(),
                        direction: Direction::of_edge(edge),
                    })
                    .collect();
                Self {
                    status: RouteStatus::Found,
                    start: Some(RouteEndpoint::for_name(map, start_name, *start)),
                    destination: Some(RouteEndpoint::for_name(map, destination_name, *destination)),
                    unknown: Vec::new(),
                    steps,
                    total_distance: Some(path.cost()),
                }
            }
        }
    }

    /// Text lines describing the route, one step per line.
    pub fn lines(&self) -> Vec<String> {
        match self.status {
            RouteStatus::UnknownBuilding => self
                .unknown
                .iter()
                .map(|name| format!("Unknown building: {name}"))
                .collect(),
            RouteStatus::NoPath => vec![format!(
                "No path found from {} to {}",
                self.start_name(),
                self.destination_name()
            )],
            RouteStatus::Found => {
                let mut lines = Vec::with_capacity(self.steps.len() + 2);
                lines.push(format!(
                    "Path from {} to {}:",
                    self.start_name(),
                    self.destination_name()
                ));
                for step in &self.steps {
                    lines.push(format!(
                        "\tWalk {} feet {} to ({}, {})",
                        rounded(step.distance),
                        step.direction,
                        rounded(step.to.x()),
                        rounded(step.to.y())
                    ));
                }
                lines.push(format!(
                    "Total distance: {} feet",
                    rounded(self.total_distance.unwrap_or_default())
                ));
                lines
            }
        }
    }

    /// Render the summary as newline-terminated plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        for line in self.lines() {
            buffer.push_str(&line);
            buffer.push('\n');
        }
        buffer
    }

    fn start_name(&self) -> &str {
        self.start
            .as_ref()
            .map(|endpoint| endpoint.long_name.as_str())
            .unwrap_or("<unknown>")
    }

    fn destination_name(&self) -> &str {
        self.destination
            .as_ref()
            .map(|endpoint| endpoint.long_name.as_str())
            .unwrap_or("<unknown>")
    }
}

/// Round half away from zero and print without a fractional part.
fn rounded(value: f64) -> String {
    let value = value.round();
    // Avoid printing "-0".
    format!("{:.0}", value + 0.0)
}
