//! Response bodies for successful HTTP responses.

use serde::{Deserialize, Serialize};

use campuspaths_lib::{Building, Coordinates, Direction, RouteEndpoint, RouteSummary};

/// Wrapper for successful responses with content type metadata, mirroring
/// the `type` member of `ProblemDetails`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,

    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

/// One walked edge of a route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEdge {
    pub start: Coordinates,
    pub destination: Coordinates,
    pub distance: f64,
    pub direction: Direction,
}

/// Body of a successful `GET /api/v1/route`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub start: RouteEndpoint,
    pub destination: RouteEndpoint,
    pub edges: Vec<RouteEdge>,
    pub total_distance: f64,
    /// The same walking directions the CLI prints.
    pub lines: Vec<String>,
}

impl RouteResponse {
    /// Build the body from a summary; `None` unless a route was found.
    pub fn from_summary(summary: &RouteSummary) -> Option<Self> {
        let (Some(start), Some(destination), Some(total_distance)) = (
            summary.start.clone(),
            summary.destination.clone(),
            summary.total_distance,
        ) else {
            return None;
        };
        let edges = summary
            .steps
            .iter()
            .map(|step| RouteEdge {
                start: step.from,
                destination: step.to,
                distance: step.distance,
                direction: step.direction,
            })
            .collect();
        Some(Self {
            start,
            destination,
            edges,
            total_distance,
            lines: summary.lines(),
        })
    }
}

/// A building as listed by `GET /api/v1/buildings`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingEntry {
    pub short_name: String,
    pub long_name: String,
    pub location: Coordinates,
}

impl From<&Building> for BuildingEntry {
    fn from(building: &Building) -> Self {
        Self {
            short_name: building.short_name.clone(),
            long_name: building.long_name.clone(),
            location: building.location,
        }
    }
}

/// Route edge in the bare-array body of `GET /buildingLocation`.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyEdge {
    pub start: Coordinates,
    pub destination: Coordinates,
    pub label: f64,
}

impl From<&RouteEdge> for LegacyEdge {
    fn from(edge: &RouteEdge) -> Self {
        Self {
            start: edge.start,
            destination: edge.destination,
            label: edge.distance,
        }
    }
}

/// Building in the bare-array body of `GET /getBuildings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBuilding {
    pub short_name: String,
    pub long_name: String,
    pub location: Coordinates,
}

impl From<&Building> for LegacyBuilding {
    fn from(building: &Building) -> Self {
        Self {
            short_name: building.short_name.clone(),
            long_name: building.long_name.clone(),
            location: building.location,
        }
    }
}

/// Body of `GET /api/v1/buildings`, ordered by short name.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingsResponse {
    pub count: usize,
    pub buildings: Vec<BuildingEntry>,
}

impl BuildingsResponse {
    pub fn from_buildings(buildings: &[Building]) -> Self {
        Self {
            count: buildings.len(),
            buildings: buildings.iter().map(BuildingEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuspaths_lib::{CampusMap, Graph, RouteStatus};

    fn two_building_map() -> CampusMap {
        let west = Coordinates::new(0.0, 0.0);
        let east = Coordinates::new(10.0, 0.0);
        let mut graph = Graph::new();
        graph.ensure_node(west);
        graph.ensure_node(east);
        graph.add_edge(west, east, 10.0).unwrap();
        CampusMap::new(
            graph,
            vec![
                Building::new("WST", "West Hall", west),
                Building::new("EST", "East Hall", east),
            ],
        )
    }

    fn summary(map: &CampusMap, start: &str, end: &str) -> RouteSummary {
        RouteSummary::from_result(map, start, end, &map.find_path(start, end))
    }

    #[test]
    fn test_route_response_from_found_summary() {
        let map = two_building_map();
        let response = RouteResponse::from_summary(&summary(&map, "WST", "EST")).unwrap();

        assert_eq!(response.start.long_name, "West Hall");
        assert_eq!(response.edges.len(), 1);
        assert_eq!(response.edges[0].direction, Direction::E);
        assert_eq!(response.total_distance, 10.0);
        assert_eq!(response.lines.last().unwrap(), "Total distance: 10 feet");
    }

    #[test]
    fn test_route_response_requires_a_route() {
        let map = two_building_map();
        let no_path = summary(&map, "EST", "WST");
        assert_eq!(no_path.status, RouteStatus::NoPath);
        assert!(RouteResponse::from_summary(&no_path).is_none());
        assert!(RouteResponse::from_summary(&summary(&map, "X", "EST")).is_none());
    }

    #[test]
    fn test_buildings_response_keeps_map_order() {
        let map = two_building_map();
        let response = BuildingsResponse::from_buildings(map.buildings());
        let json = serde_json::to_value(ServiceResponse::new(response)).unwrap();

        assert_eq!(json["count"], 2);
        assert_eq!(json["buildings"][0]["short_name"], "EST");
        assert_eq!(json["buildings"][1]["location"]["x"], 0.0);
        assert_eq!(json["content_type"], "application/json");
    }

    #[test]
    fn test_legacy_bodies_use_camel_case_and_label() {
        let map = two_building_map();
        let response = RouteResponse::from_summary(&summary(&map, "WST", "EST")).unwrap();
        let edges: Vec<LegacyEdge> = response.edges.iter().map(LegacyEdge::from).collect();
        let json = serde_json::to_value(&edges).unwrap();
        assert_eq!(json[0]["start"]["x"], 0.0);
        assert_eq!(json[0]["destination"]["x"], 10.0);
        assert_eq!(json[0]["label"], 10.0);

        let building = serde_json::to_value(LegacyBuilding::from(&map.buildings()[0])).unwrap();
        assert_eq!(building["shortName"], "EST");
        assert_eq!(building["longName"], "East Hall");
        assert!(building.get("short_name").is_none());
    }
}
