use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::routing::{find_path, NodeResolver, PathResult};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Planar map position in campus map pixels (y grows downwards).
///
/// Equality is exact on both axes. Negative zero is folded into positive zero
/// on construction so that equal values hash identically.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    x: f64,
    y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Named location on campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub location: Coordinates,
}

impl Building {
    pub fn new(
        short_name: impl Into<String>,
        long_name: impl Into<String>,
        location: Coordinates,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: long_name.into(),
            location,
        }
    }

    /// Case-sensitive match against either the short or the long name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.short_name == name || self.long_name == name
    }
}

/// Walkable campus paths together with the building directory.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    graph: Graph<Coordinates>,
    buildings: Vec<Building>,
    name_index: HashMap<String, usize>,
}

impl CampusMap {
    /// Assemble a map; buildings are kept sorted by short name.
    pub fn new(graph: Graph<Coordinates>, mut buildings: Vec<Building>) -> Self {
        buildings.sort_by(|a, b| a.short_name.cmp(&b.short_name));

        let mut name_index = HashMap::new();
        for (index, building) in buildings.iter().enumerate() {
            name_index
                .entry(building.short_name.clone())
                .or_insert(index);
            name_index.entry(building.long_name.clone()).or_insert(index);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            buildings = buildings.len(),
            "campus map assembled"
        );

        Self {
            graph,
            buildings,
            name_index,
        }
    }

    pub fn graph(&self) -> &Graph<Coordinates> {
        &self.graph
    }

    /// All buildings ordered by short name.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Lookup a building by its exact short or long name.
    pub fn building(&self, name: &str) -> Option<&Building> {
        self.name_index
            .get(name)
            .and_then(|&index| self.buildings.get(index))
    }

    /// Find the cheapest walk between two buildings named by short or long name.
    pub fn find_path(&self, start: &str, destination: &str) -> PathResult<Coordinates> {
        find_path(self, &self.graph, start, destination)
    }

    /// Building names resembling `name`, best match first.
    pub fn suggest_buildings(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .name_index
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

impl NodeResolver<Coordinates> for CampusMap {
    fn resolve(&self, name: &str) -> Option<Coordinates> {
        self.building(name).map(|building| building.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> CampusMap {
        let mut graph = Graph::new();
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 0.0);
        graph.add_node(a).unwrap();
        graph.add_node(b).unwrap();
        graph.add_edge(a, b, 3.0).unwrap();
        CampusMap::new(
            graph,
            vec![
                Building::new("PAR", "Parrington Hall", b),
                Building::new("CSE", "Paul G. Allen Center", a),
            ],
        )
    }

    #[test]
    fn negative_zero_equals_zero() {
        let a = Coordinates::new(-0.0, 1.0);
        let b = Coordinates::new(0.0, 1.0);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn buildings_are_sorted_and_resolved_by_either_name() {
        let map = sample_map();
        let names: Vec<_> = map.buildings().iter().map(|b| b.short_name.as_str()).collect();
        assert_eq!(names, vec!["CSE", "PAR"]);
        assert_eq!(map.building("Parrington Hall").unwrap().short_name, "PAR");
        assert_eq!(map.resolve("CSE"), Some(Coordinates::new(0.0, 0.0)));
        assert!(map.building("cse").is_none(), "lookup is case-sensitive");
    }

    #[test]
    fn suggestions_rank_close_names() {
        let map = sample_map();
        let suggestions = map.suggest_buildings("Parington Hall", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Parrington Hall"));
        assert!(map.suggest_buildings("zzzzzz", 3).is_empty());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, -4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
