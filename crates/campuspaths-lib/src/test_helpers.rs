// Test-only helpers for `campuspaths-lib` tests
#![allow(dead_code)]

use crate::campus::{Building, CampusMap, Coordinates};
use crate::graph::Graph;

/// Builder to create small campus maps in tests.
pub struct CampusMapBuilder {
    graph: Graph<Coordinates>,
    buildings: Vec<Building>,
}

impl CampusMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            buildings: Vec::new(),
        }
    }

    pub fn building(mut self, short: &str, long: &str, x: f64, y: f64) -> Self {
        let location = Coordinates::new(x, y);
        self.graph.ensure_node(location);
        self.buildings.push(Building::new(short, long, location));
        self
    }

    pub fn path(mut self, from: (f64, f64), to: (f64, f64), distance: f64) -> Self {
        let from = Coordinates::new(from.0, from.1);
        let to = Coordinates::new(to.0, to.1);
        self.graph.ensure_node(from);
        self.graph.ensure_node(to);
        self.graph
            .add_edge(from, to, distance)
            .expect("valid test edge");
        self
    }

    pub fn build(self) -> CampusMap {
        CampusMap::new(self.graph, self.buildings)
    }
}

impl Default for CampusMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A(0,0) -> B(3,0) -> C(3,-4) with a costlier direct A -> C edge.
pub fn triangle_map() -> CampusMap {
    CampusMapBuilder::new()
        .building("A", "Alpha Hall", 0.0, 0.0)
        .building("B", "Beta Hall", 3.0, 0.0)
        .building("C", "Gamma Hall", 3.0, -4.0)
        .building("X", "Island Hall", 50.0, 50.0)
        .path((0.0, 0.0), (3.0, 0.0), 3.0)
        .path((3.0, 0.0), (3.0, -4.0), 5.0)
        .path((0.0, 0.0), (3.0, -4.0), 10.0)
        .build()
}
