// Test utilities used across `campuspaths-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use campuspaths_lib::{Building, CampusMap, Coordinates, Graph};

/// Three buildings: SCI walks east to a corner then north to UNI; LIB is one
/// step west of UNI.
pub fn sample_map() -> CampusMap {
    let sci = Coordinates::new(0.0, 100.0);
    let corner = Coordinates::new(60.0, 100.0);
    let uni = Coordinates::new(60.0, 20.0);
    let lib = Coordinates::new(10.0, 20.0);

    let mut graph = Graph::new();
    for node in [sci, corner, uni, lib] {
        graph.ensure_node(node);
    }
    for (from, to, distance) in [
        (sci, corner, 60.0),
        (corner, uni, 80.0),
        (lib, uni, 50.0),
        (uni, lib, 50.0),
    ] {
        graph.add_edge(from, to, distance).expect("valid test edge");
    }

    CampusMap::new(
        graph,
        vec![
            Building::new("UNI", "Union Building", uni),
            Building::new("SCI", "Science Hall", sci),
            Building::new("LIB", "Main Library", lib),
        ],
    )
}
