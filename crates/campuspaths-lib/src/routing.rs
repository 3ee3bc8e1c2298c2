//! Name-based route queries over a weighted graph.
//!
//! Callers provide a [`NodeResolver`] that turns free-text names into graph
//! nodes; [`find_path`] resolves both endpoints and runs the least-cost search
//! from [`crate::path`]. Every expected outcome, including unknown names and
//! disconnected endpoints, is reported as a [`PathResult`] variant.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::graph::{Edge, Graph};
use crate::path::{shortest_path, Path};

/// Maps a human-readable identifier to a graph node.
pub trait NodeResolver<N> {
    /// Return the node named `name`, or `None` when nothing matches.
    fn resolve(&self, name: &str) -> Option<N>;
}

impl<N: Clone> NodeResolver<N> for HashMap<String, N> {
    fn resolve(&self, name: &str) -> Option<N> {
        self.get(name).cloned()
    }
}

/// Outcome of a name-based route query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult<N> {
    /// A least-cost path between two distinct nodes.
    Found {
        start: N,
        destination: N,
        path: Path<N>,
    },
    /// Both names resolved to the same node; the path is empty.
    AlreadyThere { node: N },
    /// At least one name did not resolve. Each field holds the unresolved name.
    Unresolved {
        start: Option<String>,
        destination: Option<String>,
    },
    /// Both names resolved but no sequence of edges connects them.
    NoPath { start: N, destination: N },
}

impl<N: PartialEq> PathResult<N> {
    /// The path walked, empty for trivial queries. `None` when no path exists.
    pub fn path(&self) -> Option<Path<N>>
    where
        N: Clone,
    {
        match self {
            PathResult::Found { path, .. } => Some(path.clone()),
            PathResult::AlreadyThere { .. } => Some(Path::empty()),
            _ => None,
        }
    }

    /// Edges of the resulting path, or an empty slice.
    pub fn edges(&self) -> &[Edge<N>] {
        match self {
            PathResult::Found { path, .. } => path.edges(),
            _ => &[],
        }
    }

    /// Total cost when a path (possibly empty) was found.
    pub fn cost(&self) -> Option<f64> {
        match self {
            PathResult::Found { path, .. } => Some(path.cost()),
            PathResult::AlreadyThere { .. } => Some(0.0),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, PathResult::Unresolved { .. })
    }
}

/// Resolve `start_name` and `destination_name` and search for the cheapest
/// path between them.
pub fn find_path<N, R>(
    resolver: &R,
    graph: &Graph<N>,
    start_name: &str,
    destination_name: &str,
) -> PathResult<N>
where
    N: Eq + Hash + Clone + Ord + fmt::Display,
    R: NodeResolver<N> + ?Sized,
{
    let (start, destination) = match (
        resolver.resolve(start_name),
        resolver.resolve(destination_name),
    ) {
        (Some(start), Some(destination)) => (start, destination),
        (start, destination) => {
            debug!(
                start = start_name,
                destination = destination_name,
                start_known = start.is_some(),
                destination_known = destination.is_some(),
                "unresolved route endpoint"
            );
            return PathResult::Unresolved {
                start: start.is_none().then(|| start_name.to_string()),
                destination: destination.is_none().then(|| destination_name.to_string()),
            };
        }
    };

    if start == destination {
        return PathResult::AlreadyThere { node: start };
    }

    let off_graph = [("start", &start), ("destination", &destination)]
        .into_iter()
        .find(|(_, node)| !graph.contains(node))
        .map(|(label, node)| (label, node.to_string()));
    if let Some((label, node)) = off_graph {
        warn!(endpoint = label, node = %node, "route endpoint is not on the path graph");
        return PathResult::NoPath { start, destination };
    }

    match shortest_path(graph, &start, &destination) {
        Ok(Some(path)) => {
            debug!(
                start = %start,
                destination = %destination,
                edges = path.len(),
                cost = path.cost(),
                "path found"
            );
            PathResult::Found {
                start,
                destination,
                path,
            }
        }
        Ok(None) => PathResult::NoPath { start, destination },
        Err(err) => {
            warn!(error = %err, "path search rejected endpoints");
            PathResult::NoPath { start, destination }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (HashMap<String, u32>, Graph<u32>) {
        let mut graph = Graph::new();
        for node in 1..=4 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(1, 2, 3.0).unwrap();
        graph.add_edge(2, 3, 5.0).unwrap();
        graph.add_edge(1, 3, 10.0).unwrap();

        let names = HashMap::from([
            ("one".to_string(), 1),
            ("uno".to_string(), 1),
            ("two".to_string(), 2),
            ("three".to_string(), 3),
            ("four".to_string(), 4),
            ("ghost".to_string(), 99),
        ]);
        (names, graph)
    }

    #[test]
    fn finds_least_cost_path() {
        let (names, graph) = fixture();
        let result = find_path(&names, &graph, "one", "three");
        assert_eq!(result.cost(), Some(8.0));
        assert_eq!(result.edges().len(), 2);
    }

    #[test]
    fn aliases_of_one_node_are_trivial() {
        let (names, graph) = fixture();
        let result = find_path(&names, &graph, "one", "uno");
        assert_eq!(result, PathResult::AlreadyThere { node: 1 });
        assert_eq!(result.cost(), Some(0.0));
        assert!(result.path().unwrap().is_empty());
    }

    #[test]
    fn unresolved_names_are_reported_independently() {
        let (names, graph) = fixture();
        assert_eq!(
            find_path(&names, &graph, "nope", "three"),
            PathResult::Unresolved {
                start: Some("nope".to_string()),
                destination: None,
            }
        );
        assert_eq!(
            find_path(&names, &graph, "one", "nada"),
            PathResult::Unresolved {
                start: None,
                destination: Some("nada".to_string()),
            }
        );
        let both = find_path(&names, &graph, "nope", "nada");
        assert!(both.is_unresolved());
        assert_eq!(both.cost(), None);
    }

    #[test]
    fn disconnected_or_off_graph_endpoints_have_no_path() {
        let (names, graph) = fixture();
        assert_eq!(
            find_path(&names, &graph, "one", "four"),
            PathResult::NoPath {
                start: 1,
                destination: 4
            }
        );
        assert!(matches!(
            find_path(&names, &graph, "one", "ghost"),
            PathResult::NoPath { .. }
        ));
    }
}
