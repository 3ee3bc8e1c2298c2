use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Directed, weighted connection between two nodes.
///
/// Edges are immutable once created. Two edges are equal when start,
/// destination, and weight all match exactly.
#[derive(Debug, Clone)]
pub struct Edge<N> {
    start: N,
    destination: N,
    weight: f64,
}

impl<N> Edge<N> {
    /// Node the edge leaves from.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Node the edge arrives at.
    pub fn destination(&self) -> &N {
        &self.destination
    }

    /// Physical length of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<N: PartialEq> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.destination == other.destination
            && self.weight == other.weight
    }
}

// Weights are validated finite on insertion, so equality is reflexive.
impl<N: Eq> Eq for Edge<N> {}

/// Mutable directed multigraph mapping each node to its outgoing edges.
///
/// Several edges may connect the same ordered pair as long as their weights
/// differ. Every edge destination is itself a node of the graph: edges are
/// only accepted between existing nodes, removing a node drops the edges
/// pointing at it, and renaming a node rewrites every edge that references it.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<Edge<N>>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone + fmt::Display,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node without any outgoing edges.
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.adjacency.contains_key(&node) {
            return Err(Error::DuplicateNode {
                node: node.to_string(),
            });
        }
        self.adjacency.insert(node, Vec::new());
        self.check_rep();
        Ok(())
    }

    /// Insert `node` unless it is already present. Returns `true` on insertion.
    pub fn ensure_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        self.check_rep();
        true
    }

    /// Insert an edge between two existing nodes.
    ///
    /// Returns `Ok(false)` when an identical edge is already stored.
    pub fn add_edge(&mut self, start: N, destination: N, weight: f64) -> Result<bool> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        self.require_node(&start)?;
        self.require_node(&destination)?;

        let edge = Edge {
            start,
            destination,
            // Collapse -0.0 so equal weights compare and print the same.
            weight: weight + 0.0,
        };
        let edges = self
            .adjacency
            .get_mut(&edge.start)
            .ok_or_else(|| Error::UnknownNode {
                node: edge.start.to_string(),
            })?;
        if edges.contains(&edge) {
            return Ok(false);
        }
        edges.push(edge);
        self.check_rep();
        Ok(true)
    }

    /// Remove a node, its outgoing edges, and every edge that targets it.
    pub fn remove_node(&mut self, node: &N) -> Result<()> {
        if self.adjacency.remove(node).is_none() {
            return Err(Error::UnknownNode {
                node: node.to_string(),
            });
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.destination != *node);
        }
        self.check_rep();
        Ok(())
    }

    /// Remove the edge exactly matching `start`, `destination`, and `weight`.
    pub fn remove_edge(&mut self, start: &N, destination: &N, weight: f64) -> Result<()> {
        self.require_node(destination)?;
        let edges = self
            .adjacency
            .get_mut(start)
            .ok_or_else(|| Error::UnknownNode {
                node: start.to_string(),
            })?;
        let position = edges
            .iter()
            .position(|edge| edge.destination == *destination && edge.weight == weight)
            .ok_or_else(|| Error::EdgeNotFound {
                start: start.to_string(),
                destination: destination.to_string(),
                weight,
            })?;
        edges.remove(position);
        self.check_rep();
        Ok(())
    }

    /// Re-key `old` as `new`, rewriting every edge that references `old`.
    pub fn rename_node(&mut self, old: &N, new: N) -> Result<()> {
        if old == &new {
            return self.require_node(old);
        }
        if self.adjacency.contains_key(&new) {
            return Err(Error::NodeExists {
                from: old.to_string(),
                to: new.to_string(),
            });
        }
        let outgoing = self.adjacency.remove(old).ok_or_else(|| Error::UnknownNode {
            node: old.to_string(),
        })?;
        self.adjacency.insert(new.clone(), outgoing);

        for edge in self.adjacency.values_mut().flat_map(|edges| edges.iter_mut()) {
            if edge.start == *old {
                edge.start = new.clone();
            }
            if edge.destination == *old {
                edge.destination = new.clone();
            }
        }
        self.check_rep();
        Ok(())
    }

    /// Whether `node` is part of the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterate over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `node`, in insertion order.
    pub fn edges_from(&self, node: &N) -> Result<&[Edge<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownNode {
                node: node.to_string(),
            })
    }

    /// Destinations reachable in one step from `node` with the edge weight.
    pub fn children(&self, node: &N) -> Result<Vec<(&N, f64)>> {
        Ok(self
            .edges_from(node)?
            .iter()
            .map(|edge| (&edge.destination, edge.weight))
            .collect())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn require_node(&self, node: &N) -> Result<()> {
        if self.adjacency.contains_key(node) {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                node: node.to_string(),
            })
        }
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for (node, edges) in &self.adjacency {
            for edge in edges {
                assert!(edge.start == *node, "edge stored under a foreign start node");
                assert!(
                    self.adjacency.contains_key(&edge.destination),
                    "edge destination {} is not a node",
                    edge.destination
                );
                assert!(
                    edge.weight.is_finite() && edge.weight >= 0.0,
                    "edge weight {} out of range",
                    edge.weight
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_rep(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for node in ["a", "b", "c"] {
            graph.add_node(node).unwrap();
        }
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "c", 2.0).unwrap();
        graph.add_edge("c", "a", 3.0).unwrap();
        graph
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut graph = triangle();
        let err = graph.add_node("a").unwrap_err();
        assert!(matches!(err, Error::DuplicateNode { .. }));
        assert!(!graph.ensure_node("a"));
        assert!(graph.ensure_node("d"));
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn identical_edges_are_deduplicated_but_parallel_edges_kept() {
        let mut graph = triangle();
        assert!(!graph.add_edge("a", "b", 1.0).unwrap());
        assert!(graph.add_edge("a", "b", 4.5).unwrap());
        assert_eq!(graph.edges_from(&"a").unwrap().len(), 2);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn edges_require_both_endpoints() {
        let mut graph = triangle();
        let err = graph.add_edge("a", "z", 1.0).unwrap_err();
        assert!(matches!(err, Error::UnknownNode { node } if node == "z"));
        let err = graph.add_edge("z", "a", 1.0).unwrap_err();
        assert!(matches!(err, Error::UnknownNode { node } if node == "z"));
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let mut graph = triangle();
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                graph.add_edge("a", "b", weight),
                Err(Error::InvalidWeight { .. })
            ));
        }
        assert!(graph.add_edge("a", "c", 0.0).unwrap());
    }

    #[test]
    fn removing_node_drops_incoming_edges() {
        let mut graph = triangle();
        graph.remove_node(&"b").unwrap();
        assert!(!graph.contains(&"b"));
        assert!(graph.edges_from(&"a").unwrap().is_empty());
        assert_eq!(graph.edge_count(), 1);
        assert!(matches!(
            graph.remove_node(&"b"),
            Err(Error::UnknownNode { .. })
        ));
    }

    #[test]
    fn removing_edge_requires_exact_match() {
        let mut graph = triangle();
        let err = graph.remove_edge(&"a", &"b", 2.0).unwrap_err();
        assert!(matches!(err, Error::EdgeNotFound { .. }));
        graph.remove_edge(&"a", &"b", 1.0).unwrap();
        assert!(graph.edges_from(&"a").unwrap().is_empty());
    }

    #[test]
    fn rename_rewrites_all_references() {
        let mut graph = triangle();
        graph.rename_node(&"a", "alpha").unwrap();
        assert!(!graph.contains(&"a"));
        assert_eq!(graph.children(&"alpha").unwrap(), vec![(&"b", 1.0)]);
        assert_eq!(graph.children(&"c").unwrap(), vec![(&"alpha", 3.0)]);
        assert_eq!(*graph.edges_from(&"alpha").unwrap()[0].start(), "alpha");
    }

    #[test]
    fn rename_keeps_self_loops_and_edge_count() {
        let mut graph = Graph::new();
        graph.add_node("a").unwrap();
        graph.add_node("b").unwrap();
        graph.add_edge("a", "a", 1.0).unwrap();
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "a", 2.0).unwrap();

        graph.rename_node(&"a", "z").unwrap();
        assert_eq!(graph.edge_count(), 3);
        let children = graph.children(&"z").unwrap();
        assert!(children.contains(&(&"z", 1.0)));
        assert!(children.contains(&(&"b", 1.0)));
        assert_eq!(graph.children(&"b").unwrap(), vec![(&"z", 2.0)]);
    }

    #[test]
    fn rename_onto_existing_node_fails() {
        let mut graph = triangle();
        let err = graph.rename_node(&"a", "b").unwrap_err();
        assert!(matches!(err, Error::NodeExists { .. }));
        let err = graph.rename_node(&"missing", "x").unwrap_err();
        assert!(matches!(err, Error::UnknownNode { .. }));
    }

    #[test]
    fn edges_from_unknown_node_fails() {
        let graph = triangle();
        assert!(graph.edges_from(&"nope").is_err());
        let mut nodes: Vec<_> = graph.nodes().copied().collect();
        nodes.sort_unstable();
        assert_eq!(nodes, vec!["a", "b", "c"]);
    }
}
