use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::error::Result;
use crate::graph::{Edge, Graph};

/// Ordered sequence of edges where each edge starts at the previous edge's
/// destination. An empty path means the walk starts at its destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    edges: Vec<Edge<N>>,
}

impl<N: PartialEq> Path<N> {
    /// Path that does not move.
    pub fn empty() -> Self {
        Self { edges: Vec::new() }
    }

    /// Build a path from contiguous edges.
    pub fn from_edges(edges: Vec<Edge<N>>) -> Self {
        debug_assert!(
            edges
                .windows(2)
                .all(|pair| pair[0].destination() == pair[1].start()),
            "path edges must be contiguous"
        );
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<N>> {
        self.edges
    }

    /// Sum of the edge weights.
    pub fn cost(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Number of edges walked.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Find the least-cost path from `start` to `goal`.
///
/// Both nodes must be part of the graph. Returns `Ok(None)` when `goal`
/// cannot be reached. Among equal-cost candidates the search prefers fewer
/// edges, then the smaller reached node, then the candidate discovered first,
/// so repeated calls on the same graph return the same path.
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<Option<Path<N>>>
where
    N: Eq + Hash + Clone + Ord + fmt::Display,
{
    let seeds = graph.edges_from(start)?;
    graph.edges_from(goal)?;

    if start == goal {
        return Ok(Some(Path::empty()));
    }

    // Settled nodes mapped to the edge their least-cost path arrived by.
    let mut settled: HashMap<N, Option<Edge<N>>> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence: u64 = 0;

    settled.insert(start.clone(), None);
    for edge in seeds {
        frontier.push(FrontierEntry::new(edge.clone(), edge.weight(), 1, sequence));
        sequence += 1;
    }

    while let Some(entry) = frontier.pop() {
        let reached = entry.via.destination().clone();

        if reached == *goal {
            trace!(settled = settled.len(), cost = entry.cost.0, "goal reached");
            return Ok(Some(reconstruct_path(&settled, entry.via)));
        }

        if settled.contains_key(&reached) {
            continue;
        }

        for edge in graph.edges_from(&reached)? {
            if settled.contains_key(edge.destination()) {
                continue;
            }
            frontier.push(FrontierEntry::new(
                edge.clone(),
                entry.cost.0 + edge.weight(),
                entry.hops + 1,
                sequence,
            ));
            sequence += 1;
        }
        settled.insert(reached, Some(entry.via));
    }

    Ok(None)
}

fn reconstruct_path<N>(settled: &HashMap<N, Option<Edge<N>>>, last: Edge<N>) -> Path<N>
where
    N: Eq + Hash + Clone,
{
    let mut edges = Vec::new();
    let mut current = Some(last);
    while let Some(edge) = current {
        current = settled.get(edge.start()).cloned().flatten();
        edges.push(edge);
    }
    edges.reverse();
    Path::from_edges(edges)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Candidate path on the frontier, identified by the edge that extends it.
#[derive(Clone, Debug)]
struct FrontierEntry<N> {
    via: Edge<N>,
    cost: FloatOrd,
    hops: usize,
    sequence: u64,
}

impl<N> FrontierEntry<N> {
    fn new(via: Edge<N>, cost: f64, hops: usize, sequence: u64) -> Self {
        Self {
            via,
            cost: FloatOrd(cost),
            hops,
            sequence,
        }
    }
}

impl<N: Ord> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.via.destination().cmp(self.via.destination()))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N: Ord> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for FrontierEntry<N> {}
