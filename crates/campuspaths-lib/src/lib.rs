//! Campus paths library entry points.
//!
//! This crate exposes a generic weighted multigraph, a least-cost path search
//! over it, and the campus model built on top: buildings, planar coordinates,
//! compass directions, dataset loading, and route rendering. Higher-level
//! consumers (CLI, HTTP service) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod direction;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use campus::{Building, CampusMap, Coordinates};
pub use dataset::{load_campus_map, resolve_dataset, DatasetPaths};
pub use direction::Direction;
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use output::{RouteEndpoint, RouteStatus, RouteStep, RouteSummary};
pub use path::{shortest_path, Path};
pub use routing::{find_path, NodeResolver, PathResult};
