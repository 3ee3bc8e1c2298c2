//! Shared infrastructure for the campus paths HTTP service.
//!
//! This crate provides the HTTP glue around `campuspaths-lib`:
//!
//! - [`AppState`]: the campus map loaded once at startup and shared by handlers
//! - [`health`]: liveness and readiness handlers
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`ServiceResponse`] and the response bodies for each endpoint
//! - [`logging`]: JSON or text `tracing` output
//! - [`middleware`]: request id propagation
//! - Query types with validation for each endpoint
//!
//! Handlers stay thin: parse the query, validate it, call the library, and
//! shape the response. Route search and rendering live in `campuspaths-lib`.
//!
//! # Testing Support
//!
//! The [`test_utils`] module loads the fixture campus once per process.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{
    extract_or_generate_request_id, RequestId, RequestIdLayer, REQUEST_ID_HEADER,
};
pub use problem::{
    ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST, PROBLEM_ROUTE_NOT_FOUND,
    PROBLEM_UNKNOWN_BUILDING,
};
pub use request::{RouteQuery, Validate};
pub use response::{
    BuildingEntry, BuildingsResponse, LegacyBuilding, LegacyEdge, RouteEdge, RouteResponse,
    ServiceResponse,
};
pub use state::{AppState, AppStateError};
