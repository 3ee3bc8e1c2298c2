//! Application state for the HTTP service.
//!
//! The campus map is loaded once at startup and shared read-only by every
//! handler.

use std::path::Path;
use std::sync::Arc;

use campuspaths_lib::{load_campus_map, resolve_dataset, CampusMap, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The dataset files could not be located.
    DatasetNotFound(LibError),

    /// The dataset files exist but could not be parsed.
    DatasetLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetNotFound(e) => write!(f, "campus dataset not found: {}", e),
            Self::DatasetLoad(e) => write!(f, "failed to load campus dataset: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetNotFound(e) | Self::DatasetLoad(e) => Some(e),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; share it via axum's `State` extractor.
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use campuspaths_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let buildings = state.map().buildings();
/// }
///
/// let state = AppState::load(None).unwrap();
/// let app = Router::new()
///     .route("/api/v1/buildings", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    map: CampusMap,
}

impl AppState {
    /// Load the campus dataset.
    ///
    /// `data_dir` overrides the default lookup (`CAMPUSPATHS_DATA_DIR`, then
    /// the platform data directory).
    pub fn load(data_dir: Option<&Path>) -> Result<Self, AppStateError> {
        let paths = resolve_dataset(data_dir).map_err(AppStateError::DatasetNotFound)?;

        tracing::info!(
            buildings = %paths.buildings.display(),
            paths = %paths.paths.display(),
            "loading campus dataset"
        );
        let map = load_campus_map(&paths).map_err(AppStateError::DatasetLoad)?;

        Ok(Self::from_map(map))
    }

    /// Wrap an already loaded map.
    pub fn from_map(map: CampusMap) -> Self {
        Self {
            inner: Arc::new(AppStateInner { map }),
        }
    }

    pub fn map(&self) -> &CampusMap {
        &self.inner.map
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("building_count", &self.inner.map.buildings().len())
            .field("node_count", &self.inner.map.graph().node_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuspaths_lib::{Building, Coordinates, Graph};

    fn tiny_map() -> CampusMap {
        let location = Coordinates::new(1.0, 2.0);
        let mut graph = Graph::new();
        graph.ensure_node(location);
        CampusMap::new(graph, vec![Building::new("ONE", "Only Hall", location)])
    }

    #[test]
    fn test_app_state_from_map() {
        let state = AppState::from_map(tiny_map());
        assert_eq!(state.map().buildings().len(), 1);
        assert!(state.map().building("Only Hall").is_some());
    }

    #[test]
    fn test_app_state_clone_shares_map() {
        let first = AppState::from_map(tiny_map());
        let second = first.clone();
        assert!(std::ptr::eq(first.map(), second.map()));
    }

    #[test]
    fn test_app_state_debug() {
        let debug = format!("{:?}", AppState::from_map(tiny_map()));
        assert!(debug.contains("building_count: 1"));
        assert!(debug.contains("node_count: 1"));
    }

    #[test]
    fn test_app_state_load_missing_directory() {
        let result = AppState::load(Some(Path::new("/nonexistent/campus/data")));
        match result.unwrap_err() {
            AppStateError::DatasetNotFound(LibError::DatasetNotFound { path }) => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
