//! Campus route finding HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/v1/route?start=<name>&end=<name>` - walking route between two buildings
//! - `GET /api/v1/buildings` - every building ordered by short name
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//! - `GET /buildingLocation?start=<name>&end=<name>` and `GET /getBuildings` -
//!   bare JSON arrays with camelCase fields for the original browser front end
//!
//! # Configuration
//!
//! - `CAMPUSPATHS_DATA_DIR` - directory with `campus_buildings.tsv` and `campus_paths.tsv`
//!   (default: the platform data directory)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `CORS_ALLOW_ORIGIN` - origin allowed to call the API from a browser (optional)

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use campuspaths_lib::{RouteStatus, RouteSummary};
use campuspaths_service_shared::{
    health_live, health_ready, init_logging, AppState, BuildingsResponse, LegacyBuilding,
    LegacyEdge, LoggingConfig, ProblemDetails, RequestId, RequestIdLayer, RouteQuery,
    RouteResponse, ServiceResponse, Validate,
};

/// Number of close building names offered for an unknown name.
const SUGGESTION_LIMIT: usize = 3;

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let cors_origin = env::var("CORS_ALLOW_ORIGIN").ok();

    info!(port = port, "starting route service");

    let state = AppState::load(None).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(
        buildings = state.map().buildings().len(),
        nodes = state.map().graph().node_count(),
        edges = state.map().graph().edge_count(),
        "application state loaded"
    );

    let app = app(state, cors_origin.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router. `cors_origin` enables browser access from that origin.
fn app(state: AppState, cors_origin: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/api/v1/route", get(route_handler))
        .route("/api/v1/buildings", get(buildings_handler))
        .route("/buildingLocation", get(legacy_route_handler))
        .route("/getBuildings", get(legacy_buildings_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if let Some(origin) = cors_origin {
        match HeaderValue::from_str(origin) {
            Ok(origin) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_methods([Method::GET]),
                );
            }
            Err(e) => warn!(origin, error = %e, "ignoring invalid CORS_ALLOW_ORIGIN"),
        }
    }

    router.layer(RequestIdLayer).with_state(state)
}

/// Handle GET /api/v1/route requests.
async fn route_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RouteQuery>,
) -> Response<RouteResponse> {
    match find_route(&state, &request_id, &query) {
        Ok(response) => Response::Success(ServiceResponse::new(response)),
        Err(problem) => Response::Error(problem),
    }
}

/// Handle GET /buildingLocation requests with a bare array of edges.
async fn legacy_route_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Vec<LegacyEdge>>, ProblemDetails> {
    let response = find_route(&state, &request_id, &query)?;
    Ok(Json(response.edges.iter().map(LegacyEdge::from).collect()))
}

/// Search the campus for `query`, or describe why no route is returned.
fn find_route(
    state: &AppState,
    request_id: &RequestId,
    query: &RouteQuery,
) -> Result<RouteResponse, ProblemDetails> {
    info!(start = %query.start, end = %query.end, "handling route request");

    query.validate(request_id.as_str()).map_err(|problem| *problem)?;

    let map = state.map();
    let result = map.find_path(&query.start, &query.end);
    let summary = RouteSummary::from_result(map, &query.start, &query.end, &result);

    match summary.status {
        RouteStatus::UnknownBuilding => {
            info!(unknown = ?summary.unknown, "unknown building in route request");
            Err(ProblemDetails::unknown_building(
                &summary.unknown,
                |name| map.suggest_buildings(name, SUGGESTION_LIMIT),
                request_id.as_str(),
            ))
        }
        RouteStatus::NoPath => {
            let (start, end) = match (&summary.start, &summary.destination) {
                (Some(start), Some(end)) => (start.long_name.as_str(), end.long_name.as_str()),
                _ => (query.start.as_str(), query.end.as_str()),
            };
            info!(start, end, "no walking route between buildings");
            Err(ProblemDetails::route_not_found(start, end, request_id.as_str()))
        }
        RouteStatus::Found => match RouteResponse::from_summary(&summary) {
            Some(response) => {
                info!(
                    edges = response.edges.len(),
                    total_distance = response.total_distance,
                    "route computed successfully"
                );
                Ok(response)
            }
            None => {
                error!("found route is missing its endpoints");
                Err(ProblemDetails::internal_error(
                    "Route summary is incomplete",
                    request_id.as_str(),
                ))
            }
        },
    }
}

/// Handle GET /api/v1/buildings requests.
async fn buildings_handler(State(state): State<AppState>) -> Response<BuildingsResponse> {
    let response = BuildingsResponse::from_buildings(state.map().buildings());
    Response::Success(ServiceResponse::new(response))
}

/// Handle GET /getBuildings requests with a bare array of buildings.
async fn legacy_buildings_handler(State(state): State<AppState>) -> Json<Vec<LegacyBuilding>> {
    Json(
        state
            .map()
            .buildings()
            .iter()
            .map(LegacyBuilding::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;
    use campuspaths_service_shared::test_utils::{fixture_buildings, test_state};
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(app(test_state(), None)).expect("test server")
    }

    #[tokio::test]
    async fn route_returns_edges_and_lines() {
        let response = server()
            .get("/api/v1/route")
            .add_query_param("start", fixture_buildings::CSE)
            .add_query_param("end", fixture_buildings::SUZZALLO)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["start"]["long_name"], "Paul G. Allen Center");
        assert_eq!(body["destination"]["short_name"], "SUZ");
        assert_eq!(body["edges"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["edges"][0]["direction"], "NW");
        assert_eq!(body["edges"][2]["destination"]["x"], 1876.0);
        assert_eq!(body["lines"][4], "Total distance: 622 feet");
        assert_eq!(body["content_type"], "application/json");
    }

    #[tokio::test]
    async fn same_building_is_an_empty_route() {
        let response = server()
            .get("/api/v1/route")
            .add_query_param("start", "SUZ")
            .add_query_param("end", "Suzzallo Library")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["edges"].as_array().map(Vec::len), Some(0));
        assert_eq!(body["total_distance"], 0.0);
    }

    #[tokio::test]
    async fn unknown_building_is_a_problem_with_suggestions() {
        let response = server()
            .get("/api/v1/route")
            .add_query_param("start", "Suzallo Library")
            .add_query_param("end", "Nonexistent")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.header("content-type"),
            HeaderValue::from_static("application/problem+json")
        );
        let body: Value = response.json();
        assert_eq!(body["type"], "/problems/unknown-building");
        assert_eq!(body["unknown"][0], "Suzallo Library");
        assert_eq!(body["unknown"][1], "Nonexistent");
        assert_eq!(body["suggestions"]["Suzallo Library"][0], "Suzzallo Library");
    }

    #[tokio::test]
    async fn unreachable_building_is_route_not_found() {
        let response = server()
            .get("/api/v1/route")
            .add_query_param("start", fixture_buildings::RAITT)
            .add_query_param("end", fixture_buildings::TOWER)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["type"], "/problems/route-not-found");
        assert_eq!(body["detail"], "No path found from Raitt Hall to UW Tower");
    }

    #[tokio::test]
    async fn missing_parameter_is_bad_request() {
        let response = server()
            .get("/api/v1/route")
            .add_query_param("start", "CSE")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["type"], "/problems/invalid-request");
        assert_eq!(body["field"], "end");
    }

    #[tokio::test]
    async fn request_id_is_echoed_into_problem_instance() {
        let response = server()
            .get("/api/v1/route")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("req-fixed"),
            )
            .add_query_param("start", "CSE")
            .add_query_param("end", "Nowhere")
            .await;

        let body: Value = response.json();
        assert_eq!(body["instance"], "req-fixed");
        assert_eq!(
            response.header("x-request-id"),
            HeaderValue::from_static("req-fixed")
        );
    }

    #[tokio::test]
    async fn buildings_are_listed_in_order() {
        let response = server().get("/api/v1/buildings").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["count"], 9);
        assert_eq!(body["buildings"][0]["short_name"], "CSE");
        assert_eq!(body["buildings"][8]["long_name"], "UW Tower");
    }

    #[tokio::test]
    async fn building_location_serves_bare_edge_array() {
        let response = server()
            .get("/buildingLocation")
            .add_query_param("start", fixture_buildings::CSE)
            .add_query_param("end", fixture_buildings::SUZZALLO)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let edges = body.as_array().expect("bare array body");
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2]["destination"]["x"], 1876.0);
        let total: f64 = edges.iter().filter_map(|edge| edge["label"].as_f64()).sum();
        assert_eq!(total.round(), 622.0);
    }

    #[tokio::test]
    async fn building_location_reports_unknown_buildings_as_problems() {
        let response = server()
            .get("/buildingLocation")
            .add_query_param("start", "CSE")
            .add_query_param("end", "Nowhere")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["type"], "/problems/unknown-building");
    }

    #[tokio::test]
    async fn get_buildings_serves_camel_case_array() {
        let response = server().get("/getBuildings").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let buildings = body.as_array().expect("bare array body");
        assert_eq!(buildings.len(), 9);
        assert_eq!(buildings[0]["shortName"], "CSE");
        assert_eq!(buildings[8]["longName"], "UW Tower");
    }

    #[tokio::test]
    async fn health_endpoints_report_ready() {
        let server = server();
        server.get("/health/live").await.assert_status_ok();

        let ready = server.get("/health/ready").await;
        ready.assert_status_ok();
        let body: Value = ready.json();
        assert_eq!(body["buildings_loaded"], 9);
        assert_eq!(body["nodes_loaded"], 14);
    }

    #[tokio::test]
    async fn cors_origin_is_applied_when_configured() {
        let server = TestServer::new(app(test_state(), Some("http://localhost:3000")))
            .expect("test server");
        let response = server
            .get("/api/v1/buildings")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:3000"),
            )
            .await;

        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("http://localhost:3000")
        );
    }
}
