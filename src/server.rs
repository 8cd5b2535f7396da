//! Autocomplete HTTP boundary.
//!
//! Adapts inbound requests to the lookup services and shapes responses
//! for browser autocomplete clients.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/autocomplete-colors` | Color suggestions (`query`, optional `quality` scope) |
//! | `GET`  | `/autocomplete-qualities` | Quality suggestions by code or alias (`query`) |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Any failure, whether a catalog read, query-string parsing, or
//! serialization, becomes a 500 with body `{ "error": "<message>" }`. Queries shorter than the configured
//! minimum are not errors: they short-circuit to `[]` with status 200,
//! before any catalog read.
//!
//! # CORS
//!
//! Any origin is allowed with a fixed request-header allow-list
//! (`authorization`, `x-client-info`, `apikey`, `content-type`). The
//! layer answers OPTIONS pre-flights with an empty body and puts the
//! cross-origin headers on every response, success or failure.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::sqlite::SqliteCatalog;
use crate::config::Config;
use crate::db;
use crate::lookup::{ColorLookupService, QualityLookupService};
use crate::models::{ColorRecord, QualityRecord};

/// Shared application state passed to all route handlers via Axum's
/// `State` extractor.
///
/// Each endpoint carries its own service (and therefore its own catalog
/// handle): the color side runs caller-scoped, the quality side runs
/// privileged. Locally both resolve to the same SQLite store, but the
/// wiring keeps the split explicit instead of hiding it in a shared
/// client.
#[derive(Clone)]
pub struct AppState {
    colors: ColorLookupService,
    qualities: QualityLookupService,
    min_query_len: usize,
}

impl AppState {
    pub fn new(
        colors: ColorLookupService,
        qualities: QualityLookupService,
        min_query_len: usize,
    ) -> Self {
        Self {
            colors,
            qualities,
            min_query_len,
        }
    }
}

/// Builds the router with the CORS layer applied.
///
/// Exposed separately from [`run_server`] so tests can serve an
/// in-memory-backed state on an ephemeral port.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/autocomplete-colors", get(handle_colors))
        .route("/autocomplete-qualities", get(handle_qualities))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Starts the autocomplete HTTP server.
///
/// Opens the catalog database, wires each endpoint to its lookup
/// service, binds to `[server].bind`, and serves until the process is
/// terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(&config.db.path).await?;

    // One catalog handle per endpoint; see AppState docs.
    let caller_catalog = Arc::new(SqliteCatalog::new(pool.clone()));
    let privileged_catalog = Arc::new(SqliteCatalog::new(pool));

    let state = AppState::new(
        ColorLookupService::new(caller_catalog, config.lookup.max_results),
        QualityLookupService::new(
            privileged_catalog,
            config.lookup.candidate_window,
            config.lookup.max_results,
        ),
        config.lookup.min_query_len,
    );

    println!("autocomplete server listening on http://{}", config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    serve(listener, state).await
}

/// Serves the app on an already-bound listener.
///
/// Split out of [`run_server`] so tests can bind port 0 and learn the
/// ephemeral address before serving.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, app(state)).await?;
    Ok(())
}

// ============ Error response ============

/// JSON error envelope: `{ "error": "<message>" }`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Internal error type that converts into an Axum HTTP response.
///
/// The lookup services propagate catalog errors untouched; this is the
/// single point that turns any of them into the 500 envelope.
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /autocomplete-colors ============

/// Query-string parameters for the color endpoint. A missing `query` is
/// an empty string, which falls under the minimum-length gate.
#[derive(Deserialize)]
struct ColorParams {
    #[serde(default)]
    query: String,
    quality: Option<String>,
}

async fn handle_colors(
    State(state): State<AppState>,
    params: Result<Query<ColorParams>, QueryRejection>,
) -> Result<Json<Vec<ColorRecord>>, AppError> {
    let Query(params) = params.map_err(anyhow::Error::new)?;
    let query = params.query.trim();
    if query.chars().count() < state.min_query_len {
        return Ok(Json(Vec::new()));
    }

    let results = state.colors.lookup(query, params.quality.as_deref()).await?;
    Ok(Json(results))
}

// ============ GET /autocomplete-qualities ============

#[derive(Deserialize)]
struct QualityParams {
    #[serde(default)]
    query: String,
}

async fn handle_qualities(
    State(state): State<AppState>,
    params: Result<Query<QualityParams>, QueryRejection>,
) -> Result<Json<Vec<QualityRecord>>, AppError> {
    let Query(params) = params.map_err(anyhow::Error::new)?;
    let query = params.query.trim();
    if query.chars().count() < state.min_query_len {
        return Ok(Json(Vec::new()));
    }

    let results = state.qualities.lookup(query).await?;
    Ok(Json(results))
}
