// Axum API Server Module
//
// Purpose: JSON endpoints exposing the world detail view (state, tab strip,
// page data) and the browse grid over a world catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::WorldCatalog;
use crate::detail_view::{DetailView, FetchState};
use crate::lookup::WorldLookup;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<WorldCatalog>,
    pub lookup: Arc<dyn WorldLookup>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// State whose lookups are served by the catalog itself.
    pub fn new(catalog: WorldCatalog, cache_ttl: Duration) -> Self {
        let catalog = Arc::new(catalog);
        let lookup: Arc<dyn WorldLookup> = catalog.clone();
        Self::with_lookup(catalog, lookup, cache_ttl)
    }

    pub fn with_lookup(
        catalog: Arc<WorldCatalog>,
        lookup: Arc<dyn WorldLookup>,
        cache_ttl: Duration,
    ) -> Self {
        tracing::info!("Initializing Moka cache (ttl {:?})...", cache_ttl);
        let cache = Cache::builder()
            .max_capacity(10_000) // 10K entries
            .time_to_live(cache_ttl)
            .build();

        Self { catalog, lookup, cache }
    }

    fn detail_view(&self) -> DetailView<dyn WorldLookup> {
        DetailView::new(Arc::clone(&self.lookup))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Browse grid
        .route("/api/worlds", get(list_worlds))

        // Detail view
        .route("/api/worlds/:id", get(get_world))
        .route("/api/worlds/:id/tabs/:tab", get(get_world_tab))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_worlds(State(state): State<AppState>) -> Json<serde_json::Value> {
    let previews = state.catalog.grid_previews();
    Json(serde_json::json!({
        "rows": previews.len(),
        "data": previews,
    }))
}

async fn get_world(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("world:{}", id);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for world {}", id);
        return Ok(Json(cached));
    }

    let mut view = state.detail_view();
    view.load(id.as_str()).await;
    ensure_ready(view.state(), &id)?;

    let result = serde_json::json!({
        "state": view.state().label(),
        "active_tab": view.active_tab(),
        "tab_strip": view.tab_strip(),
        "page": view.page(),
    });

    // Only successful pages are cached
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn get_world_tab(
    State(state): State<AppState>,
    Path((id, tab)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut view = state.detail_view();
    view.load(id.as_str()).await;
    ensure_ready(view.state(), &id)?;

    view.select(tab.as_str());

    Ok(Json(serde_json::json!({
        "tab": view.active_tab(),
        "content": view.active_content(),
    })))
}

fn ensure_ready(state: &FetchState, id: &str) -> Result<(), AppError> {
    match state {
        FetchState::Ready(_) => Ok(()),
        FetchState::NotFound => Err(AppError::NotFound(format!("World {} not found", id))),
        FetchState::Error(_) => Err(AppError::Internal(format!("Failed to load world {}", id))),
        FetchState::Loading => Err(AppError::Internal(format!("World {} is still loading", id))),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
