//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`.
//! Middleware: CORS, tracing.
//!
//! In production, the built frontend is served from `public/`
//! (configurable via `INTERVIA_WEB_DIR`). API routes take priority;
//! unknown paths fall through to the frontend's `index.html` for
//! client-side routing. If the directory does not exist, only the API is
//! served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.web_dir.clone();

    let mut router = Router::new()
        .route("/api/health", get(health_check))
        // Interview lifecycle
        .route("/api/interview/start", post(handlers::interview::start_interview))
        .route(
            "/api/interview/{id}/answer",
            post(handlers::interview::submit_answer),
        )
        .route(
            "/api/interview/{id}/status",
            get(handlers::interview::interview_status),
        )
        .route(
            "/api/interview/{id}/results",
            get(handlers::interview::interview_results),
        )
        .route(
            "/api/interview/{id}/export/pdf",
            get(handlers::interview::export_pdf),
        )
        // Chat-driven flow
        .route("/api/interview/{id}/chat", post(handlers::chat::chat))
        // Catalogs
        .route("/api/roles", get(handlers::catalog::list_roles))
        .route("/api/domains", get(handlers::catalog::list_domains))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the built frontend from disk if the directory exists.
    // API routes take priority; unknown paths fall through to index.html
    // for client-side routing.
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    }

    router
}

/// GET /api/health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "OK",
        "message": "Interview Simulator API is running",
    }))
}
