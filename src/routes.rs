// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{pageview, questions, score},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the JSON API under `/api`.
/// * Serves the courseware pages from the static directory for every other path.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/pageview", get(pageview::record_and_count))
        .route("/questions", get(questions::get_questions))
        .route("/rank", get(score::rank))
        .route("/submit", post(score::submit));

    let pages = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(pages)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
