use crate::handlers::flights::{region, track};
use crate::handlers::index::index;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const STATIC_PREFIX: &str = "/static";

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.assets.dir());

    Router::<AppState>::new()
        .route("/", get(index))
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/track", get(track))
        .route("/region", get(region))
        .nest_service(STATIC_PREFIX, static_files)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
