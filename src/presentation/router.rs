use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{TextExtractor, WebImporter};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{convert_handler, convert_url_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, W>(state: AppState<E, W>) -> Router
where
    E: TextExtractor + 'static,
    W: WebImporter + 'static,
{
    let origins: Vec<HeaderValue> = state
        .settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    origin = %origin,
                    "Ignoring CORS origin that is not a valid header value"
                );
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Axum's default body cap (2 MB) sits below the upload limit; raise it so
    // oversize uploads reach the handler's own JSON error instead of a bare
    // 413 from the extractor.
    let body_limit = state.settings.limits.max_upload_bytes * 4;

    Router::new()
        .route("/health", get(health_handler))
        .route("/convert", post(convert_handler::<E, W>))
        .route("/convert_url", post(convert_url_handler::<E, W>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
