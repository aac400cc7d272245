use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{TextExtractor, WebImporter};
use crate::presentation::state::AppState;

use super::convert::{ErrorResponse, conversion_error_response, conversion_response};

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_url_handler<E, W>(
    State(state): State<AppState<E, W>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    W: WebImporter + 'static,
{
    let mut url: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() == Some("url") {
            url = field.text().await.ok();
        }
    }

    let url = match url.filter(|u| !u.trim().is_empty()) {
        Some(u) => u,
        None => {
            tracing::warn!("URL conversion request with no url field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No URL provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(url = %url, "Importing web page");

    match state.conversion_service.convert_url(&url).await {
        Ok(conversion) => conversion_response(conversion),
        Err(e) => conversion_error_response(e),
    }
}
