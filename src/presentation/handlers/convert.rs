use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{TextExtractor, WebImportError, WebImporter};
use crate::application::services::ConversionError;
use crate::domain::{Conversion, ConversionMode};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ConvertResponse {
    pub id: String,
    pub context: String,
    pub token_estimate: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_handler<E, W>(
    State(state): State<AppState<E, W>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    W: WebImporter + 'static,
{
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut raw_text: Option<String> = None;
    let mut mode = ConversionMode::Default;

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

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                file = Some((filename, data.to_vec()));
            }
            "raw_text" => {
                raw_text = field.text().await.ok();
            }
            "mode" => {
                if let Ok(value) = field.text().await {
                    mode = ConversionMode::from_form_value(&value);
                }
            }
            _ => {}
        }
    }

    tracing::debug!(
        mode = %mode,
        has_file = file.is_some(),
        has_raw_text = raw_text.is_some(),
        "Conversion input received"
    );

    // The file wins when both inputs are present; an empty raw_text field
    // counts as absent.
    let result = if let Some((filename, data)) = file {
        if data.len() > state.settings.limits.max_upload_bytes {
            tracing::warn!(filename = %filename, bytes = data.len(), "Upload over size cap");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: "File too large (5MB max)".to_string(),
                }),
            )
                .into_response();
        }

        tracing::debug!(filename = %filename, bytes = data.len(), "Converting uploaded file");
        state.conversion_service.convert_pdf(&data).await
    } else if let Some(text) = raw_text.filter(|t| !t.is_empty()) {
        state.conversion_service.convert_raw_text(&text).await
    } else {
        tracing::warn!("Conversion request with no input");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No input provided".to_string(),
            }),
        )
            .into_response();
    };

    match result {
        Ok(conversion) => conversion_response(conversion),
        Err(e) => conversion_error_response(e),
    }
}

pub(super) fn conversion_response(conversion: Conversion) -> Response {
    tracing::info!(
        conversion_id = %conversion.id.as_uuid(),
        token_estimate = conversion.token_estimate,
        "Conversion succeeded"
    );

    (
        StatusCode::OK,
        Json(ConvertResponse {
            id: conversion.id.as_uuid().to_string(),
            context: conversion.context,
            token_estimate: conversion.token_estimate,
        }),
    )
        .into_response()
}

pub(super) fn conversion_error_response(error: ConversionError) -> Response {
    let status = match &error {
        ConversionError::ContentTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ConversionError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ConversionError::WebImport(e) => match e {
            WebImportError::InvalidUrl | WebImportError::NonHtmlFile => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        },
    };

    tracing::warn!(error = %error, status = %status, "Conversion failed");

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
