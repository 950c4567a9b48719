use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing input. Always raised before any upstream call.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Body larger than the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upstream authentication error: {0}")]
    UpstreamAuth(String),

    #[error("Upstream API error: {message}")]
    UpstreamApi {
        message: String,
        detail: Option<String>,
    },

    #[error("Notification error: {message}")]
    Notification {
        message: String,
        detail: Option<String>,
    },
}

pub const PAYLOAD_TOO_LARGE_MESSAGE: &str =
    "El cuerpo de la solicitud excede el tamaño máximo permitido.";

impl AppError {
    /// Maps a JSON extraction failure. Oversized bodies keep their 413; every
    /// other rejection is reported with the endpoint's validation message.
    pub fn from_json_rejection(rejection: JsonRejection, validation_message: &str) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(PAYLOAD_TOO_LARGE_MESSAGE.to_string())
        } else {
            AppError::ValidationError(validation_message.to_string())
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UpstreamAuth(_)
            | AppError::UpstreamApi { .. }
            | AppError::Notification { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, detail) = match self {
            AppError::ValidationError(msg) => (msg, None),
            AppError::PayloadTooLarge(msg) => (msg, None),
            AppError::UpstreamAuth(msg) => (msg, None),
            AppError::UpstreamApi { message, detail } => (message, detail),
            AppError::Notification { message, detail } => (message, detail),
        };

        tracing::error!("Error: {}: {}", status, message);

        let body = match detail {
            Some(detail) => json!({ "error": message, "detalle": detail }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let response = AppError::ValidationError("falta userEmail".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "falta userEmail");
        assert!(json.get("detalle").is_none());
    }

    #[tokio::test]
    async fn test_upstream_error_includes_detail_when_present() {
        let response = AppError::UpstreamApi {
            message: "Error al reagendar la cita.".to_string(),
            detail: Some("HTTP 404: meeting not found".to_string()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Error al reagendar la cita.");
        assert_eq!(json["detalle"], "HTTP 404: meeting not found");
    }

    #[tokio::test]
    async fn test_payload_too_large_keeps_413() {
        let response =
            AppError::PayloadTooLarge(PAYLOAD_TOO_LARGE_MESSAGE.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = body_json(response).await;
        assert_eq!(json, json!({ "error": PAYLOAD_TOO_LARGE_MESSAGE }));
    }

    #[tokio::test]
    async fn test_upstream_auth_error_hides_detail() {
        let response =
            AppError::UpstreamAuth("Error al obtener el token de Zoom.".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json, json!({ "error": "Error al obtener el token de Zoom." }));
    }
}
