use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::requester::UpstreamError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant serializes to `{"success": false, "message": ..., "error"?: ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{action}: {source}")]
    Upstream {
        action: String,
        #[source]
        source: UpstreamError,
    },

    #[error("{action}: {source}")]
    Render {
        action: String,
        #[source]
        source: RenderError,
    },

    #[error("Endpoint not found")]
    NotFound,
}

impl AppError {
    pub fn upstream(action: &str, source: UpstreamError) -> Self {
        AppError::Upstream {
            action: action.to_string(),
            source,
        }
    }

    pub fn render(action: &str, source: RenderError) -> Self {
        AppError::Render {
            action: action.to_string(),
            source,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Upstream { action, source } => {
                tracing::error!("{action}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    action.clone(),
                    Some(source.to_string()),
                )
            }
            AppError::Render { action, source } => {
                tracing::error!("{action}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    action.clone(),
                    Some(source.to_string()),
                )
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Endpoint not found".to_string(),
                None,
            ),
        };

        let body = match error {
            Some(error) => json!({
                "success": false,
                "message": message,
                "error": error
            }),
            None => json!({
                "success": false,
                "message": message
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_is_400_without_error_field() {
        let response = AppError::Validation("Missing required field: content".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing required field: content");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_upstream_is_500_with_wrapped_message() {
        let source = UpstreamError::from_llm(
            crate::generation::requester::DraftKind::Proposal,
            LlmError::Api {
                status: 401,
                message: "Incorrect API key provided".into(),
            },
        );
        let response = AppError::upstream("Failed to generate proposal", source).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to generate proposal");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_render_is_500() {
        let response = AppError::render(
            "Failed to generate PDF",
            RenderError::Pdf("font table missing".into()),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("font table missing"));
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Endpoint not found");
    }
}
