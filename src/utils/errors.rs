//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio de reservas
//! y su conversión a respuestas HTTP con cuerpo `{"error": ...}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Error de base de datos: {}", e);
                ErrorResponse {
                    error: "Database error".to_string(),
                    code: "DB_ERROR",
                }
            }

            AppError::NotFound(msg) => {
                tracing::warn!("🔍 Recurso no encontrado: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "NOT_FOUND",
                }
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Solicitud incorrecta: {}", msg);
                ErrorResponse {
                    error: msg,
                    code: "BAD_REQUEST",
                }
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    code: "INTERNAL_ERROR",
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Los cuerpos JSON mal formados se reportan con el mismo formato `{error}`
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_error_field() {
        let (status, body) = body_json(not_found_error("Vehicle")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Vehicle not found");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error");
        assert_eq!(body["code"], "DB_ERROR");
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = body_json(bad_request_error("days is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "days is required");
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            AppError::Internal("lock".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
