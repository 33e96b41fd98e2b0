use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use locadora_core::error::DomainError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DomainError`] for domain failures and adds variants for
/// errors that escape a handler's guarded paths. Implements
/// [`IntoResponse`]; response bodies are the plain-text Brazilian
/// Portuguese messages this API's consumers depend on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `locadora_core`.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A database error outside any guarded write path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A broken internal invariant, e.g. a rental referencing a
    /// customer or movie row that no longer exists.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::NotFound(message.into()))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::Conflict(message.into()))
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::InvalidRequest(message.into()))
    }
}

/// Map an underlying failure into the generic invalid-request response
/// used by the guarded create/update/import paths.
pub fn requisicao_invalida(cause: impl std::fmt::Display) -> AppError {
    AppError::Domain(DomainError::requisicao_invalida(cause))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Domain(domain) => match domain {
                DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                // Duplicate ids answer 400 in this contract, not 409.
                DomainError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
                DomainError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno no servidor.".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno no servidor.".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
