use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;

/// Message returned for server-side failures that carry no public text.
const GENERIC_FAILURE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] as a plain-text body: client errors carry
/// their message, server errors carry only a fixed public message while the
/// underlying error is logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A filesystem error while storing or removing uploads.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// A server-side failure with the message the caller should see.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: Box<AppError>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Core(CoreError::Validation(_) | CoreError::NotFound { .. })
                | AppError::BadRequest(_)
                | AppError::PayloadTooLarge(_)
        )
    }

    /// Attach the public failure message of the operation that failed.
    ///
    /// Client errors pass through unchanged so their own message still
    /// reaches the caller.
    pub fn with_public_message(self, message: impl Into<String>) -> Self {
        if self.is_client_error() {
            self
        } else {
            AppError::Failed {
                message: message.into(),
                source: Box::new(self),
            }
        }
    }
}

/// Extension for labelling a fallible step with its public failure message.
///
/// ```ignore
/// ProductRepo::create(&state.pool, &input)
///     .await
///     .or_fail("Failed to insert product")?;
/// ```
pub trait OrFail<T> {
    fn or_fail(self, message: impl Into<String>) -> AppResult<T>;
}

impl<T, E: Into<AppError>> OrFail<T> for Result<T, E> {
    fn or_fail(self, message: impl Into<String>) -> AppResult<T> {
        self.map_err(|e| e.into().with_public_message(message))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // --- Client errors ---
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),

            // --- Server errors ---
            AppError::Failed { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            other => {
                tracing::error!(error = %other, "Unhandled internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, message).into_response()
    }
}
