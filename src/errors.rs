//! # Error Handling
//!
//! Every builder in this crate returns `Result<_, SwaggerError>`. When a docs
//! route fails, the error is turned into an HTTP response with a sanitized
//! message, while the internal details are logged through `tracing`.
//!
//! ## Logging
//!
//! Nothing is printed unless the application installs a subscriber:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_target(false)
//!     .compact()
//!     .init();
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors raised while building or serving Swagger documents
#[derive(Debug, thiserror::Error)]
pub enum SwaggerError {
    /// A schema path carries a type with no Swagger counterpart
    #[error("unrecognized type `{type_name}` for field `{field}`")]
    UnrecognizedType {
        /// Path name in the schema
        field: String,
        /// Name of the offending schema type
        type_name: String,
    },

    /// A controller method could not be parsed into a verb
    #[error("unsupported HTTP verb `{0}`")]
    UnsupportedVerb(String),

    /// The select rule for a field could not be compiled
    #[error("invalid select pattern for field `{field}`")]
    InvalidSelect {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// No controller is mounted under the requested resource path
    #[error("no resource documented at `{0}`")]
    UnknownResource(String),

    /// The request carried no host to build the base path from
    #[error("request has no Host header")]
    MissingHost,
}

impl SwaggerError {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::MissingHost => StatusCode::BAD_REQUEST,
            Self::UnrecognizedType { .. }
            | Self::UnsupportedVerb(_)
            | Self::InvalidSelect { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    fn user_message(&self) -> String {
        match self {
            Self::UnknownResource(_) | Self::MissingHost => self.to_string(),
            _ => "Failed to generate API documentation".to_string(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::UnrecognizedType { .. } | Self::UnsupportedVerb(_) => {
                tracing::error!(error = %self, "Swagger generation failed");
            }
            Self::InvalidSelect { source, .. } => {
                tracing::error!(error = %self, source = %source, "Swagger generation failed");
            }
            _ => {
                tracing::debug!(
                    error = %self,
                    status = %self.status_code(),
                    "API docs error"
                );
            }
        }
    }
}

/// Error response sent to users (sanitized)
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for SwaggerError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}
