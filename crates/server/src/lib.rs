//! HTTP server for the car advisor backend

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl From<car_advisor_tools::ToolError> for ServerError {
    fn from(err: car_advisor_tools::ToolError) -> Self {
        match err {
            car_advisor_tools::ToolError::InvalidInput(msg) => ServerError::BadRequest(msg),
            other => {
                tracing::error!(error = %other, "Tool failure");
                ServerError::Internal
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
