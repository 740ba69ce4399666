use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::airtable::AirtableError;

/// Every way a lead submission can fail, mapped onto one HTTP status each.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Airtable not configured")]
    NotConfigured,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Airtable request failed")]
    Upstream { details: String },
    #[error("Unexpected error")]
    Unexpected { details: String },
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::NotConfigured => StatusCode::NOT_IMPLEMENTED,
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AirtableError> for RelayError {
    fn from(err: AirtableError) -> Self {
        match err {
            AirtableError::Rejected { body, .. } => RelayError::Upstream { details: body },
            AirtableError::Transport(e) => RelayError::Unexpected { details: e.to_string() },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RelayError::Upstream { details } | RelayError::Unexpected { details } => {
                json!({"error": self.to_string(), "details": details})
            }
            _ => json!({"error": self.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}
