use crate::errors::{ErrorResponse, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(ServiceError::InvalidRequest(message.into()))
    }

    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ServiceError::Repo(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        }
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(value: ServiceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!("❌ Request failed with {status}: {:?}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message,
        });

        (status, body).into_response()
    }
}
