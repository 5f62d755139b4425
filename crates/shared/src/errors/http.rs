use crate::errors::{client::ClientError, error::ErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::Forbidden(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

impl From<ClientError> for HttpError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status, message } => match status {
                400 | 422 => HttpError::BadRequest(message),
                401 => HttpError::Unauthorized(message),
                403 => HttpError::Forbidden(message),
                404 => HttpError::NotFound(message),
                409 => HttpError::Conflict(message),
                _ => HttpError::Internal(message),
            },
            ClientError::Transport(_) | ClientError::Timeout => {
                HttpError::ServiceUnavailable(err.to_string())
            }
            ClientError::Decode(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::error(self.message()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_status_maps_onto_http_error() {
        let cases = [
            (400, StatusCode::BAD_REQUEST),
            (422, StatusCode::BAD_REQUEST),
            (401, StatusCode::UNAUTHORIZED),
            (403, StatusCode::FORBIDDEN),
            (404, StatusCode::NOT_FOUND),
            (409, StatusCode::CONFLICT),
            (500, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (backend, expected) in cases {
            let err = HttpError::from(ClientError::Status {
                status: backend,
                message: "Order not found".into(),
            });
            assert_eq!(err.status_code(), expected, "backend status {backend}");
            assert_eq!(err.message(), "Order not found");
        }
    }

    #[test]
    fn unreachable_backend_is_unavailable() {
        let err = HttpError::from(ClientError::Timeout);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
