use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            104 => StatusCode::NOT_FOUND,
            108 => StatusCode::REQUEST_TIMEOUT,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == 104
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input_error(rejection.to_string())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        invalid_input_error(rejection.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
            _ => self.message.as_str(),
        };

        let body = Json(json!({
            "success": false,
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 104,
        message: "POI not found".into(),
    }
}

pub fn timeout_error() -> Error {
    Error {
        code: 108,
        message: "request timed out".into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    tracing::error!("environment variable error: {}", err);

    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!("database error: {:?}", err);

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn config_error(key: &str, value: &str) -> Error {
    Error {
        code: 3,
        message: format!("invalid value {:?} for {}", value, key),
    }
}

pub fn server_error<T: Debug>(err: T) -> Error {
    tracing::error!("server error: {:?}", err);

    Error {
        code: 4,
        message: "server error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_code_range() {
        assert_eq!(
            database_error("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(unexpected_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(not_found_error().status(), StatusCode::NOT_FOUND);
        assert_eq!(timeout_error().status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            invalid_input_error("name must not be empty").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn internal_errors_hide_their_message() {
        let response = database_error("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "code": 2, "error": "Internal Server Error"})
        );

        let err = config_error("POI_MAX_CONNECTIONS", "lots");
        assert!(err.message.contains("POI_MAX_CONNECTIONS"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn predicates() {
        assert!(not_found_error().is_not_found_error());
        assert!(!not_found_error().is_invalid_input_error());
        assert!(invalid_input_error("bad").is_invalid_input_error());
    }
}
