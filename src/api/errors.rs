use actix_web::{http, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

use crate::errors::StoreError;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum TodoApiError {
    #[display(fmt = "Todo not found")]
    NotFound,

    #[display(fmt = "{}: {}", message, detail)]
    StoreFailure {
        message: &'static str,
        detail: String,
    },
}

impl TodoApiError {
    /// Wraps a store failure with the message of the operation that raised it
    pub fn from_store(error: StoreError, message: &'static str) -> Self {
        match error {
            StoreError::NotFound => TodoApiError::NotFound,
            error => {
                log::error!("{}: {}", message, error);

                TodoApiError::StoreFailure {
                    message,
                    detail: error.to_string(),
                }
            }
        }
    }
}

impl ResponseError for TodoApiError {
    fn status_code(&self) -> http::StatusCode {
        match self {
            TodoApiError::NotFound => http::StatusCode::NOT_FOUND,
            TodoApiError::StoreFailure { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            TodoApiError::NotFound => json!({ "message": self.to_string() }),
            TodoApiError::StoreFailure { message, detail } => {
                json!({ "message": message, "error": detail })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod test {
    use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
    use serde_json::{json, Value};

    use super::TodoApiError;
    use crate::errors::StoreError;

    #[test]
    fn test_not_found_passes_through() {
        let err = TodoApiError::from_store(StoreError::NotFound, "Error updating todo");

        assert_eq!(err, TodoApiError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_store_errors_are_failures() {
        let err = TodoApiError::from_store(
            StoreError::Connection(String::from("timed out")),
            "Error fetching todos",
        );

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Error fetching todos: Database connection error: timed out"
        );
    }

    #[test]
    fn test_invalid_id_is_a_failure_not_a_miss() {
        let err = TodoApiError::from_store(
            StoreError::Invalid(String::from("invalid todo id abc")),
            "Error updating todo",
        );

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            err,
            TodoApiError::StoreFailure { message: "Error updating todo", .. }
        ));
    }

    #[actix_web::test]
    async fn test_failure_body_carries_message_and_detail() {
        let err = TodoApiError::from_store(
            StoreError::Invalid(String::from("title is required")),
            "Error creating todo",
        );

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            json!({"message": "Error creating todo", "error": "Invalid todo: title is required"})
        );
    }
}
