use std::sync::PoisonError;

use actix_web::error::BlockingError;
use derive_more::Display;
use diesel::result::Error as DBError;

/// Failure raised by a `TodoStore` operation
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[display(fmt = "Todo not found")]
    NotFound,

    #[display(fmt = "Invalid todo: {}", _0)]
    Invalid(String),

    #[display(fmt = "Database error: {}", _0)]
    Database(String),

    #[display(fmt = "Database connection error: {}", _0)]
    Connection(String),

    #[display(fmt = "Store unavailable: {}", _0)]
    Unavailable(String),
}

impl std::error::Error for StoreError {}

impl From<DBError> for StoreError {
    fn from(error: DBError) -> Self {
        match error {
            DBError::NotFound => StoreError::NotFound,
            DBError::DatabaseError(_, info) => StoreError::Database(
                info.details().unwrap_or_else(|| info.message()).to_string(),
            ),
            e => StoreError::Database(e.to_string()),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        StoreError::Connection(error.to_string())
    }
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_: PoisonError<T>) -> Self {
        StoreError::Unavailable(String::from("todo storage lock poisoned"))
    }
}

impl From<BlockingError> for StoreError {
    fn from(error: BlockingError) -> Self {
        StoreError::Unavailable(error.to_string())
    }
}
