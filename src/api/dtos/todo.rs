use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTodoDTO {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageDTO {
    pub message: String,
}

impl MessageDTO {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}
