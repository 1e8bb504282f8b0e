use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Identifier of a stored todo, as rendered in urls and json
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
    pub is_deleted: bool,
    /// Only tracked by the persistent store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn from_new(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            title: new_todo.title,
            is_completed: false,
            is_deleted: false,
            created_at: None,
        }
    }
}

/// Validated input for creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
}

impl NewTodo {
    /// Builds the creation input, rejecting a missing or empty title
    pub fn from_title(title: Option<String>) -> Result<Self, StoreError> {
        match title {
            Some(title) if !title.is_empty() => Ok(Self { title }),
            Some(_) => Err(StoreError::Invalid(String::from("title must not be empty"))),
            None => Err(StoreError::Invalid(String::from("title is required"))),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}
