pub mod memory;
pub mod postgres;

use crate::{
    errors::StoreError,
    models::todo_model::{NewTodo, Todo, TodoId},
};

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

/// Storage contract shared by every todo backend
///
/// Each method touches at most one record. A well-formed id with no record
/// yields `StoreError::NotFound`; an id the backend cannot parse at all is
/// reported as that backend's query failure.
pub trait TodoStore: Send + Sync + 'static {
    fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError>;

    /// All todos, soft-deleted ones included, in creation order
    fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    fn find_by_id(&self, todo_id: &TodoId) -> Result<Todo, StoreError>;

    /// Flips `is_completed` and returns the updated todo
    fn toggle_completed(&self, todo_id: &TodoId) -> Result<Todo, StoreError>;

    fn mark_deleted(&self, todo_id: &TodoId) -> Result<Todo, StoreError>;

    fn mark_restored(&self, todo_id: &TodoId) -> Result<Todo, StoreError>;

    /// Removes the todo permanently
    fn delete_by_id(&self, todo_id: &TodoId) -> Result<(), StoreError>;
}
