use actix_web::{web, HttpResponse};

use super::dtos::todo::{CreateTodoDTO, MessageDTO};
use super::errors::TodoApiError;
use crate::errors::StoreError;
use crate::models::todo_model::{NewTodo, TodoId};
use crate::store::TodoStore;

/// Runs a store operation on the blocking thread pool
async fn with_store<S, T, F>(store: web::Data<S>, operation: F) -> Result<T, StoreError>
where
    S: TodoStore,
    T: Send + 'static,
    F: FnOnce(&S) -> Result<T, StoreError> + Send + 'static,
{
    web::block(move || operation(store.get_ref())).await?
}

/// Create a new todo
///
/// A missing or unreadable body is treated like a missing title.
pub async fn create_todo<S: TodoStore>(
    request_data: Option<web::Json<CreateTodoDTO>>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let title = request_data.and_then(|body| body.into_inner().title);

    let created = with_store(store, move |store| store.create(NewTodo::from_title(title)?))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error creating todo"))?;

    log::debug!("Created todo {}", created.id);

    Ok(HttpResponse::Created().json(&created))
}

/// Api handler for getting all todos, soft-deleted ones included
pub async fn get_todos<S: TodoStore>(
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let list = with_store(store, |store| store.list_all())
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error fetching todos"))?;

    Ok(HttpResponse::Ok().json(&list))
}

pub async fn get_todo<S: TodoStore>(
    todo_id: web::Path<String>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let todo_id = TodoId::from(todo_id.into_inner());

    let todo = with_store(store, move |store| store.find_by_id(&todo_id))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error fetching todo"))?;

    Ok(HttpResponse::Ok().json(&todo))
}

/// Toggle a todo's completeness
pub async fn toggle_todo_completeness<S: TodoStore>(
    todo_id: web::Path<String>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let todo_id = TodoId::from(todo_id.into_inner());

    let updated = with_store(store, move |store| store.toggle_completed(&todo_id))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error updating todo"))?;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Move a todo to the deleted list
pub async fn mark_todo_as_deleted<S: TodoStore>(
    todo_id: web::Path<String>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let todo_id = TodoId::from(todo_id.into_inner());

    let updated = with_store(store, move |store| store.mark_deleted(&todo_id))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error deleting todo"))?;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Restore a soft-deleted todo
pub async fn restore_todo<S: TodoStore>(
    todo_id: web::Path<String>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let todo_id = TodoId::from(todo_id.into_inner());

    let updated = with_store(store, move |store| store.mark_restored(&todo_id))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error restoring todo"))?;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Api to permanently delete a todo
pub async fn delete_todo<S: TodoStore>(
    todo_id: web::Path<String>,
    store: web::Data<S>,
) -> Result<HttpResponse, TodoApiError> {
    let todo_id = TodoId::from(todo_id.into_inner());
    let removed_id = todo_id.clone();

    with_store(store, move |store| store.delete_by_id(&todo_id))
        .await
        .map_err(|e| TodoApiError::from_store(e, "Error deleting todo"))?;

    log::debug!("Permanently deleted todo {}", removed_id);

    Ok(HttpResponse::Ok().json(MessageDTO::new("Todo permanently deleted")))
}
