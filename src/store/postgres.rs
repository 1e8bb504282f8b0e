use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::{Insertable, Queryable};

use crate::{
    errors::StoreError,
    models::{
        todo_model::{NewTodo, Todo, TodoId},
        Pool,
    },
    schema::*,
};

use super::TodoStore;

#[derive(Debug, Clone, Insertable, Queryable)]
#[table_name = "todos"]
struct TodoRow {
    id: uuid::Uuid,
    title: String,
    is_completed: bool,
    is_deleted: bool,
    created_at: chrono::NaiveDateTime,
}

impl TodoRow {
    fn from_new(new_todo: &NewTodo) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title: new_todo.title().to_string(),
            is_completed: false,
            is_deleted: false,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: TodoId::from(row.id.to_string()),
            title: row.title,
            is_completed: row.is_completed,
            is_deleted: row.is_deleted,
            created_at: Some(Utc.from_utc_datetime(&row.created_at)),
        }
    }
}

/// Todo ids in this store are uuids; anything else is a failed query, not a miss
fn parse_id(todo_id: &TodoId) -> Result<uuid::Uuid, StoreError> {
    uuid::Uuid::parse_str(todo_id.as_str())
        .map_err(|e| StoreError::Invalid(format!("invalid todo id {}: {}", todo_id, e)))
}

/// Persistent store backed by the `todos` table in PostgreSQL
pub struct PgTodoStore {
    pool: Pool,
}

impl PgTodoStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against `database_url`
    pub fn connect(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool: Pool = r2d2::Pool::builder().build(manager)?;

        Ok(Self::new(pool))
    }

    fn set_deleted(&self, todo_id: &TodoId, deleted: bool) -> Result<Todo, StoreError> {
        use crate::schema::todos::dsl::*;

        let uid = parse_id(todo_id)?;
        let conn = &self.pool.get()?;

        let row: Option<TodoRow> = diesel::update(todos.find(uid))
            .set(is_deleted.eq(deleted))
            .get_result(conn)
            .optional()?;

        row.map(Todo::from).ok_or(StoreError::NotFound)
    }
}

impl TodoStore for PgTodoStore {
    fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        let inserted: TodoRow = diesel::insert_into(todos)
            .values(&TodoRow::from_new(&new_todo))
            .get_result(conn)?;

        Ok(inserted.into())
    }

    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        let rows = todos.order(created_at.asc()).load::<TodoRow>(conn)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    fn find_by_id(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        use crate::schema::todos::dsl::*;

        let uid = parse_id(todo_id)?;
        let conn = &self.pool.get()?;

        let row = todos.find(uid).first::<TodoRow>(conn)?;

        Ok(row.into())
    }

    fn toggle_completed(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        use crate::schema::todos::dsl::*;
        use diesel::dsl::not;

        let uid = parse_id(todo_id)?;
        let conn = &self.pool.get()?;

        let row: Option<TodoRow> = diesel::update(todos.find(uid))
            .set(is_completed.eq(not(is_completed)))
            .get_result(conn)
            .optional()?;

        row.map(Todo::from).ok_or(StoreError::NotFound)
    }

    fn mark_deleted(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        self.set_deleted(todo_id, true)
    }

    fn mark_restored(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        self.set_deleted(todo_id, false)
    }

    fn delete_by_id(&self, todo_id: &TodoId) -> Result<(), StoreError> {
        use crate::schema::todos::dsl::*;

        let uid = parse_id(todo_id)?;
        let conn = &self.pool.get()?;

        let delete_count = diesel::delete(todos.find(uid)).execute(conn)?;

        if delete_count > 0 {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}
