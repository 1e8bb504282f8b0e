use std::sync::Mutex;

use crate::{
    errors::StoreError,
    models::todo_model::{NewTodo, Todo, TodoId},
};

use super::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    last_id: i64,
}

impl Inner {
    /// Millisecond timestamp, bumped past the last issued id when the
    /// clock has not moved
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();

        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    fn position(&self, todo_id: &TodoId) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| &todo.id == todo_id)
            .ok_or(StoreError::NotFound)
    }

    fn update<F>(&mut self, todo_id: &TodoId, change: F) -> Result<Todo, StoreError>
    where
        F: FnOnce(&mut Todo),
    {
        let index = self.position(todo_id)?;
        let todo = &mut self.todos[index];

        change(todo);

        Ok(todo.clone())
    }
}

/// Transient store keeping todos in process memory
///
/// Every operation runs under a single lock acquisition.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryTodoStore {
    fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.lock()?;

        let id = TodoId::from(inner.next_id().to_string());
        let todo = Todo::from_new(id, new_todo);

        inner.todos.push(todo.clone());

        Ok(todo)
    }

    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.lock()?.todos.clone())
    }

    fn find_by_id(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        let inner = self.inner.lock()?;
        let index = inner.position(todo_id)?;

        Ok(inner.todos[index].clone())
    }

    fn toggle_completed(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        self.inner
            .lock()?
            .update(todo_id, |todo| todo.is_completed = !todo.is_completed)
    }

    fn mark_deleted(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        self.inner
            .lock()?
            .update(todo_id, |todo| todo.is_deleted = true)
    }

    fn mark_restored(&self, todo_id: &TodoId) -> Result<Todo, StoreError> {
        self.inner
            .lock()?
            .update(todo_id, |todo| todo.is_deleted = false)
    }

    fn delete_by_id(&self, todo_id: &TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock()?;
        let index = inner.position(todo_id)?;

        inner.todos.remove(index);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::MemoryTodoStore;
    use crate::{
        errors::StoreError,
        models::todo_model::{NewTodo, TodoId},
        store::TodoStore,
    };

    fn new_todo(title: &str) -> NewTodo {
        NewTodo::from_title(Some(title.to_string())).unwrap()
    }

    #[test]
    fn test_create_defaults_flags() {
        let store = MemoryTodoStore::new();

        let todo = store.create(new_todo("Write report")).unwrap();

        assert_eq!(todo.title, "Write report");
        assert_eq!(todo.is_completed, false);
        assert_eq!(todo.is_deleted, false);
        assert_eq!(todo.created_at, None);
        assert_eq!(store.find_by_id(&todo.id), Ok(todo));
    }

    #[test]
    fn test_ids_unique_under_rapid_creates() {
        let store = MemoryTodoStore::new();

        let ids: HashSet<TodoId> = (0..500)
            .map(|i| store.create(new_todo(&format!("todo {}", i))).unwrap().id)
            .collect();

        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let store = MemoryTodoStore::new();

        store.create(new_todo("A")).unwrap();
        store.create(new_todo("B")).unwrap();

        let titles: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|todo| todo.title)
            .collect();

        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let store = MemoryTodoStore::new();
        let todo = store.create(new_todo("A")).unwrap();

        assert_eq!(store.toggle_completed(&todo.id).unwrap().is_completed, true);
        assert_eq!(store.toggle_completed(&todo.id).unwrap().is_completed, false);
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let store = MemoryTodoStore::new();
        let todo = store.create(new_todo("A")).unwrap();

        assert_eq!(store.mark_deleted(&todo.id).unwrap().is_deleted, true);
        assert_eq!(store.list_all().unwrap().len(), 1);

        assert_eq!(store.mark_restored(&todo.id).unwrap().is_deleted, false);
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_completed_and_deleted_are_independent() {
        let store = MemoryTodoStore::new();
        let todo = store.create(new_todo("A")).unwrap();

        store.toggle_completed(&todo.id).unwrap();
        let todo = store.mark_deleted(&todo.id).unwrap();

        assert!(todo.is_completed && todo.is_deleted);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = MemoryTodoStore::new();
        let a = store.create(new_todo("A")).unwrap();
        let b = store.create(new_todo("B")).unwrap();

        store.delete_by_id(&a.id).unwrap();

        assert_eq!(store.find_by_id(&a.id), Err(StoreError::NotFound));
        assert_eq!(store.list_all().unwrap(), vec![b]);
        assert_eq!(store.delete_by_id(&a.id), Err(StoreError::NotFound));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = MemoryTodoStore::new();
        let missing = TodoId::from("not-a-number");

        assert_eq!(store.find_by_id(&missing), Err(StoreError::NotFound));
        assert_eq!(store.toggle_completed(&missing), Err(StoreError::NotFound));
        assert_eq!(store.mark_deleted(&missing), Err(StoreError::NotFound));
        assert_eq!(store.mark_restored(&missing), Err(StoreError::NotFound));
        assert_eq!(store.delete_by_id(&missing), Err(StoreError::NotFound));
    }
}
