//! In-Memory Repository Implementation
//!
//! Backing store for use-case tests and local experiments. Mirrors the
//! store-level semantics the use cases rely on: by-id lookup across all
//! owners and newest-first listing per member.

use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::{MemberId, TodoId};

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// In-memory todo repository
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos, across all members
    pub fn todo_count(&self) -> usize {
        self.todos.lock().map(|t| t.len()).unwrap_or(0)
    }

    fn lock_todos(&self) -> Result<MutexGuard<'_, Vec<Todo>>, TodoError> {
        self.todos
            .lock()
            .map_err(|_| TodoError::Internal("Todo store lock poisoned".to_string()))
    }
}

impl TodoRepository for MemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> TodoResult<()> {
        let mut todos = self.lock_todos()?;
        todos.push(todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, todo_id: &TodoId) -> TodoResult<Option<Todo>> {
        let todos = self.lock_todos()?;
        Ok(todos.iter().find(|t| &t.todo_id == todo_id).cloned())
    }

    async fn find_all_by_member(&self, member_id: &MemberId) -> TodoResult<Vec<Todo>> {
        let todos = self.lock_todos()?;
        let mut owned: Vec<Todo> = todos
            .iter()
            .filter(|t| &t.member_id == member_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(&self, todo: &Todo) -> TodoResult<()> {
        let mut todos = self.lock_todos()?;
        match todos.iter_mut().find(|t| t.todo_id == todo.todo_id) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(())
            }
            None => Err(TodoError::NotFound),
        }
    }

    async fn delete(&self, todo_id: &TodoId) -> TodoResult<bool> {
        let mut todos = self.lock_todos()?;
        let before = todos.len();
        todos.retain(|t| &t.todo_id != todo_id);
        Ok(todos.len() < before)
    }
}
