//! Status Transition Use Cases
//!
//! complete: PENDING -> DONE, revert: DONE -> PENDING. The ownership
//! check runs before the status check, so a non-owner attempting an
//! illegal transition on someone else's todo still receives 403, not 400.

use std::sync::Arc;

use kernel::id::{MemberId, TodoId};

use crate::application::resolve_owned;
use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Complete todo use case
pub struct CompleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CompleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, member_id: MemberId, todo_id: TodoId) -> TodoResult<Todo> {
        let mut todo = resolve_owned(self.repo.as_ref(), member_id, todo_id).await?;

        todo.complete()?;
        self.repo.update(&todo).await?;

        tracing::info!(todo_id = %todo_id, "Todo completed");

        Ok(todo)
    }
}

/// Revert todo use case
pub struct RevertTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> RevertTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, member_id: MemberId, todo_id: TodoId) -> TodoResult<Todo> {
        let mut todo = resolve_owned(self.repo.as_ref(), member_id, todo_id).await?;

        todo.revert()?;
        self.repo.update(&todo).await?;

        tracing::info!(todo_id = %todo_id, "Todo reverted to pending");

        Ok(todo)
    }
}
