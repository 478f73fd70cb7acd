//! Remove Todo Use Case
//!
//! Ownership-checked hard delete.

use std::sync::Arc;

use kernel::id::{MemberId, TodoId};

use crate::application::resolve_owned;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Remove todo use case
pub struct RemoveTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, member_id: MemberId, todo_id: TodoId) -> TodoResult<()> {
        resolve_owned(self.repo.as_ref(), member_id, todo_id).await?;

        self.repo.delete(&todo_id).await?;

        tracing::info!(
            todo_id = %todo_id,
            member_id = %member_id,
            "Todo deleted"
        );

        Ok(())
    }
}
