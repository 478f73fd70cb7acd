//! Update Todo Use Case
//!
//! Partial update: provided fields overwrite, omitted fields stay.
//! Absence is not a clear; there is no way to null a field here.
//! Status is not alterable through this operation.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{MemberId, TodoId};

use crate::application::resolve_owned;
use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Update todo input; `None` means "leave unchanged"
#[derive(Default)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Update todo use case
pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        member_id: MemberId,
        todo_id: TodoId,
        input: UpdateTodoInput,
    ) -> TodoResult<Todo> {
        let mut todo = resolve_owned(self.repo.as_ref(), member_id, todo_id).await?;

        if let Some(title) = input.title {
            todo.set_title(title)?;
        }
        if let Some(description) = input.description {
            todo.set_description(description);
        }
        if let Some(due_date) = input.due_date {
            todo.set_due_date(due_date);
        }

        self.repo.update(&todo).await?;

        Ok(todo)
    }
}
