//! Create Todo Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::MemberId;

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Create todo input
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Create todo use case
pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, member_id: MemberId, input: CreateTodoInput) -> TodoResult<Todo> {
        let todo = Todo::new(member_id, input.title, input.description, input.due_date)?;

        self.repo.create(&todo).await?;

        tracing::info!(
            todo_id = %todo.todo_id,
            member_id = %member_id,
            "Todo created"
        );

        Ok(todo)
    }
}
