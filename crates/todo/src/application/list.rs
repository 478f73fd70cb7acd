//! List Todos Use Case
//!
//! Owner-scoped listing, newest-created-first.

use std::sync::Arc;

use kernel::id::MemberId;

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// List todos use case
pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, member_id: MemberId) -> TodoResult<Vec<Todo>> {
        self.repo.find_all_by_member(&member_id).await
    }
}
