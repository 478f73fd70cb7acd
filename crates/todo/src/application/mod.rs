//! Application Layer
//!
//! One use case per operation. Every mutation except create goes through
//! [`resolve_owned`] first, so the ownership check always precedes any
//! status or field rule.

pub mod create;
pub mod list;
pub mod remove;
pub mod status;
pub mod update;

pub use create::{CreateTodoInput, CreateTodoUseCase};
pub use list::ListTodosUseCase;
pub use remove::RemoveTodoUseCase;
pub use status::{CompleteTodoUseCase, RevertTodoUseCase};
pub use update::{UpdateTodoInput, UpdateTodoUseCase};

use kernel::id::{MemberId, TodoId};

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Resolve a todo by id and verify the caller owns it.
///
/// 404 if no record with that id exists, 403 if it exists under another
/// member. A non-owner therefore never learns anything about the record
/// beyond its existence.
pub(crate) async fn resolve_owned<R>(
    repo: &R,
    member_id: MemberId,
    todo_id: TodoId,
) -> TodoResult<Todo>
where
    R: TodoRepository,
{
    let todo = repo
        .find_by_id(&todo_id)
        .await?
        .ok_or(TodoError::NotFound)?;

    if todo.member_id != member_id {
        return Err(TodoError::Forbidden);
    }

    Ok(todo)
}
