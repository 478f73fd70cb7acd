//! Repository Trait
//!
//! Interface for todo persistence. Implementation is in the infrastructure
//! layer; the use cases are tested against the in-memory implementation.

use kernel::id::{MemberId, TodoId};

use crate::domain::entity::Todo;
use crate::error::TodoResult;

/// Todo store repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// Persist a new todo
    async fn create(&self, todo: &Todo) -> TodoResult<()>;

    /// Find a todo by id, regardless of owner
    async fn find_by_id(&self, todo_id: &TodoId) -> TodoResult<Option<Todo>>;

    /// All todos owned by `member_id`, newest-created-first.
    ///
    /// The owner filter lives here, at the store layer, so no caller can
    /// bypass it.
    async fn find_all_by_member(&self, member_id: &MemberId) -> TodoResult<Vec<Todo>>;

    /// Persist the mutable fields of an existing todo
    async fn update(&self, todo: &Todo) -> TodoResult<()>;

    /// Hard-delete a todo; returns whether a row existed
    async fn delete(&self, todo_id: &TodoId) -> TodoResult<bool>;
}
