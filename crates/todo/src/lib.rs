//! Todo Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Todo entity, status state machine, repository trait
//! - `application/` - Use cases (list, create, update, remove, transitions)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Semantics
//! - Every todo is owned by exactly one member; ownership never changes
//! - Mutations resolve the target first: 404 if absent, 403 if not owned,
//!   and only then apply field/status rules
//! - `overdue` is derived at read time from (status, due date, today),
//!   never persisted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TodoError, TodoResult};
pub use infra::postgres::PgTodoRepository;
pub use presentation::router::todo_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgTodoRepository as TodoStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
