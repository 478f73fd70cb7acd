//! Todo Router
//!
//! Routes only; the bearer-auth middleware is layered on by the caller
//! so this crate carries no token-verification dependency.

use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// Create the Todo router with PostgreSQL repository
pub fn todo_router(repo: PgTodoRepository) -> Router {
    todo_router_generic(repo)
}

/// Create a generic Todo router for any repository implementation
pub fn todo_router_generic<R>(repo: R) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let state = TodoAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/{id}",
            patch(handlers::update_todo::<R>).delete(handlers::delete_todo::<R>),
        )
        .route("/{id}/complete", patch(handlers::complete_todo::<R>))
        .route("/{id}/revert", patch(handlers::revert_todo::<R>))
        .with_state(state)
}
