//! HTTP Handlers
//!
//! All routes require a [`CurrentMember`] in the request extensions,
//! inserted by the bearer-auth middleware mounted around this router.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use kernel::extract::CurrentMember;
use kernel::id::TodoId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CompleteTodoUseCase, CreateTodoInput, CreateTodoUseCase, ListTodosUseCase, RemoveTodoUseCase,
    RevertTodoUseCase, UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;
use crate::presentation::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// List / Create
// ============================================================================

/// GET /api/todos
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTodosUseCase::new(state.repo.clone());

    let todos = use_case.execute(member_id).await?;

    let today = Utc::now().date_naive();
    let body = todos
        .iter()
        .map(|todo| TodoResponse::from_todo(todo, today))
        .collect();

    Ok(Json(body))
}

/// POST /api/todos
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
    Json(req): Json<CreateTodoRequest>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateTodoUseCase::new(state.repo.clone());

    let input = CreateTodoInput {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
    };

    let todo = use_case.execute(member_id, input).await?;

    let today = Utc::now().date_naive();
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse::from_todo(&todo, today)),
    ))
}

// ============================================================================
// Update / Delete
// ============================================================================

/// PATCH /api/todos/{id}
pub async fn update_todo<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTodoRequest>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateTodoUseCase::new(state.repo.clone());

    let input = UpdateTodoInput {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
    };

    let todo = use_case
        .execute(member_id, TodoId::from_uuid(id), input)
        .await?;

    let today = Utc::now().date_naive();
    Ok(Json(TodoResponse::from_todo(&todo, today)))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
    Path(id): Path<Uuid>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveTodoUseCase::new(state.repo.clone());

    use_case.execute(member_id, TodoId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Status Transitions
// ============================================================================

/// PATCH /api/todos/{id}/complete
pub async fn complete_todo<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
    Path(id): Path<Uuid>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = CompleteTodoUseCase::new(state.repo.clone());

    let todo = use_case.execute(member_id, TodoId::from_uuid(id)).await?;

    let today = Utc::now().date_naive();
    Ok(Json(TodoResponse::from_todo(&todo, today)))
}

/// PATCH /api/todos/{id}/revert
pub async fn revert_todo<R>(
    State(state): State<TodoAppState<R>>,
    CurrentMember(member_id): CurrentMember,
    Path(id): Path<Uuid>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = RevertTodoUseCase::new(state.repo.clone());

    let todo = use_case.execute(member_id, TodoId::from_uuid(id)).await?;

    let today = Utc::now().date_naive();
    Ok(Json(TodoResponse::from_todo(&todo, today)))
}
