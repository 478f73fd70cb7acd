//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{Todo, TodoStatus};

// ============================================================================
// Requests
// ============================================================================

/// Create todo request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Update todo request. Omitted fields are left unchanged; there is no
/// way to clear a field through this request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

// ============================================================================
// Responses
// ============================================================================

/// Todo record as returned over HTTP.
///
/// `overdue` is computed against the server's current date at
/// serialization time; it is never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TodoStatus,
    pub overdue: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoResponse {
    pub fn from_todo(todo: &Todo, today: NaiveDate) -> Self {
        Self {
            id: *todo.todo_id.as_uuid(),
            member_id: *todo.member_id.as_uuid(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date,
            status: todo.status,
            overdue: todo.is_overdue(today),
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
