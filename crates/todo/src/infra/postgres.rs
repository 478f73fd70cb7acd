//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{MemberId, TodoId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Todo, TodoStatus};
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for PgTodoRepository {
    async fn create(&self, todo: &Todo) -> TodoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO todo (
                todo_id,
                member_id,
                title,
                description,
                due_date,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(todo.todo_id.as_uuid())
        .bind(todo.member_id.as_uuid())
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.due_date)
        .bind(todo.status.as_str())
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, todo_id: &TodoId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                todo_id,
                member_id,
                title,
                description,
                due_date,
                status,
                created_at,
                updated_at
            FROM todo
            WHERE todo_id = $1
            "#,
        )
        .bind(todo_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    async fn find_all_by_member(&self, member_id: &MemberId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                todo_id,
                member_id,
                title,
                description,
                due_date,
                status,
                created_at,
                updated_at
            FROM todo
            WHERE member_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    async fn update(&self, todo: &Todo) -> TodoResult<()> {
        sqlx::query(
            r#"
            UPDATE todo
            SET title       = $1,
                description = $2,
                due_date    = $3,
                status      = $4,
                updated_at  = $5
            WHERE todo_id = $6
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.due_date)
        .bind(todo.status.as_str())
        .bind(todo.updated_at)
        .bind(todo.todo_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, todo_id: &TodoId) -> TodoResult<bool> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM todo WHERE todo_id = $1
            "#,
        )
        .bind(todo_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Type
// ============================================================================

#[derive(sqlx::FromRow)]
struct TodoRow {
    todo_id: Uuid,
    member_id: Uuid,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> TodoResult<Todo> {
        Ok(Todo::from_db(
            TodoId::from_uuid(self.todo_id),
            MemberId::from_uuid(self.member_id),
            self.title,
            self.description,
            self.due_date,
            TodoStatus::parse(&self.status)?,
            self.created_at,
            self.updated_at,
        ))
    }
}
