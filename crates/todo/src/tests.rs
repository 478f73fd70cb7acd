//! Unit tests for the todo crate
//!
//! Use cases run against the in-memory repository; router tests drive the
//! HTTP surface with `tower::ServiceExt::oneshot`, injecting the caller
//! identity the way the bearer-auth middleware would.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use kernel::id::{MemberId, TodoId};

use crate::application::{
    CompleteTodoUseCase, CreateTodoInput, CreateTodoUseCase, ListTodosUseCase, RemoveTodoUseCase,
    RevertTodoUseCase, UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::entity::{Todo, TodoStatus};
use crate::error::TodoError;
use crate::infra::memory::MemoryTodoRepository;

fn create_input(title: &str) -> CreateTodoInput {
    CreateTodoInput {
        title: title.to_string(),
        description: None,
        due_date: None,
    }
}

async fn created_todo(repo: &Arc<MemoryTodoRepository>, member_id: MemberId, title: &str) -> Todo {
    CreateTodoUseCase::new(repo.clone())
        .execute(member_id, create_input(title))
        .await
        .expect("create should succeed")
}

#[cfg(test)]
mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_starts_pending() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();

        let todo = created_todo(&repo, member_id, "buy milk").await;

        assert_eq!(todo.title, "buy milk");
        assert_eq!(todo.status, TodoStatus::Pending);
        assert_eq!(todo.member_id, member_id);
        assert_eq!(repo.todo_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_titles_are_rejected_without_write() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let use_case = CreateTodoUseCase::new(repo.clone());

        for bad in ["", "   ", "\t\n"] {
            let err = use_case
                .execute(MemberId::new(), create_input(bad))
                .await
                .unwrap_err();
            assert!(matches!(err, TodoError::TitleRequired), "{:?}", bad);
        }

        assert_eq!(repo.todo_count(), 0);
    }

    #[tokio::test]
    async fn test_optional_fields_are_stored() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let due = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

        let todo = CreateTodoUseCase::new(repo.clone())
            .execute(
                MemberId::new(),
                CreateTodoInput {
                    title: "file taxes".to_string(),
                    description: Some("before the deadline".to_string()),
                    due_date: Some(due),
                },
            )
            .await
            .unwrap();

        assert_eq!(todo.description.as_deref(), Some("before the deadline"));
        assert_eq!(todo.due_date, Some(due));
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;
    use crate::domain::repository::TodoRepository;

    #[tokio::test]
    async fn test_list_is_scoped_to_the_caller() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let alice = MemberId::new();
        let bob = MemberId::new();

        created_todo(&repo, alice, "alice 1").await;
        created_todo(&repo, alice, "alice 2").await;
        created_todo(&repo, bob, "bob 1").await;

        let use_case = ListTodosUseCase::new(repo.clone());

        let alices = use_case.execute(alice).await.unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|t| t.member_id == alice));

        let bobs = use_case.execute(bob).await.unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].title, "bob 1");
    }

    #[tokio::test]
    async fn test_list_orders_newest_created_first() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let now = Utc::now();

        // Insert out of order with explicit timestamps
        for (title, age_minutes) in [("middle", 10), ("oldest", 20), ("newest", 0)] {
            let created = now - Duration::minutes(age_minutes);
            let todo = Todo::from_db(
                TodoId::new(),
                member_id,
                title.to_string(),
                None,
                None,
                TodoStatus::Pending,
                created,
                created,
            );
            repo.create(&todo).await.unwrap();
        }

        let todos = ListTodosUseCase::new(repo).execute(member_id).await.unwrap();
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }
}

#[cfg(test)]
mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_omitted_fields_stay_unchanged() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

        let todo = CreateTodoUseCase::new(repo.clone())
            .execute(
                member_id,
                CreateTodoInput {
                    title: "original".to_string(),
                    description: Some("keep me".to_string()),
                    due_date: Some(due),
                },
            )
            .await
            .unwrap();

        let updated = UpdateTodoUseCase::new(repo.clone())
            .execute(
                member_id,
                todo.todo_id,
                UpdateTodoInput {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.description.as_deref(), Some("keep me"));
        assert_eq!(updated.due_date, Some(due));
    }

    #[tokio::test]
    async fn test_empty_title_update_is_rejected_and_nothing_changes() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let todo = created_todo(&repo, member_id, "original").await;

        let err = UpdateTodoUseCase::new(repo.clone())
            .execute(
                member_id,
                todo.todo_id,
                UpdateTodoInput {
                    title: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::TitleRequired));

        let stored = ListTodosUseCase::new(repo).execute(member_id).await.unwrap();
        assert_eq!(stored[0].title, "original");
    }

    #[tokio::test]
    async fn test_update_touches_updated_at() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let todo = created_todo(&repo, member_id, "original").await;

        let updated = UpdateTodoUseCase::new(repo.clone())
            .execute(
                member_id,
                todo.todo_id,
                UpdateTodoInput {
                    description: Some("now described".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.updated_at >= todo.updated_at);
        assert_eq!(updated.created_at, todo.created_at);
    }
}

#[cfg(test)]
mod ownership_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = Arc::new(MemoryTodoRepository::new());

        let err = RemoveTodoUseCase::new(repo)
            .execute(MemberId::new(), TodoId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let owner = MemberId::new();
        let intruder = MemberId::new();
        let todo = created_todo(&repo, owner, "private").await;

        let err = UpdateTodoUseCase::new(repo.clone())
            .execute(
                intruder,
                todo.todo_id,
                UpdateTodoInput {
                    title: Some("stolen".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Forbidden));

        let err = RemoveTodoUseCase::new(repo.clone())
            .execute(intruder, todo.todo_id)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Forbidden));

        // Still there, still untouched
        let stored = ListTodosUseCase::new(repo).execute(owner).await.unwrap();
        assert_eq!(stored[0].title, "private");
    }

    #[tokio::test]
    async fn test_ownership_check_precedes_status_rules() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let owner = MemberId::new();
        let intruder = MemberId::new();
        let todo = created_todo(&repo, owner, "mine").await;

        CompleteTodoUseCase::new(repo.clone())
            .execute(owner, todo.todo_id)
            .await
            .unwrap();

        // Completing an already-done todo would be a 400 for the owner,
        // but a non-owner must get 403 before any status rule runs
        let err = CompleteTodoUseCase::new(repo)
            .execute(intruder, todo.todo_id)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Forbidden));
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[tokio::test]
    async fn test_complete_then_revert_round_trip() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let todo = created_todo(&repo, member_id, "task").await;

        let done = CompleteTodoUseCase::new(repo.clone())
            .execute(member_id, todo.todo_id)
            .await
            .unwrap();
        assert_eq!(done.status, TodoStatus::Done);

        let pending = RevertTodoUseCase::new(repo)
            .execute(member_id, todo.todo_id)
            .await
            .unwrap();
        assert_eq!(pending.status, TodoStatus::Pending);
    }

    #[tokio::test]
    async fn test_completing_a_done_todo_is_rejected_without_change() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let todo = created_todo(&repo, member_id, "task").await;

        let use_case = CompleteTodoUseCase::new(repo.clone());
        let done = use_case.execute(member_id, todo.todo_id).await.unwrap();

        let err = use_case.execute(member_id, todo.todo_id).await.unwrap_err();
        assert!(matches!(err, TodoError::AlreadyDone));

        let stored = ListTodosUseCase::new(repo).execute(member_id).await.unwrap();
        assert_eq!(stored[0].status, TodoStatus::Done);
        assert_eq!(stored[0].updated_at, done.updated_at);
    }

    #[tokio::test]
    async fn test_reverting_a_pending_todo_is_rejected() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let member_id = MemberId::new();
        let todo = created_todo(&repo, member_id, "task").await;

        let err = RevertTodoUseCase::new(repo)
            .execute(member_id, todo.todo_id)
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::AlreadyPending));
    }
}

#[cfg(test)]
mod overdue_tests {
    use super::*;

    fn todo_with(status: TodoStatus, due_date: Option<NaiveDate>) -> Todo {
        let now = Utc::now();
        Todo::from_db(
            TodoId::new(),
            MemberId::new(),
            "task".to_string(),
            None,
            due_date,
            status,
            now,
            now,
        )
    }

    #[test]
    fn test_pending_past_due_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

        assert!(todo_with(TodoStatus::Pending, Some(yesterday)).is_overdue(today));
    }

    #[test]
    fn test_done_is_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

        assert!(!todo_with(TodoStatus::Done, Some(yesterday)).is_overdue(today));
    }

    #[test]
    fn test_due_today_or_later_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();

        assert!(!todo_with(TodoStatus::Pending, Some(today)).is_overdue(today));
        assert!(!todo_with(TodoStatus::Pending, Some(tomorrow)).is_overdue(today));
    }

    #[test]
    fn test_no_due_date_is_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();

        assert!(!todo_with(TodoStatus::Pending, None).is_overdue(today));
        assert!(!todo_with(TodoStatus::Done, None).is_overdue(today));
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use kernel::extract::CurrentMember;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::presentation::router::todo_router_generic;

    fn test_router() -> Router {
        todo_router_generic(MemoryTodoRepository::new())
    }

    /// Build a request carrying the caller identity the middleware would
    /// have inserted.
    fn request_as(member_id: MemberId, method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .extension(CurrentMember(member_id));

        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request builds")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn test_create_list_update_complete_delete_flow() {
        let router = test_router();
        let member_id = MemberId::new();

        // Create
        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "POST",
                "/",
                Some(json!({"title": "buy milk"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["title"], "buy milk");
        assert_eq!(created["status"], "PENDING");
        assert_eq!(created["overdue"], false);
        let id = created["id"].as_str().unwrap().to_string();

        // List
        let response = router
            .clone()
            .oneshot(request_as(member_id, "GET", "/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        // Partial update
        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "PATCH",
                &format!("/{id}"),
                Some(json!({"description": "2 liters"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["title"], "buy milk");
        assert_eq!(updated["description"], "2 liters");

        // Complete
        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "PATCH",
                &format!("/{id}/complete"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let done = body_json(response).await;
        assert_eq!(done["status"], "DONE");

        // Completing again is a 400 with the state-machine message
        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "PATCH",
                &format!("/{id}/complete"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Already done");

        // Delete
        let response = router
            .clone()
            .oneshot(request_as(member_id, "DELETE", &format!("/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Gone
        let response = router
            .clone()
            .oneshot(request_as(member_id, "GET", "/", None))
            .await
            .unwrap();
        let list = body_json(response).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overdue_is_derived_in_responses() {
        let router = test_router();
        let member_id = MemberId::new();
        let yesterday = Utc::now().date_naive() - Duration::days(1);

        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "POST",
                "/",
                Some(json!({"title": "late task", "dueDate": yesterday})),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        assert_eq!(created["overdue"], true);
        let id = created["id"].as_str().unwrap().to_string();

        // Completing clears the flag even though the due date is unchanged
        let response = router
            .clone()
            .oneshot(request_as(
                member_id,
                "PATCH",
                &format!("/{id}/complete"),
                None,
            ))
            .await
            .unwrap();
        let done = body_json(response).await;
        assert_eq!(done["overdue"], false);
        assert_eq!(done["dueDate"], created["dueDate"]);
    }

    #[tokio::test]
    async fn test_cross_member_access_over_http() {
        let router = test_router();
        let owner = MemberId::new();
        let intruder = MemberId::new();

        let response = router
            .clone()
            .oneshot(request_as(
                owner,
                "POST",
                "/",
                Some(json!({"title": "private"})),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        // Invisible in the intruder's list
        let response = router
            .clone()
            .oneshot(request_as(intruder, "GET", "/", None))
            .await
            .unwrap();
        let list = body_json(response).await;
        assert!(list.as_array().unwrap().is_empty());

        // Direct access by id is forbidden, not hidden
        let response = router
            .clone()
            .oneshot(request_as(intruder, "DELETE", &format!("/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Forbidden");

        // A random id is a plain 404
        let response = router
            .clone()
            .oneshot(request_as(
                intruder,
                "DELETE",
                &format!("/{}", uuid::Uuid::new_v4()),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_caller_identity_is_unauthorized() {
        let router = test_router();

        // No CurrentMember extension, as if the middleware never ran
        let response = router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_title_over_http() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(request_as(
                MemberId::new(),
                "POST",
                "/",
                Some(json!({"title": "   "})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Title is required");
    }
}
