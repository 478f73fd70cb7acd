//! Todo Entity
//!
//! A task owned by one member, with a two-state status machine and a
//! derived overdue flag.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{MemberId, TodoId};
use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Todo status
///
/// Transitions: PENDING -> DONE (complete) and DONE -> PENDING (revert).
/// The transition that would be a no-op is rejected rather than silently
/// succeeding, so callers must mean what they ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    Pending,
    Done,
}

impl TodoStatus {
    /// Database representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "PENDING",
            TodoStatus::Done => "DONE",
        }
    }

    /// Parse the database representation
    pub fn parse(s: &str) -> Result<Self, TodoError> {
        match s {
            "PENDING" => Ok(TodoStatus::Pending),
            "DONE" => Ok(TodoStatus::Done),
            other => Err(TodoError::Internal(format!("Unknown todo status: {other}"))),
        }
    }
}

/// Todo entity
#[derive(Debug, Clone)]
pub struct Todo {
    /// Todo ID (UUID v4)
    pub todo_id: TodoId,
    /// Owning member, immutable after creation
    pub member_id: MemberId,
    /// Non-empty title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional due date (calendar date, no time component)
    pub due_date: Option<NaiveDate>,
    /// Completion status
    pub status: TodoStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new todo. Status always starts PENDING.
    pub fn new(
        member_id: MemberId,
        title: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TodoError> {
        let title = Self::validated_title(title)?;
        let now = Utc::now();

        Ok(Self {
            todo_id: TodoId::new(),
            member_id,
            title,
            description,
            due_date,
            status: TodoStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate from persisted fields
    #[allow(clippy::too_many_arguments)]
    pub fn from_db(
        todo_id: TodoId,
        member_id: MemberId,
        title: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        status: TodoStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            todo_id,
            member_id,
            title,
            description,
            due_date,
            status,
            created_at,
            updated_at,
        }
    }

    /// Reject empty or whitespace-only titles; stored as given otherwise
    fn validated_title(title: String) -> Result<String, TodoError> {
        if title.trim().is_empty() {
            return Err(TodoError::TitleRequired);
        }
        Ok(title)
    }

    /// Overwrite the title (same non-empty rule as creation)
    pub fn set_title(&mut self, title: String) -> Result<(), TodoError> {
        self.title = Self::validated_title(title)?;
        self.touch();
        Ok(())
    }

    /// Overwrite the description
    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
        self.touch();
    }

    /// Overwrite the due date
    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = Some(due_date);
        self.touch();
    }

    /// PENDING -> DONE; completing a DONE todo is an error, not a no-op
    pub fn complete(&mut self) -> Result<(), TodoError> {
        if self.status == TodoStatus::Done {
            return Err(TodoError::AlreadyDone);
        }
        self.status = TodoStatus::Done;
        self.touch();
        Ok(())
    }

    /// DONE -> PENDING; reverting a PENDING todo is an error, not a no-op
    pub fn revert(&mut self) -> Result<(), TodoError> {
        if self.status == TodoStatus::Pending {
            return Err(TodoError::AlreadyPending);
        }
        self.status = TodoStatus::Pending;
        self.touch();
        Ok(())
    }

    /// Derived, never persisted: a PENDING todo whose due date has passed.
    ///
    /// DONE todos are never overdue regardless of due date, and two reads
    /// of the same record on either side of the due instant may disagree.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == TodoStatus::Pending
            && self.due_date.map(|due| due < today).unwrap_or(false)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
