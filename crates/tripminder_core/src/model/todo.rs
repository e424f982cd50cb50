//! Todo domain model.
//!
//! # Responsibility
//! - Define the checklist item record and its partial-update shape.
//! - Host title validation used by UI/FFI callers before dispatching.
//!
//! # Invariants
//! - `id` is caller-assigned (epoch milliseconds by convention) and expected
//!   unique; the store does not defend against collisions.
//! - `category` must equal the `name` of an existing category at the time of
//!   creation or update.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-assigned stable identifier for a todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// A single checklist item grouped under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Caller-assigned unique id, conventionally the creation timestamp in
    /// epoch milliseconds.
    pub id: TodoId,
    /// Non-empty display title.
    pub title: String,
    /// Name of the owning category.
    pub category: String,
    /// Completion flag, `false` at creation.
    pub done: bool,
}

impl Todo {
    /// Creates an incomplete todo under the given category.
    pub fn new(id: TodoId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            done: false,
        }
    }
}

/// Partial field set for shallow-merge updates.
///
/// `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    /// Merges the set fields over `todo` in place.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(category) = &self.category {
            todo.category = category.clone();
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
    }
}

/// Validation failure for UI-entered todo fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title cannot be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Validates a user-entered title, returning the trimmed form.
///
/// The store accepts whatever it is given; this check belongs to the UI/FFI
/// boundary, which rejects whitespace-only input before dispatching.
///
/// # Errors
/// - `EmptyTitle` when the title is empty after trimming.
pub fn validate_title(raw: &str) -> Result<String, TodoValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
