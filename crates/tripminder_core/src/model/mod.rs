//! Domain model for the trip checklist.
//!
//! # Responsibility
//! - Define the canonical todo/category records used by core business logic.
//! - Provide the UI-facing validation helpers the store itself does not run.
//!
//! # Invariants
//! - A category's `name` is its identity; uniqueness is case-insensitive and
//!   enforced by callers before mutation, not inside the store.
//! - Every todo's `category` references an existing category name, maintained
//!   by the store's cascading rename/delete.

pub mod category;
pub mod todo;
