//! Core domain logic for TripMinder, a trip-planning checklist.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod timer;

pub use auth::{AuthError, AuthSession};
pub use codec::{decode_categories, decode_todos, encode_categories, encode_todos, CodecError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{
    default_categories, name_conflicts, validate_new_name, Category, CategoryValidationError,
    USER_CATEGORY_ICON,
};
pub use model::todo::{validate_title, Todo, TodoId, TodoPatch, TodoValidationError};
pub use storage::{
    SqliteStateStorage, StateStorage, StorageError, StorageResult, CATEGORIES_KEY, TODOS_KEY,
};
pub use store::{StoreError, StoreResult, TodoStore};
pub use timer::TripCountdown;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
