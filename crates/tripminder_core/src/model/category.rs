//! Category domain model.
//!
//! # Responsibility
//! - Define the named, iconized grouping bucket for todos.
//! - Provide the seed set used on first run and the caller-side name checks.
//!
//! # Invariants
//! - `name` acts as the category's identity; comparisons for uniqueness are
//!   case-insensitive, while store lookups match the name exactly.
//! - `icon` carries no uniqueness constraint.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Icon assigned to user-created categories.
pub const USER_CATEGORY_ICON: &str = "📁";

/// A named grouping bucket for todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique (case-insensitive) display name; the category's identity.
    pub name: String,
    /// Short display glyph, usually an emoji.
    pub icon: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Returns the four seed categories used when no persisted state exists.
///
/// Order is meaningful: it is the initial display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Packing", "🧳"),
        Category::new("Trip Planner", "📅"),
        Category::new("Documents", "📂"),
        Category::new("Bucket List", "🌍"),
    ]
}

/// Validation failure for UI-entered category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    DuplicateName(String),
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name cannot be empty"),
            Self::DuplicateName(name) => write!(f, "category `{name}` already exists"),
        }
    }
}

impl Error for CategoryValidationError {}

/// Returns whether `name` collides case-insensitively with an existing
/// category name.
pub fn name_conflicts(existing: &[Category], name: &str) -> bool {
    let lowered = name.to_lowercase();
    existing
        .iter()
        .any(|category| category.name.to_lowercase() == lowered)
}

/// Validates a user-entered category name against the current category set,
/// returning the trimmed form.
///
/// The store appends whatever it is given; this check belongs to the UI/FFI
/// boundary, which runs it before `add_category`/`update_category`.
///
/// # Errors
/// - `EmptyName` when the name is empty after trimming.
/// - `DuplicateName` when the trimmed name collides case-insensitively with
///   an existing category.
pub fn validate_new_name(
    existing: &[Category],
    raw: &str,
) -> Result<String, CategoryValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    if name_conflicts(existing, trimmed) {
        return Err(CategoryValidationError::DuplicateName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        default_categories, name_conflicts, validate_new_name, Category, CategoryValidationError,
    };

    #[test]
    fn default_categories_keep_seed_order() {
        let seeds = default_categories();
        let names = seeds.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Packing", "Trip Planner", "Documents", "Bucket List"]);
        assert_eq!(seeds[0].icon, "🧳");
        assert_eq!(seeds[3].icon, "🌍");
    }

    #[test]
    fn name_conflicts_is_case_insensitive() {
        let existing = vec![Category::new("Packing", "🧳")];
        assert!(name_conflicts(&existing, "packing"));
        assert!(name_conflicts(&existing, "PACKING"));
        assert!(!name_conflicts(&existing, "Packing list"));
    }

    #[test]
    fn validate_new_name_trims_input() {
        let existing = default_categories();
        assert_eq!(validate_new_name(&existing, "  Food  ").unwrap(), "Food");
    }

    #[test]
    fn validate_new_name_rejects_blank_and_duplicates() {
        let existing = default_categories();
        assert_eq!(
            validate_new_name(&existing, " "),
            Err(CategoryValidationError::EmptyName)
        );
        assert_eq!(
            validate_new_name(&existing, "documents"),
            Err(CategoryValidationError::DuplicateName(
                "documents".to_string()
            ))
        );
    }
}
