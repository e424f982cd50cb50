//! Trip checklist store.
//!
//! # Responsibility
//! - Own the todo and category collections and route every mutation through
//!   the defined operation set.
//! - Persist the full state through the storage seam before each mutating
//!   operation returns.
//!
//! # Invariants
//! - Insertion order of both collections is display order and survives
//!   persistence round-trips.
//! - Category rename and delete cascade to every todo referencing the name.
//! - Lookups that miss an id or name are silent no-ops; the store never
//!   signals "not found".
//!
//! # Caller contract
//! - Id uniqueness for todos and (case-insensitive) name uniqueness for
//!   categories are the caller's responsibility; the UI/FFI boundary runs
//!   the `model` validation helpers first. With duplicates present, update
//!   and toggle affect the first match only.

use crate::codec::{self, CodecError};
use crate::model::category::{default_categories, Category};
use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::storage::{StateStorage, StorageError, CATEGORIES_KEY, TODOS_KEY};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Load/persist failure for the checklist store.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Codec(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "corrupt persisted state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// Single-writer state container for todos and categories.
///
/// All mutation passes through the operations below; consumers read back
/// through the snapshot accessors. Every mutating operation writes the full
/// encoded state synchronously before returning.
#[derive(Debug)]
pub struct TodoStore<S: StateStorage> {
    todos: Vec<Todo>,
    categories: Vec<Category>,
    storage: S,
}

impl<S: StateStorage> TodoStore<S> {
    /// Loads persisted state, seeding defaults on first run.
    ///
    /// An absent todos value loads as an empty list. An absent **or empty**
    /// categories value loads as the four seed categories, so deleting every
    /// category resurrects the defaults on the next load.
    ///
    /// # Errors
    /// - Storage read failures.
    /// - Codec errors for corrupt persisted values.
    pub fn load(storage: S) -> StoreResult<Self> {
        let todos = match storage.read_value(TODOS_KEY)? {
            Some(value) => codec::decode_todos(&value)?,
            None => Vec::new(),
        };
        let categories = match storage.read_value(CATEGORIES_KEY)? {
            Some(value) if !value.is_empty() => codec::decode_categories(&value)?,
            _ => default_categories(),
        };

        info!(
            "event=store_load module=store status=ok todos={} categories={}",
            todos.len(),
            categories.len()
        );

        Ok(Self {
            todos,
            categories,
            storage,
        })
    }

    /// Snapshot of the current todos in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Snapshot of the current categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Appends a fully-formed todo.
    ///
    /// No id-uniqueness check is performed; with a duplicate id, later
    /// update/toggle calls affect the first match.
    pub fn add_todo(&mut self, todo: Todo) -> StoreResult<()> {
        self.todos.push(todo);
        self.persist()
    }

    /// Shallow-merges `patch` over the first todo with a matching id.
    ///
    /// Silent no-op (nothing persisted) when the id is absent.
    pub fn update_todo(&mut self, id: TodoId, patch: &TodoPatch) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            patch.apply_to(todo);
            return self.persist();
        }
        Ok(())
    }

    /// Removes every todo with a matching id.
    ///
    /// Removal is defensive against duplicate ids; an absent id still
    /// persists the (unchanged) state.
    pub fn delete_todo(&mut self, id: TodoId) -> StoreResult<()> {
        self.todos.retain(|todo| todo.id != id);
        self.persist()
    }

    /// Flips `done` on the first todo with a matching id.
    ///
    /// Silent no-op (nothing persisted) when the id is absent.
    pub fn toggle_todo(&mut self, id: TodoId) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.done = !todo.done;
            return self.persist();
        }
        Ok(())
    }

    /// Appends a category.
    ///
    /// No duplicate-name check is performed here; callers validate through
    /// `model::category::validate_new_name` first.
    pub fn add_category(&mut self, category: Category) -> StoreResult<()> {
        self.categories.push(category);
        self.persist()
    }

    /// Renames the category whose name equals `old_name` exactly, rewriting
    /// every todo that references it.
    ///
    /// Silent no-op when `old_name` is absent. `new_name` collisions are the
    /// caller's responsibility.
    pub fn update_category(&mut self, old_name: &str, new_name: &str) -> StoreResult<()> {
        if let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.name == old_name)
        {
            category.name = new_name.to_string();
            for todo in &mut self.todos {
                if todo.category == old_name {
                    todo.category = new_name.to_string();
                }
            }
            return self.persist();
        }
        Ok(())
    }

    /// Removes the category with a matching name and cascades the delete to
    /// every todo referencing it.
    ///
    /// Irreversible; an absent name still persists the (unchanged) state.
    pub fn delete_category(&mut self, name: &str) -> StoreResult<()> {
        self.categories.retain(|category| category.name != name);
        self.todos.retain(|todo| todo.category != name);
        self.persist()
    }

    /// Writes both encoded collections to their well-known keys.
    fn persist(&self) -> StoreResult<()> {
        self.storage
            .write_value(TODOS_KEY, &codec::encode_todos(&self.todos))?;
        self.storage
            .write_value(CATEGORIES_KEY, &codec::encode_categories(&self.categories))?;
        Ok(())
    }
}
