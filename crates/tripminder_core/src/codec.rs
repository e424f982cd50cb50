//! Flat-string persistence codec.
//!
//! # Responsibility
//! - Serialize todos and categories to the delimited text layout stored under
//!   the well-known state keys.
//! - Parse persisted values back, rejecting malformed records instead of
//!   masking them.
//!
//! # Format
//! - Todo record: `id|title|category|done`, records joined by `,`.
//! - Category record: `name|icon`, records joined by `,`.
//! - `done` is the literal `true` or `false`; anything else decodes as false.
//!
//! # Known limitation
//! - The format is lossy for values containing `|` or `,`: field and record
//!   boundaries become ambiguous and the encoding cannot be recovered. The
//!   round-trip contract holds only for delimiter-free values. Callers that
//!   accept free-form text should keep delimiters out of it.

use crate::model::category::Category;
use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIELD_SEPARATOR: char = '|';
const RECORD_SEPARATOR: char = ',';
const TODO_FIELD_COUNT: usize = 4;
const CATEGORY_FIELD_COUNT: usize = 2;

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode failure for persisted state values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A record did not split into the expected field count.
    MalformedRecord {
        kind: &'static str,
        expected_fields: usize,
        record: String,
    },
    /// A todo id field did not parse as an integer.
    InvalidId { value: String },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord {
                kind,
                expected_fields,
                record,
            } => write!(
                f,
                "malformed {kind} record `{record}`: expected {expected_fields} `|`-separated fields"
            ),
            Self::InvalidId { value } => write!(f, "invalid todo id `{value}`"),
        }
    }
}

impl Error for CodecError {}

/// Encodes todos as `id|title|category|done` records joined by `,`.
pub fn encode_todos(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| {
            format!(
                "{}{sep}{}{sep}{}{sep}{}",
                todo.id,
                todo.title,
                todo.category,
                todo.done,
                sep = FIELD_SEPARATOR
            )
        })
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

/// Encodes categories as `name|icon` records joined by `,`.
pub fn encode_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| format!("{}{FIELD_SEPARATOR}{}", category.name, category.icon))
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

/// Decodes a persisted todo value.
///
/// The empty string decodes to an empty list: an emptied checklist persists
/// as `""` and must not round-trip into a single malformed record.
///
/// # Errors
/// - `MalformedRecord` when a record does not have exactly four fields.
/// - `InvalidId` when an id field is not an integer.
pub fn decode_todos(value: &str) -> CodecResult<Vec<Todo>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(RECORD_SEPARATOR)
        .map(|record| {
            let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
            let [id, title, category, done] = fields.as_slice() else {
                return Err(CodecError::MalformedRecord {
                    kind: "todo",
                    expected_fields: TODO_FIELD_COUNT,
                    record: record.to_string(),
                });
            };
            let id = id.parse::<i64>().map_err(|_| CodecError::InvalidId {
                value: (*id).to_string(),
            })?;
            Ok(Todo {
                id,
                title: (*title).to_string(),
                category: (*category).to_string(),
                done: *done == "true",
            })
        })
        .collect()
}

/// Decodes a persisted category value.
///
/// The empty string decodes to an empty list; the seed-category fallback is
/// the store's load-path decision, not the codec's.
///
/// # Errors
/// - `MalformedRecord` when a record does not have exactly two fields.
pub fn decode_categories(value: &str) -> CodecResult<Vec<Category>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(RECORD_SEPARATOR)
        .map(|record| {
            let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
            let [name, icon] = fields.as_slice() else {
                return Err(CodecError::MalformedRecord {
                    kind: "category",
                    expected_fields: CATEGORY_FIELD_COUNT,
                    record: record.to_string(),
                });
            };
            Ok(Category {
                name: (*name).to_string(),
                icon: (*icon).to_string(),
            })
        })
        .collect()
}
