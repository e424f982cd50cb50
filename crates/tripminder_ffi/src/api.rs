//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level store/auth/countdown functions to the UI
//!   shell via FRB.
//! - Run the UI-layer validation (empty titles/names, duplicate category
//!   names) and the demo login gate before dispatching into the store.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Category and trip-date mutations require an authenticated session;
//!   todo mutations do not. The store itself performs no authorization
//!   checks.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};
use tripminder_core::db::open_db;
use tripminder_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    validate_new_name, validate_title, AuthSession, Category, SqliteStateStorage, Todo, TodoPatch,
    TodoStore, TripCountdown, USER_CATEGORY_ICON,
};

const DB_FILE_NAME: &str = "tripminder.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Store action response envelope.
///
/// `state_json` carries the post-action snapshot as
/// `{"todos": [...], "categories": [...]}` so the UI can re-render without
/// a second round-trip; it is empty when `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// JSON snapshot of the current state, empty on failure.
    pub state_json: String,
}

impl StoreResponse {
    fn success(message: impl Into<String>, state_json: String) -> Self {
        Self {
            ok: true,
            message: message.into(),
            state_json,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            state_json: String::new(),
        }
    }
}

/// Returns the current store snapshot.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn store_snapshot() -> StoreResponse {
    with_store("store_snapshot", |_| Ok("Snapshot.".to_string()))
}

/// Adds a todo under an existing category.
///
/// The id is assigned here from the current epoch-millisecond clock, the
/// same convention the web UI used. Blank titles are rejected before the
/// store is touched.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(title: String, category: String) -> StoreResponse {
    let title = match validate_title(&title) {
        Ok(title) => title,
        Err(err) => return StoreResponse::failure(err.to_string()),
    };
    with_store("todo_add", move |store| {
        store.add_todo(Todo::new(epoch_ms_now(), title, category))?;
        Ok("Todo added.".to_string())
    })
}

/// Updates fields on an existing todo; absent ids are a silent no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_update(
    id: i64,
    title: Option<String>,
    category: Option<String>,
    done: Option<bool>,
) -> StoreResponse {
    let title = match title.map(|t| validate_title(&t)).transpose() {
        Ok(title) => title,
        Err(err) => return StoreResponse::failure(err.to_string()),
    };
    with_store("todo_update", move |store| {
        store.update_todo(
            id,
            &TodoPatch {
                title,
                category,
                done,
            },
        )?;
        Ok("Todo updated.".to_string())
    })
}

/// Deletes a todo by id; absent ids are a silent no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: i64) -> StoreResponse {
    with_store("todo_delete", move |store| {
        store.delete_todo(id)?;
        Ok("Todo deleted.".to_string())
    })
}

/// Toggles a todo's completion flag; absent ids are a silent no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: i64) -> StoreResponse {
    with_store("todo_toggle", move |store| {
        store.toggle_todo(id)?;
        Ok("Todo toggled.".to_string())
    })
}

/// Adds a category with the user-category icon.
///
/// Requires an authenticated session. Blank and (case-insensitively)
/// duplicate names are rejected before the store is touched.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn category_add(name: String) -> StoreResponse {
    if !is_authenticated() {
        return StoreResponse::failure("Login required.");
    }
    with_store("category_add", move |store| {
        let name = validate_new_name(store.categories(), &name).map_err(|err| err.to_string())?;
        store.add_category(Category::new(name, USER_CATEGORY_ICON))?;
        Ok("Category added.".to_string())
    })
}

/// Renames a category, cascading to its todos.
///
/// Requires an authenticated session. The new name must be non-blank and
/// must not collide with an existing category. A missing `old_name` leaves
/// state untouched and reports it in the response message.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn category_rename(old_name: String, new_name: String) -> StoreResponse {
    if !is_authenticated() {
        return StoreResponse::failure("Login required.");
    }
    with_store("category_rename", move |store| {
        // The store itself stays a silent no-op for missing names; only the
        // response message reports it.
        if store.categories().iter().all(|c| c.name != old_name) {
            return Ok("No such category.".to_string());
        }
        let new_name =
            validate_new_name(store.categories(), &new_name).map_err(|err| err.to_string())?;
        store.update_category(&old_name, &new_name)?;
        Ok("Category renamed.".to_string())
    })
}

/// Deletes a category and every todo in it.
///
/// Requires an authenticated session. Irreversible; the UI confirms first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn category_delete(name: String) -> StoreResponse {
    if !is_authenticated() {
        return StoreResponse::failure("Login required.");
    }
    with_store("category_delete", move |store| {
        store.delete_category(&name)?;
        Ok("Category deleted.".to_string())
    })
}

/// Authentication state for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<String>,
}

/// Attempts a demo login.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(username: String, password: String) -> AuthStatus {
    let mut session = auth_session_lock();
    let _ = session.login(&username, &password);
    status_of(&session)
}

/// Clears the demo session.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() -> AuthStatus {
    let mut session = auth_session_lock();
    session.logout();
    status_of(&session)
}

/// Returns the current authentication state.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_status() -> AuthStatus {
    status_of(&auth_session_lock())
}

/// Sets the trip date used by the countdown. Requires authentication.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; returns `false` when not authenticated.
#[flutter_rust_bridge::frb(sync)]
pub fn trip_set_date(target_epoch_ms: i64) -> bool {
    if !is_authenticated() {
        return false;
    }
    countdown_lock().set_target(target_epoch_ms);
    true
}

/// Clears the trip date. Requires authentication.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; returns `false` when not authenticated.
#[flutter_rust_bridge::frb(sync)]
pub fn trip_clear_date() -> bool {
    if !is_authenticated() {
        return false;
    }
    countdown_lock().clear_target();
    true
}

/// Whole days until the trip, rounded up, or `None` when no date is set.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn trip_days_left() -> Option<i64> {
    countdown_lock().days_left(epoch_ms_now())
}

fn with_store(
    op: &str,
    f: impl FnOnce(&mut TodoStore<SqliteStateStorage<'_>>) -> Result<String, StoreOpError>,
) -> StoreResponse {
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            log::error!("event=store_op module=ffi status=error op={op} error={err}");
            return StoreResponse::failure(format!("{op} failed: {err}"));
        }
    };
    let mut store = match TodoStore::load(SqliteStateStorage::new(&conn)) {
        Ok(store) => store,
        Err(err) => {
            log::error!("event=store_op module=ffi status=error op={op} error={err}");
            return StoreResponse::failure(format!("{op} failed: {err}"));
        }
    };

    match f(&mut store) {
        Ok(message) => StoreResponse::success(message, snapshot_json(&store)),
        Err(StoreOpError::Rejected(message)) => StoreResponse::failure(message),
        Err(StoreOpError::Store(err)) => StoreResponse::failure(format!("{op} failed: {err}")),
    }
}

enum StoreOpError {
    /// Validation rejected the input before the store was touched.
    Rejected(String),
    Store(tripminder_core::StoreError),
}

impl From<tripminder_core::StoreError> for StoreOpError {
    fn from(value: tripminder_core::StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<String> for StoreOpError {
    fn from(value: String) -> Self {
        Self::Rejected(value)
    }
}

fn snapshot_json(store: &TodoStore<SqliteStateStorage<'_>>) -> String {
    serde_json::json!({
        "todos": store.todos(),
        "categories": store.categories(),
    })
    .to_string()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TRIPMINDER_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn is_authenticated() -> bool {
    auth_session_lock().is_authenticated()
}

fn auth_session_lock() -> MutexGuard<'static, AuthSession> {
    static SESSION: OnceLock<Mutex<AuthSession>> = OnceLock::new();
    SESSION
        .get_or_init(|| Mutex::new(AuthSession::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn countdown_lock() -> MutexGuard<'static, TripCountdown> {
    static COUNTDOWN: OnceLock<Mutex<TripCountdown>> = OnceLock::new();
    COUNTDOWN
        .get_or_init(|| Mutex::new(TripCountdown::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn status_of(session: &AuthSession) -> AuthStatus {
    AuthStatus {
        authenticated: session.is_authenticated(),
        user: session.current_user().map(str::to_owned),
    }
}

fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{
        auth_login, auth_logout, auth_status, category_add, category_rename, core_version,
        epoch_ms_now, init_logging, ping, store_snapshot, todo_add, trip_clear_date,
        trip_days_left, trip_set_date,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_log_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(error.contains("absolute"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn todo_add_rejects_blank_title() {
        let response = todo_add("   ".to_string(), "Packing".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("empty"));
    }

    #[test]
    fn store_snapshot_returns_state_payload() {
        let response = store_snapshot();
        assert!(response.ok, "{}", response.message);
        let value: serde_json::Value = serde_json::from_str(&response.state_json).unwrap();
        assert!(value["todos"].is_array());
        assert!(value["categories"].is_array());
    }

    // The session and countdown are process-wide, so the whole gate flow
    // lives in one test to keep login state deterministic under parallel
    // test execution.
    #[test]
    fn auth_gate_guards_category_and_trip_mutations() {
        let blocked = category_add("Blocked".to_string());
        assert!(!blocked.ok);
        assert_eq!(blocked.message, "Login required.");
        assert!(!trip_set_date(1_700_000_000_000));
        assert!(!trip_clear_date());

        let rejected = auth_login("admin".to_string(), "hunter2".to_string());
        assert!(!rejected.authenticated);
        assert!(!auth_status().authenticated);

        let logged_in = auth_login("admin".to_string(), "password".to_string());
        assert!(logged_in.authenticated);
        assert_eq!(logged_in.user.as_deref(), Some("admin"));

        assert!(trip_set_date(epoch_ms_now() + 86_400_000));
        assert_eq!(trip_days_left(), Some(1));
        assert!(trip_clear_date());
        assert_eq!(trip_days_left(), None);

        let name = unique_token("Gear");
        let added = category_add(name.clone());
        assert!(added.ok, "{}", added.message);
        assert!(added.state_json.contains(&name));

        let duplicate = category_add(name.to_lowercase());
        assert!(!duplicate.ok);
        assert!(duplicate.message.contains("already exists"));

        let missing = category_rename(unique_token("missing"), unique_token("target"));
        assert!(missing.ok, "{}", missing.message);
        assert_eq!(missing.message, "No such category.");

        let logged_out = auth_logout();
        assert!(!logged_out.authenticated);
        assert_eq!(logged_out.user, None);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
