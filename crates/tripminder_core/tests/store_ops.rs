use tripminder_core::db::open_db_in_memory;
use tripminder_core::{SqliteStateStorage, Todo, TodoPatch, TodoStore};

fn packing_todo(id: i64, title: &str) -> Todo {
    Todo::new(id, title, "Packing")
}

#[test]
fn add_todo_appends_and_is_retrievable_by_id() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    assert_eq!(store.todos().len(), 0);

    store.add_todo(packing_todo(1, "Pack passport")).unwrap();

    assert_eq!(store.todos().len(), 1);
    let todo = store.todos().iter().find(|t| t.id == 1).unwrap();
    assert_eq!(todo.title, "Pack passport");
    assert_eq!(todo.category, "Packing");
    assert!(!todo.done);
}

#[test]
fn add_then_toggle_marks_done() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();

    store.add_todo(packing_todo(1, "Pack passport")).unwrap();
    store.toggle_todo(1).unwrap();

    assert_eq!(store.todos().len(), 1);
    assert!(store.todos()[0].done);
}

#[test]
fn toggling_twice_restores_original_state() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(7, "Charge camera")).unwrap();

    store.toggle_todo(7).unwrap();
    store.toggle_todo(7).unwrap();

    assert!(!store.todos()[0].done);
}

#[test]
fn toggling_absent_id_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(1, "Pack shoes")).unwrap();

    store.toggle_todo(999).unwrap();

    assert_eq!(store.todos().len(), 1);
    assert!(!store.todos()[0].done);
}

#[test]
fn update_todo_merges_patch_over_first_match() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(1, "Pack shirts")).unwrap();

    store
        .update_todo(
            1,
            &TodoPatch {
                title: Some("Pack warm shirts".to_string()),
                category: Some("Bucket List".to_string()),
                done: None,
            },
        )
        .unwrap();

    let todo = &store.todos()[0];
    assert_eq!(todo.title, "Pack warm shirts");
    assert_eq!(todo.category, "Bucket List");
    assert!(!todo.done);
}

#[test]
fn update_absent_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(1, "Pack hat")).unwrap();

    store
        .update_todo(
            2,
            &TodoPatch {
                title: Some("never applied".to_string()),
                ..TodoPatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.todos()[0].title, "Pack hat");
}

#[test]
fn delete_todo_removes_all_matching_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    // Ids are expected unique, but deletion is defensive about duplicates.
    store.add_todo(packing_todo(1, "first")).unwrap();
    store.add_todo(packing_todo(1, "shadowed duplicate")).unwrap();
    store.add_todo(packing_todo(2, "keep me")).unwrap();

    store.delete_todo(1).unwrap();

    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].id, 2);
}

#[test]
fn duplicate_ids_affect_first_match_only_on_toggle() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(5, "first")).unwrap();
    store.add_todo(packing_todo(5, "second")).unwrap();

    store.toggle_todo(5).unwrap();

    assert!(store.todos()[0].done);
    assert!(!store.todos()[1].done);
}

#[test]
fn rename_category_cascades_to_todos() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(1, "Pack passport")).unwrap();
    store.add_todo(packing_todo(2, "Pack socks")).unwrap();
    store
        .add_todo(Todo::new(3, "Print visa", "Documents"))
        .unwrap();

    store.update_category("Packing", "Luggage").unwrap();

    let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Luggage"));
    assert!(!names.contains(&"Packing"));
    assert_eq!(store.todos().len(), 3);
    assert!(store
        .todos()
        .iter()
        .filter(|t| t.id == 1 || t.id == 2)
        .all(|t| t.category == "Luggage"));
    assert_eq!(store.todos()[2].category, "Documents");
}

#[test]
fn rename_keeps_category_icon_and_position() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();

    store.update_category("Trip Planner", "Itinerary").unwrap();

    assert_eq!(store.categories()[1].name, "Itinerary");
    assert_eq!(store.categories()[1].icon, "📅");
}

#[test]
fn rename_absent_category_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();

    store.update_category("No Such Category", "Whatever").unwrap();

    assert_eq!(store.categories().len(), 4);
    assert!(store.categories().iter().all(|c| c.name != "Whatever"));
}

#[test]
fn delete_category_cascades_to_its_todos() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();
    store.add_todo(packing_todo(1, "Pack passport")).unwrap();
    store
        .add_todo(Todo::new(2, "Print visa", "Documents"))
        .unwrap();

    store.delete_category("Packing").unwrap();

    assert!(store.categories().iter().all(|c| c.name != "Packing"));
    assert!(store.todos().iter().all(|t| t.category != "Packing"));
    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].id, 2);
    assert_eq!(store.categories().len(), 3);
}

#[test]
fn add_category_appends_at_the_end() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TodoStore::load(SqliteStateStorage::new(&conn)).unwrap();

    store
        .add_category(tripminder_core::Category::new("Food", "📁"))
        .unwrap();

    assert_eq!(store.categories().len(), 5);
    assert_eq!(store.categories()[4].name, "Food");
    assert_eq!(store.categories()[4].icon, "📁");
}
