use botica_core::store::TASKS_KEY;
use botica_core::{
    open_store, open_store_in_memory, KvStore, KvTaskRepository, RepoError, TaskRepository,
    TaskValidationError,
};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_assigns_unique_ids() {
    let conn = open_store_in_memory().unwrap();
    let mut repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();

    let mut ids = HashSet::new();
    for index in 0..50 {
        let id = repo.create(&format!("Tarea {index}"), "08:00").unwrap();
        assert!(ids.insert(id), "duplicate id generated");
    }

    assert_eq!(repo.tasks().len(), 50);
}

#[test]
fn create_appends_incomplete_task_and_persists() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);
    let mut repo = KvTaskRepository::open(kv).unwrap();
    repo.create("Revisar neveras", "08:30").unwrap();

    let id = repo.create("Contar caja", "14:00").unwrap();

    assert_eq!(repo.tasks().len(), 2);
    let created = &repo.tasks()[1];
    assert_eq!(created.id, id);
    assert_eq!(created.title, "Contar caja");
    assert!(!created.completed);

    // The persisted record reflects both entries.
    let reloaded = KvTaskRepository::open(kv).unwrap();
    assert_eq!(reloaded.tasks(), repo.tasks());
}

#[test]
fn create_rejects_invalid_input_without_state_change() {
    let conn = open_store_in_memory().unwrap();
    let mut repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();

    let err = repo.create("", "09:00").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::EmptyTitle)
    ));

    let err = repo.create("Pedido semanal", "9 en punto").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TaskValidationError::InvalidTime(_))
    ));

    assert!(repo.tasks().is_empty());
}

#[test]
fn update_replaces_fields_preserving_id_and_completed() {
    let conn = open_store_in_memory().unwrap();
    let mut repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();
    let id = repo.create("Pedido semanal", "10:30").unwrap();
    repo.toggle_completion(id).unwrap();

    assert!(repo.update(id, "Pedido mensual", "11:45").unwrap());

    let task = &repo.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Pedido mensual");
    assert_eq!(task.wire_time(), "11:45");
    assert!(task.completed);
}

#[test]
fn mutations_on_unknown_ids_are_silent_no_ops() {
    let conn = open_store_in_memory().unwrap();
    let mut repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();
    repo.create("Contar caja", "14:00").unwrap();
    let before = repo.tasks().to_vec();

    let ghost = Uuid::new_v4();
    assert!(!repo.update(ghost, "Nada", "00:00").unwrap());
    assert!(!repo.delete(ghost).unwrap());
    assert!(!repo.toggle_completion(ghost).unwrap());

    assert_eq!(repo.tasks(), before.as_slice());
}

#[test]
fn delete_removes_matching_task() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);
    let mut repo = KvTaskRepository::open(kv).unwrap();
    let keep = repo.create("Revisar neveras", "08:30").unwrap();
    let gone = repo.create("Contar caja", "14:00").unwrap();

    assert!(repo.delete(gone).unwrap());

    assert_eq!(repo.tasks().len(), 1);
    assert_eq!(repo.tasks()[0].id, keep);

    let reloaded = KvTaskRepository::open(kv).unwrap();
    assert_eq!(reloaded.tasks().len(), 1);
}

#[test]
fn round_trip_preserves_the_list_including_empty() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);

    // Empty list round trip.
    let repo = KvTaskRepository::open(kv).unwrap();
    assert!(repo.tasks().is_empty());
    drop(repo);
    assert!(KvTaskRepository::open(kv).unwrap().tasks().is_empty());

    // Populated round trip, completion state included.
    let mut repo = KvTaskRepository::open(kv).unwrap();
    repo.create("Revisar neveras", "08:30").unwrap();
    let id = repo.create("Contar caja", "14:00").unwrap();
    repo.toggle_completion(id).unwrap();
    let original = repo.tasks().to_vec();
    drop(repo);

    let reloaded = KvTaskRepository::open(kv).unwrap();
    assert_eq!(reloaded.tasks(), original.as_slice());
}

#[test]
fn malformed_persisted_record_recovers_to_empty_list() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);
    kv.put(TASKS_KEY, "{this is not a task list").unwrap();

    let repo = KvTaskRepository::open(kv).unwrap();
    assert!(repo.tasks().is_empty());
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("botica.db");

    {
        let conn = open_store(&path).unwrap();
        let mut repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();
        repo.create("Contar caja", "14:00").unwrap();
    }

    let conn = open_store(&path).unwrap();
    let repo = KvTaskRepository::open(KvStore::new(&conn)).unwrap();
    assert_eq!(repo.tasks().len(), 1);
    assert_eq!(repo.tasks()[0].title, "Contar caja");
}
