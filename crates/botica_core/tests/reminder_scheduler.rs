use botica_core::store::RESET_MARKER_KEY;
use botica_core::{
    open_store_in_memory, DailyReset, KvStore, KvTaskRepository, NotificationKind, TaskService,
};
use chrono::{NaiveDate, NaiveDateTime};

fn service<'conn>(kv: KvStore<'conn>) -> TaskService<'conn, KvTaskRepository<'conn>> {
    let repo = KvTaskRepository::open(kv).unwrap();
    TaskService::new(repo, DailyReset::new(kv))
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 15)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn pre_due_notification_fires_exactly_once_per_day() {
    let conn = open_store_in_memory().unwrap();
    let mut service = service(KvStore::new(&conn));
    service.create("Contar caja", "09:00").unwrap();

    let first = service.tick(at(8, 35)).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].kind, NotificationKind::PreDue);
    assert_eq!(first[0].title, "Contar caja");

    assert!(service.tick(at(8, 40)).unwrap().is_empty());
    assert!(service.tick(at(8, 59)).unwrap().is_empty());
}

#[test]
fn completed_task_never_produces_a_due_notification() {
    let conn = open_store_in_memory().unwrap();
    let mut service = service(KvStore::new(&conn));
    let id = service.create("Contar caja", "09:00").unwrap();

    // First tick pins today's reset so completion survives later ticks.
    service.tick(at(8, 0)).unwrap();
    service.toggle_completion(id).unwrap();

    assert!(service.tick(at(9, 0)).unwrap().is_empty());
    assert!(service.tick(at(9, 30)).unwrap().is_empty());
}

#[test]
fn due_notification_repeats_on_later_ticks_but_not_within_one() {
    let conn = open_store_in_memory().unwrap();
    let mut service = service(KvStore::new(&conn));
    service.create("Contar caja", "09:00").unwrap();
    service.tick(at(8, 0)).unwrap();

    let due = service.tick(at(9, 0)).unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].kind, NotificationKind::Due);

    // Re-evaluating the same minute is a no-op; the next minute re-fires.
    assert!(service.tick(at(9, 0)).unwrap().is_empty());
    assert_eq!(service.tick(at(9, 1)).unwrap().len(), 1);
}

#[test]
fn day_rollover_resets_flags_before_scanning() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);
    let mut service = service(kv);
    let id = service.create("Contar caja", "09:00").unwrap();

    service.tick(at(8, 0)).unwrap();
    service.toggle_completion(id).unwrap();
    assert!(service.tick(at(9, 0)).unwrap().is_empty());

    // Same wall-clock scan on the next day: the reset must clear the flag
    // first, so the task is due again.
    kv.put(RESET_MARKER_KEY, "2024-04-14").unwrap();
    let next_day = service.tick(at(9, 0)).unwrap();
    assert_eq!(next_day.len(), 1);
    assert_eq!(next_day[0].kind, NotificationKind::Due);
    assert!(!service.tasks()[0].completed);
}

#[test]
fn day_rollover_rearms_pre_due_notifications() {
    let conn = open_store_in_memory().unwrap();
    let kv = KvStore::new(&conn);
    let mut service = service(kv);
    service.create("Contar caja", "09:00").unwrap();

    assert_eq!(service.tick(at(8, 35)).unwrap().len(), 1);
    assert!(service.tick(at(8, 40)).unwrap().is_empty());

    // Pretend yesterday's marker is stored: the ledger clears and the same
    // wall-clock tick fires a fresh pre-due reminder.
    kv.put(RESET_MARKER_KEY, "2024-04-14").unwrap();
    assert_eq!(service.tick(at(8, 45)).unwrap().len(), 1);
}

#[test]
fn tasks_due_the_same_minute_each_notify() {
    let conn = open_store_in_memory().unwrap();
    let mut service = service(KvStore::new(&conn));
    service.create("Contar caja", "09:00").unwrap();
    service.create("Revisar neveras", "09:00").unwrap();
    service.tick(at(8, 0)).unwrap();

    let due = service.tick(at(9, 0)).unwrap();
    assert_eq!(due.len(), 2);
    assert_ne!(due[0].task_id, due[1].task_id);
}
