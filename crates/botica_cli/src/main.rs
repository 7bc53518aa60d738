//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise core wiring end-to-end.
//! - Stand in for the dashboard UI: seed a checklist, run one scheduler
//!   pass, print the resulting notification events.

use botica_core::service::runtime;
use botica_core::{
    default_log_level, init_logging, open_store, open_store_in_memory, DailyReset, KvStore,
    KvTaskRepository, LogSink, TaskService,
};

const SEED_TASKS: &[(&str, &str)] = &[
    ("Abrir farmacia", "09:00"),
    ("Contar caja", "14:00"),
    ("Cerrar farmacia", "21:30"),
];

fn main() {
    if let Err(err) = init_logging(default_log_level(), LogSink::Stderr) {
        eprintln!("logging unavailable: {err}");
    }

    println!("botica_core version={}", botica_core::core_version());

    let opened = match std::env::args().nth(1) {
        Some(path) => open_store(path),
        None => open_store_in_memory(),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open store: {err}");
            std::process::exit(1);
        }
    };

    let kv = KvStore::new(&conn);
    let repo = match KvTaskRepository::open(kv) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("cannot load task list: {err}");
            std::process::exit(1);
        }
    };
    let mut service = TaskService::new(repo, DailyReset::new(kv));

    if service.tasks().is_empty() {
        for (title, time) in SEED_TASKS {
            if let Err(err) = service.create(title, time) {
                eprintln!("cannot seed task `{title}`: {err}");
            }
        }
    }

    for task in service.tasks() {
        println!(
            "task {} {} completed={}",
            task.wire_time(),
            task.title,
            task.completed
        );
    }

    // Pre-armed shutdown: the loop runs its immediate tick, then exits.
    let (handle, shutdown) = runtime::shutdown_channel();
    handle.stop();
    let result = runtime::run(&mut service, runtime::TICK_INTERVAL, &shutdown, |event| {
        println!("notification [{:?}] {}: {}", event.kind, event.title, event.body);
    });
    if let Err(err) = result {
        eprintln!("scheduler pass failed: {err}");
        std::process::exit(1);
    }
}
