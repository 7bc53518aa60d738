//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Own the in-memory task list and mediate all persistence round-trips.
//! - Isolate key-value record details from service orchestration.
//!
//! # Invariants
//! - Repository writes validate input before touching state.
//! - Unknown-id mutations are silent no-ops, never errors.

pub mod task_repo;
