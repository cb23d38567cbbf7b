//! In-memory adapters for task tracking, used by tests and local runs.

mod task;

pub use task::InMemoryTaskRepository;
