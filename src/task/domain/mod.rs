//! Domain model for task time tracking.
//!
//! The task domain models the single-active-task invariant, archival of
//! finished tasks, and period-window aggregation while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod history;
mod ids;
mod period;
mod task;

pub use error::TaskDomainError;
pub use history::{format_interval, CompletedTask, TaskHistory, TasksResult};
pub use ids::TaskId;
pub use period::Period;
pub use task::{ActiveTask, PersistedActiveTaskData, TaskName};
