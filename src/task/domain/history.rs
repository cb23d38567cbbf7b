//! Immutable archive records and computed aggregation results.

use super::TaskId;
use crate::user::domain::UserId;
use chrono::{DateTime, TimeDelta, Utc};

/// Immutable record of a finished task.
///
/// Created once when a live task is archived; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHistory {
    /// Archive record identifier.
    pub id: TaskId,
    /// Identifier of the archived live task.
    pub task_id: TaskId,
    /// Owner of the task.
    pub user_id: UserId,
    /// Task name.
    pub name: String,
    /// When the task was started.
    pub started_at: DateTime<Utc>,
    /// When the task was stopped.
    pub ended_at: DateTime<Utc>,
    /// Elapsed time as interval text, e.g. `02:15:00`.
    pub duration: String,
}

/// A finished task's name and elapsed time, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTask {
    /// Task name.
    pub name: String,
    /// Elapsed time as interval text.
    pub duration: String,
}

/// Computed, non-persisted aggregate over archived tasks in a period window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksResult {
    /// Sum of all matching durations as interval text.
    pub total_duration: String,
    /// Per-name duration sums, in store aggregation order.
    pub completed: Vec<CompletedTask>,
}

/// Formats an elapsed time the way `PostgreSQL` renders interval text.
///
/// Durations under a day render as `HH:MM:SS`; longer ones gain a day part
/// (`1 day 02:00:00`, `3 days`). The time part is omitted when it is zero
/// and a day part is present.
#[must_use]
pub fn format_interval(elapsed: TimeDelta) -> String {
    let days = elapsed.num_days();
    let after_days = elapsed - TimeDelta::days(days);
    let hours = after_days.num_hours();
    let after_hours = after_days - TimeDelta::hours(hours);
    let minutes = after_hours.num_minutes();
    let seconds = (after_hours - TimeDelta::minutes(minutes)).num_seconds();

    let day_part = match days {
        0 => None,
        1 => Some("1 day".to_owned()),
        n => Some(format!("{n} days")),
    };

    match day_part {
        None => format!("{hours:02}:{minutes:02}:{seconds:02}"),
        Some(day_part) if hours == 0 && minutes == 0 && seconds == 0 => day_part,
        Some(day_part) => format!("{day_part} {hours:02}:{minutes:02}:{seconds:02}"),
    }
}
