//! Diesel row models for task tracking persistence.

use super::schema::{task_history, tasks};
use chrono::{DateTime, Utc};
use diesel::pg::data_types::PgInterval;
use diesel::prelude::*;

/// Query result row for live task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub uuid: uuid::Uuid,
    /// Owner identifier.
    pub user_uuid: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Start timestamp.
    pub start_time: DateTime<Utc>,
    /// End timestamp; null while the task is live.
    pub end_time: Option<DateTime<Utc>>,
}

/// Insert model for live task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub uuid: uuid::Uuid,
    /// Owner identifier.
    pub user_uuid: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Start timestamp.
    pub start_time: DateTime<Utc>,
    /// End timestamp; null on insert.
    pub end_time: Option<DateTime<Utc>>,
}

/// Insert model for archive records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_history)]
pub struct NewTaskHistoryRow {
    /// Archive record identifier.
    pub uuid: uuid::Uuid,
    /// Identifier of the archived live task.
    pub task_uuid: uuid::Uuid,
    /// Owner identifier.
    pub user_uuid: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Start timestamp.
    pub start_time: DateTime<Utc>,
    /// End timestamp.
    pub end_time: DateTime<Utc>,
    /// Elapsed time between start and end.
    pub duration: PgInterval,
}

/// Aggregation row produced by the period summary query.
#[derive(Debug, Clone, QueryableByName)]
pub struct TaskSummaryRow {
    /// Task name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// Per-name duration sum as interval text.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub duration: String,
    /// Grand-total duration as interval text, repeated on every row.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub total_duration: String,
}
