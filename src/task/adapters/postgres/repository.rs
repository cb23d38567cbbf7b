//! `PostgreSQL`-backed task repository.

use super::models::{NewTaskHistoryRow, NewTaskRow, TaskRow, TaskSummaryRow};
use super::schema::{task_history, tasks};
use crate::task::domain::{
    ActiveTask, CompletedTask, PersistedActiveTaskData, TaskHistory, TaskId, TaskName, TasksResult,
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::data_types::PgInterval;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{Timestamptz, Uuid as SqlUuid};

/// Connection pool used by the task repository.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

// justify_hours folds summed hours past 24 into a day component, so the
// rendered text stays day-style ("1 day 06:00:00") rather than "30:00:00".
const SUMMARY_SQL: &str = "SELECT name, \
     justify_hours(SUM(duration))::TEXT AS duration, \
     justify_hours(SUM(SUM(duration)) OVER ())::TEXT AS total_duration \
     FROM task_history \
     WHERE user_uuid = $1 AND end_time >= $2 \
     GROUP BY name \
     ORDER BY MIN(start_time)";

const MICROS_PER_DAY: i64 = 24 * 60 * 60 * 1_000_000;

/// Task repository backed by a `PostgreSQL` connection pool.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<T, F>(&self, operation: F) -> Result<T, TaskRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, TaskRepositoryError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(TaskRepositoryError::persistence)?;
            operation(&mut conn)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        TaskRepositoryError::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn start(&self, task: &ActiveTask) -> Result<(), TaskRepositoryError> {
        let row = NewTaskRow {
            uuid: task.id().into_inner(),
            user_uuid: task.user_id().into_inner(),
            name: task.name().as_str().to_owned(),
            start_time: task.started_at(),
            end_time: None,
        };
        let user_id = task.user_id();
        self.run_blocking(move |conn| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(conn)
                .map_err(|err| classify_start_error(err, user_id))?;
            Ok(())
        })
        .await
    }

    async fn find_active(&self, user_id: UserId) -> Result<Option<ActiveTask>, TaskRepositoryError> {
        let row = self
            .run_blocking(move |conn| {
                tasks::table
                    .filter(tasks::user_uuid.eq(user_id.into_inner()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(conn)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        row.map(row_to_active_task).transpose()
    }

    async fn finish_active(
        &self,
        user_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> Result<TaskHistory, TaskRepositoryError> {
        self.run_blocking(move |conn| {
            conn.transaction::<_, TaskRepositoryError, _>(|tx_conn| {
                let row = tasks::table
                    .filter(tasks::user_uuid.eq(user_id.into_inner()))
                    .select(TaskRow::as_select())
                    .for_update()
                    .first::<TaskRow>(tx_conn)
                    .optional()?
                    .ok_or(TaskRepositoryError::NoActiveTask(user_id))?;

                let task = row_to_active_task(row)?;
                let history = task.archive(ended_at);
                let micros = (ended_at - history.started_at)
                    .num_microseconds()
                    .ok_or_else(|| {
                        TaskRepositoryError::persistence(std::io::Error::other(
                            "task duration overflows interval microseconds",
                        ))
                    })?;

                diesel::update(tasks::table.filter(tasks::uuid.eq(history.task_id.into_inner())))
                    .set(tasks::end_time.eq(Some(ended_at)))
                    .execute(tx_conn)?;

                let archive_row = NewTaskHistoryRow {
                    uuid: history.id.into_inner(),
                    task_uuid: history.task_id.into_inner(),
                    user_uuid: history.user_id.into_inner(),
                    name: history.name.clone(),
                    start_time: history.started_at,
                    end_time: history.ended_at,
                    duration: interval_from_micros(micros)?,
                };
                diesel::insert_into(task_history::table)
                    .values(&archive_row)
                    .execute(tx_conn)?;

                diesel::delete(tasks::table.filter(tasks::uuid.eq(history.task_id.into_inner())))
                    .execute(tx_conn)?;

                Ok(history)
            })
        })
        .await
    }

    async fn period_summary(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Option<TasksResult>, TaskRepositoryError> {
        let rows = self
            .run_blocking(move |conn| {
                diesel::sql_query(SUMMARY_SQL)
                    .bind::<SqlUuid, _>(user_id.into_inner())
                    .bind::<Timestamptz, _>(since)
                    .load::<TaskSummaryRow>(conn)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };
        let total_duration = first.total_duration.clone();
        let completed = rows
            .into_iter()
            .map(|row| CompletedTask {
                name: row.name,
                duration: row.duration,
            })
            .collect();
        Ok(Some(TasksResult {
            total_duration,
            completed,
        }))
    }
}

/// Splits a microsecond count into an interval with an explicit day part.
///
/// Microsecond-only intervals render in hours-only style (`30:00:00`); the
/// day split keeps the stored text identical to timestamp subtraction.
fn interval_from_micros(micros: i64) -> Result<PgInterval, TaskRepositoryError> {
    let days = i32::try_from(micros.div_euclid(MICROS_PER_DAY))
        .map_err(TaskRepositoryError::persistence)?;
    Ok(PgInterval::new(micros.rem_euclid(MICROS_PER_DAY), days, 0))
}

fn classify_start_error(err: DieselError, user_id: UserId) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::ActiveTaskExists(user_id)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            TaskRepositoryError::UnknownUser(user_id)
        }
        other => TaskRepositoryError::persistence(other),
    }
}

fn row_to_active_task(row: TaskRow) -> Result<ActiveTask, TaskRepositoryError> {
    let name = TaskName::new(row.name).map_err(TaskRepositoryError::persistence)?;
    Ok(ActiveTask::from_persisted(PersistedActiveTaskData {
        id: TaskId::from_uuid(row.uuid),
        user_id: UserId::from_uuid(row.user_uuid),
        name,
        started_at: row.start_time,
    }))
}
