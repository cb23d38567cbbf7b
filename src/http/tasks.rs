//! Task tracking HTTP handlers.
//!
//! ```text
//! POST /api/users/{uuid}/tasks/start
//! POST /api/users/{uuid}/tasks/stop
//! GET  /api/users/{uuid}/tasks/result
//! ```

use super::{parse_user_id, ApiError, HttpState};
use crate::task::domain::{ActiveTask, CompletedTask, Period, TasksResult};
use crate::task::services::{StartTaskRequest, TaskServiceError};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Request payload for starting a task.
#[derive(Debug, Deserialize)]
pub(super) struct StartTaskPayload {
    name: String,
}

/// Live task as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskResponse {
    uuid: Uuid,
    user_uuid: Uuid,
    name: String,
    start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
}

impl From<ActiveTask> for TaskResponse {
    fn from(task: ActiveTask) -> Self {
        Self {
            uuid: task.id().into_inner(),
            user_uuid: task.user_id().into_inner(),
            name: task.name().as_str().to_owned(),
            start_time: task.started_at(),
            end_time: None,
        }
    }
}

/// Finished task as returned on the wire.
#[derive(Debug, Serialize)]
pub(super) struct CompletedTaskResponse {
    name: String,
    duration: String,
}

impl From<CompletedTask> for CompletedTaskResponse {
    fn from(task: CompletedTask) -> Self {
        Self {
            name: task.name,
            duration: task.duration,
        }
    }
}

/// Aggregated result as returned on the wire. The `CompletedTask` key keeps
/// the original service's exact response shape.
#[derive(Debug, Serialize)]
pub(super) struct TasksResultResponse {
    #[serde(rename = "totalDuration")]
    total_duration: String,
    #[serde(rename = "CompletedTask")]
    completed_task: Vec<CompletedTaskResponse>,
}

impl From<TasksResult> for TasksResultResponse {
    fn from(result: TasksResult) -> Self {
        Self {
            total_duration: result.total_duration,
            completed_task: result
                .completed
                .into_iter()
                .map(CompletedTaskResponse::from)
                .collect(),
        }
    }
}

/// Query parameters for the aggregation endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TasksResultQuery {
    time_period: Option<String>,
    time_amount: Option<String>,
}

pub(super) async fn start_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<StartTaskPayload>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path)?;
    let request = StartTaskRequest::new(payload.into_inner().name);

    let task = state.lifecycle.start_task(user_id, request).await?;
    info!(user = %user_id, task = %task.id(), "task started");
    Ok(HttpResponse::Created().json(TaskResponse::from(task)))
}

pub(super) async fn stop_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path)?;

    let completed = state.lifecycle.stop_task(user_id).await?;
    info!(user = %user_id, "task stopped");
    Ok(HttpResponse::Ok().json(CompletedTaskResponse::from(completed)))
}

pub(super) async fn tasks_result(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<TasksResultQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path)?;
    let params = query.into_inner();

    let period_raw = params.time_period.unwrap_or_else(|| "day".to_owned());
    let period = Period::try_from(period_raw.as_str())
        .map_err(|err| ApiError::invalid_request(err.to_string()))?;
    let amount_raw = params.time_amount.unwrap_or_else(|| "1".to_owned());
    let amount: u32 = amount_raw
        .parse()
        .map_err(|_| ApiError::invalid_request(format!("invalid time amount: {amount_raw}")))?;

    match state.aggregator.tasks_result(user_id, period, amount).await {
        Ok(result) => Ok(HttpResponse::Ok().json(TasksResultResponse::from(result))),
        Err(TaskServiceError::NoCompletedTasks(_)) => Ok(HttpResponse::NoContent().finish()),
        Err(err) => Err(ApiError::from(err)),
    }
}
