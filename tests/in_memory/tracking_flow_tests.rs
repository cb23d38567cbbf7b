//! Cross-module integration tests for the tracking flow.

use super::helpers::{sample_create_request, stack, Stack};
use rstest::{fixture, rstest};
use timetrack::task::domain::Period;
use timetrack::task::ports::TaskRepository;
use timetrack::task::services::{StartTaskRequest, TaskServiceError};

#[fixture]
fn services() -> Stack {
    stack()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn round_trip_produces_one_archive_row_and_no_active_task(services: Stack) {
    let user = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("user creation should succeed");

    services
        .lifecycle
        .start_task(user.id(), StartTaskRequest::new("write"))
        .await
        .expect("start should succeed");
    services.clock.advance_seconds(25 * 60);
    let completed = services
        .lifecycle
        .stop_task(user.id())
        .await
        .expect("stop should succeed");

    assert_eq!(completed.name, "write");
    assert_eq!(completed.duration, "00:25:00");
    assert_eq!(services.tasks.history_len().expect("history length"), 1);
    let active = services
        .tasks
        .find_active(user.id())
        .await
        .expect("lookup should succeed");
    assert!(active.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn at_most_one_active_task_after_any_start_stop_sequence(services: Stack) {
    let user = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("user creation should succeed");

    // Interleave starts and stops, including ones that must fail.
    for name in ["a", "b", "c"] {
        let _ = services
            .lifecycle
            .start_task(user.id(), StartTaskRequest::new(name))
            .await;
    }
    services.clock.advance_seconds(60);
    let _ = services.lifecycle.stop_task(user.id()).await;
    let _ = services.lifecycle.stop_task(user.id()).await;
    let _ = services
        .lifecycle
        .start_task(user.id(), StartTaskRequest::new("d"))
        .await;

    let active = services
        .tasks
        .find_active(user.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(
        active.map(|task| task.name().as_str().to_owned()),
        Some("d".to_owned())
    );
    // Only the first start and the first stop took effect.
    assert_eq!(services.tasks.history_len().expect("history length"), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_user_invalidates_further_tracking(services: Stack) {
    let user = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("user creation should succeed");
    services
        .directory
        .delete_user(user.id())
        .await
        .expect("deletion should succeed");

    let result = services
        .lifecycle
        .start_task(user.id(), StartTaskRequest::new("write"))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::UnknownUser(id)) if id == user.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn aggregation_covers_full_flow_per_user(services: Stack) {
    let first = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("first creation should succeed");
    let second = services
        .directory
        .create_user(sample_create_request("4321 098765"))
        .await
        .expect("second creation should succeed");

    for (user, name, seconds) in [
        (&first, "write", 3600_i64),
        (&second, "review", 1800),
        (&first, "write", 1800),
    ] {
        services
            .lifecycle
            .start_task(user.id(), StartTaskRequest::new(name))
            .await
            .expect("start should succeed");
        services.clock.advance_seconds(seconds);
        services
            .lifecycle
            .stop_task(user.id())
            .await
            .expect("stop should succeed");
    }

    let result = services
        .aggregator
        .tasks_result(first.id(), Period::Day, 1)
        .await
        .expect("aggregation should succeed");

    assert_eq!(result.total_duration, "01:30:00");
    assert_eq!(result.completed.len(), 1);
    assert_eq!(
        result.completed.first().map(|task| task.name.as_str()),
        Some("write")
    );
}
