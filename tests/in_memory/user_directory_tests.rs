//! Cross-module integration tests for the user directory.

use super::helpers::{sample_create_request, stack, Stack};
use rstest::{fixture, rstest};
use timetrack::user::domain::PassportNumber;
use timetrack::user::ports::{Page, UserFilter};
use timetrack::user::services::{UpdateUserRequest, UserServiceError};

#[fixture]
fn services() -> Stack {
    stack()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_crud_flow(services: Stack) {
    let created = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("user creation should succeed");

    let by_passport = services
        .directory
        .user_by_passport(&PassportNumber::new("1234 567890").expect("valid passport number"))
        .await
        .expect("passport lookup should succeed");
    assert_eq!(by_passport, created);

    services.clock.advance_seconds(60);
    let updated = services
        .directory
        .update_user(
            created.id(),
            UpdateUserRequest {
                address: Some("Moscow, Arbat 10".to_owned()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.profile().address(), "Moscow, Arbat 10");

    services
        .directory
        .delete_user(created.id())
        .await
        .expect("deletion should succeed");
    let result = services.directory.user_by_id(created.id()).await;
    assert!(matches!(result, Err(UserServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filters_across_created_users(services: Stack) {
    services
        .directory
        .create_user(sample_create_request("1111 111111"))
        .await
        .expect("first creation should succeed");
    services.clock.advance_seconds(1);
    services
        .directory
        .create_user(sample_create_request("2222 222222"))
        .await
        .expect("second creation should succeed");

    let filter = UserFilter {
        passport_number: Some("2222 222222".to_owned()),
        ..UserFilter::default()
    };
    let listed = services
        .directory
        .users(&filter, Page::default())
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().map(|user| user.passport_number().as_str()),
        Some("2222 222222")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_passport_is_rejected_across_the_stack(services: Stack) {
    services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await
        .expect("first creation should succeed");

    let result = services
        .directory
        .create_user(sample_create_request("1234 567890"))
        .await;

    assert!(matches!(result, Err(UserServiceError::PassportTaken(_))));
    let listed = services
        .directory
        .users(&UserFilter::default(), Page::default())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
}
