//! Service orchestration tests for the user directory.

use crate::test_support::MutableClock;
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{PassportNumber, UserDomainError, UserId},
    ports::{Page, UserFilter},
    services::{CreateUserRequest, UpdateUserRequest, UserDirectoryService, UserServiceError},
};
use rstest::{fixture, rstest};
use std::sync::Arc;

struct DirectoryHarness {
    service: UserDirectoryService,
    clock: Arc<MutableClock>,
}

#[fixture]
fn harness() -> DirectoryHarness {
    let clock = Arc::new(MutableClock::fixed());
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserDirectoryService::new(repository, clock.clone());
    DirectoryHarness { service, clock }
}

fn sample_request(passport: &str) -> CreateUserRequest {
    CreateUserRequest::new(passport, "Ivanova", "Anna", "Moscow, Tverskaya 1")
        .with_patronymic("Petrovna")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_persists_and_is_retrievable(harness: DirectoryHarness) {
    let created = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("user creation should succeed");

    let fetched = harness
        .service
        .user_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
    assert_eq!(fetched.profile().patronymic(), Some("Petrovna"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_rejects_malformed_passport(harness: DirectoryHarness) {
    let result = harness
        .service
        .create_user(sample_request("1234567890"))
        .await;

    assert!(matches!(
        result,
        Err(UserServiceError::Validation(
            UserDomainError::InvalidPassportNumber(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_user_rejects_duplicate_passport(harness: DirectoryHarness) {
    let first = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("first creation should succeed");

    let result = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await;

    assert!(matches!(
        result,
        Err(UserServiceError::PassportTaken(passport))
            if passport.as_str() == "1234 567890"
    ));
    // The original record is untouched.
    let stored = harness
        .service
        .user_by_id(first.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, first);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_by_passport_finds_holder(harness: DirectoryHarness) {
    let created = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("user creation should succeed");
    let passport = PassportNumber::new("1234 567890").expect("valid passport number");

    let fetched = harness
        .service
        .user_by_passport(&passport)
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_by_passport_reports_missing_holder(harness: DirectoryHarness) {
    let passport = PassportNumber::new("9999 999999").expect("valid passport number");

    let result = harness.service.user_by_passport(&passport).await;

    assert!(matches!(
        result,
        Err(UserServiceError::PassportNotFound(missing)) if missing == passport
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_filters_by_surname(harness: DirectoryHarness) {
    harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("first creation should succeed");
    harness
        .service
        .create_user(CreateUserRequest::new(
            "4321 098765",
            "Petrov",
            "Boris",
            "Kazan, Baumana 5",
        ))
        .await
        .expect("second creation should succeed");

    let filter = UserFilter {
        surname: Some("Petrov".to_owned()),
        ..UserFilter::default()
    };
    let listed = harness
        .service
        .users(&filter, Page::default())
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().map(|user| user.profile().surname()),
        Some("Petrov")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_paginates_in_creation_order(harness: DirectoryHarness) {
    for (index, passport) in ["1111 111111", "2222 222222", "3333 333333"]
        .into_iter()
        .enumerate()
    {
        harness
            .service
            .create_user(CreateUserRequest::new(
                passport,
                format!("Surname{index}"),
                "Name",
                "Address",
            ))
            .await
            .expect("creation should succeed");
        // Distinct creation timestamps keep the listing order deterministic.
        harness.clock.advance_seconds(1);
    }

    let page = Page {
        limit: 2,
        offset: 1,
    };
    let listed = harness
        .service
        .users(&UserFilter::default(), page)
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 2);
    assert_eq!(
        listed.first().map(|user| user.passport_number().as_str()),
        Some("2222 222222")
    );
    assert_eq!(
        listed.last().map(|user| user.passport_number().as_str()),
        Some("3333 333333")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_returns_empty_list_for_no_match(harness: DirectoryHarness) {
    let filter = UserFilter {
        surname: Some("Nobody".to_owned()),
        ..UserFilter::default()
    };

    let listed = harness
        .service
        .users(&filter, Page::default())
        .await
        .expect("listing should succeed");

    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_user_merges_populated_fields(harness: DirectoryHarness) {
    let created = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("user creation should succeed");
    harness.clock.advance_seconds(60);

    let request = UpdateUserRequest {
        surname: Some("Petrova".to_owned()),
        address: Some("Moscow, Arbat 10".to_owned()),
        ..UpdateUserRequest::default()
    };
    let updated = harness
        .service
        .update_user(created.id(), request)
        .await
        .expect("update should succeed");

    assert_eq!(updated.profile().surname(), "Petrova");
    assert_eq!(updated.profile().address(), "Moscow, Arbat 10");
    assert_eq!(updated.profile().name(), "Anna");
    assert!(updated.updated_at() > created.updated_at());
    let stored = harness
        .service
        .user_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_user_with_empty_request_is_noop(harness: DirectoryHarness) {
    let created = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("user creation should succeed");
    harness.clock.advance_seconds(60);

    let updated = harness
        .service
        .update_user(created.id(), UpdateUserRequest::default())
        .await
        .expect("empty update should succeed");

    assert_eq!(updated, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_user_rejects_passport_collision(harness: DirectoryHarness) {
    harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("first creation should succeed");
    let second = harness
        .service
        .create_user(CreateUserRequest::new(
            "4321 098765",
            "Petrov",
            "Boris",
            "Kazan, Baumana 5",
        ))
        .await
        .expect("second creation should succeed");

    let request = UpdateUserRequest {
        passport_number: Some("1234 567890".to_owned()),
        ..UpdateUserRequest::default()
    };
    let result = harness.service.update_user(second.id(), request).await;

    assert!(matches!(
        result,
        Err(UserServiceError::PassportTaken(passport))
            if passport.as_str() == "1234 567890"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_user_reports_missing_user(harness: DirectoryHarness) {
    let missing = UserId::new();

    let result = harness
        .service
        .update_user(missing, UpdateUserRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(UserServiceError::NotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_user_removes_record(harness: DirectoryHarness) {
    let created = harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("user creation should succeed");

    harness
        .service
        .delete_user(created.id())
        .await
        .expect("deletion should succeed");

    let result = harness.service.user_by_id(created.id()).await;
    assert!(matches!(
        result,
        Err(UserServiceError::NotFound(id)) if id == created.id()
    ));
    // The passport number is free for registration again.
    harness
        .service
        .create_user(sample_request("1234 567890"))
        .await
        .expect("re-registration should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_user_reports_missing_user(harness: DirectoryHarness) {
    let missing = UserId::new();

    let result = harness.service.delete_user(missing).await;

    assert!(matches!(
        result,
        Err(UserServiceError::NotFound(id)) if id == missing
    ));
}
