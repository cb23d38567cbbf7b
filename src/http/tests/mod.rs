//! Tests for the REST adapter.


use crate::http::HttpState;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::services::{TaskAggregatorService, TaskLifecycleService};
use crate::test_support::MutableClock;
use crate::user::adapters::memory::InMemoryUserRepository;
use crate::user::services::UserDirectoryService;
use actix_web::{web, App};
use serde_json::{json, Value};
use std::sync::Arc;

fn test_state() -> (HttpState, Arc<MutableClock>) {
    let clock = Arc::new(MutableClock::fixed());
    let users = Arc::new(InMemoryUserRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new(users.clone()));
    let directory = UserDirectoryService::new(users.clone(), clock.clone());
    let lifecycle = TaskLifecycleService::new(users.clone(), tasks.clone(), clock.clone());
    let aggregator = TaskAggregatorService::new(users, tasks, clock.clone());
    (
        HttpState {
            directory,
            lifecycle,
            aggregator,
        },
        clock,
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(crate::http::configure)
}

fn sample_user_body(passport: &str) -> Value {
    json!({
        "passportNumber": passport,
        "surname": "Ivanova",
        "name": "Anna",
        "patronymic": "Petrovna",
        "address": "Moscow, Tverskaya 1",
    })
}
