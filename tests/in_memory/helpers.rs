//! Shared fixtures for the in-memory integration suite.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex};
use timetrack::task::adapters::memory::InMemoryTaskRepository;
use timetrack::task::services::{TaskAggregatorService, TaskLifecycleService};
use timetrack::user::adapters::memory::InMemoryUserRepository;
use timetrack::user::services::{CreateUserRequest, UserDirectoryService};

/// Clock whose current instant can be advanced by tests.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn fixed() -> Self {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid fixed instant");
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().expect("clock mutex poisoned")
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Fully wired in-memory service stack.
pub struct Stack {
    pub directory: UserDirectoryService,
    pub lifecycle: TaskLifecycleService,
    pub aggregator: TaskAggregatorService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub clock: Arc<MutableClock>,
}

pub fn stack() -> Stack {
    let clock = Arc::new(MutableClock::fixed());
    let users = Arc::new(InMemoryUserRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new(users.clone()));
    Stack {
        directory: UserDirectoryService::new(users.clone(), clock.clone()),
        lifecycle: TaskLifecycleService::new(users.clone(), tasks.clone(), clock.clone()),
        aggregator: TaskAggregatorService::new(users, tasks.clone(), clock.clone()),
        tasks,
        clock,
    }
}

pub fn sample_create_request(passport: &str) -> CreateUserRequest {
    CreateUserRequest::new(passport, "Ivanova", "Anna", "Moscow, Tverskaya 1")
        .with_patronymic("Petrovna")
}
