//! Fixtures shared by the task tracking tests.

use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::services::{TaskAggregatorService, TaskLifecycleService};
use crate::test_support::MutableClock;
use crate::user::adapters::memory::InMemoryUserRepository;
use crate::user::ports::UserRepository;
use crate::user::domain::{PassportNumber, User, UserId, UserProfile};
use std::sync::Arc;

/// Fully wired in-memory tracking stack with a controllable clock.
pub(super) struct TrackingHarness {
    pub users: Arc<InMemoryUserRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub lifecycle: TaskLifecycleService,
    pub aggregator: TaskAggregatorService,
    pub clock: Arc<MutableClock>,
}

impl TrackingHarness {
    pub fn new() -> Self {
        let clock = Arc::new(MutableClock::fixed());
        let users = Arc::new(InMemoryUserRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new(users.clone()));
        let lifecycle = TaskLifecycleService::new(users.clone(), tasks.clone(), clock.clone());
        let aggregator = TaskAggregatorService::new(users.clone(), tasks.clone(), clock.clone());
        Self {
            users,
            tasks,
            lifecycle,
            aggregator,
            clock,
        }
    }

    /// Registers a user and returns its identifier.
    pub async fn register_user(&self, passport: &str) -> UserId {
        let passport = PassportNumber::new(passport).expect("valid passport number");
        let profile = UserProfile::new("Ivanova", "Anna", "Moscow, Tverskaya 1")
            .expect("valid profile fields");
        let user = User::register(passport, profile, &*self.clock);
        self.users.insert(&user).await.expect("user insert");
        user.id()
    }
}
