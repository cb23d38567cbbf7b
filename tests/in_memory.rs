//! In-memory integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `tracking_flow_tests`: Cross-module start/stop/aggregate flows
//! - `user_directory_tests`: User CRUD and passport lookup flows

mod in_memory {
    pub mod helpers;

    mod tracking_flow_tests;
    mod user_directory_tests;
}
