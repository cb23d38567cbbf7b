//! Unit tests for the user directory module.

mod service_tests;
