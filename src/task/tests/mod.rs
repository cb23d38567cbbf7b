//! Unit tests for the task tracking module.

mod support;
