//! Adapter implementations for the task tracking ports.

pub mod memory;
pub mod postgres;
