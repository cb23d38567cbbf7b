//! Task time tracking for Timetrack.
//!
//! This module implements the tracking core: starting and stopping a user's
//! single active task, archiving finished tasks into immutable history, and
//! aggregating archived durations over a trailing period window. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
