//! Timetrack: passport-keyed time-tracking service.
//!
//! This crate registers users identified by passport number, tracks a single
//! active task per user, and reports aggregated task durations over a
//! trailing period.
//!
//! # Architecture
//!
//! Timetrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`user`]: User directory keyed by UUID and passport number
//! - [`task`]: Task lifecycle tracking and period aggregation
//! - [`http`]: Inbound REST adapter
//! - [`config`]: Runtime configuration

pub mod config;
pub mod http;
pub mod task;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
