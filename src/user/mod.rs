//! User directory for Timetrack.
//!
//! This module implements CRUD over user records keyed by UUID with a
//! secondary unique lookup by passport number. The passport number carries
//! the uniqueness invariant for the directory. The module follows hexagonal
//! architecture:
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
