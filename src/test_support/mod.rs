//! Shared helpers for unit tests.

mod clock;

pub(crate) use clock::MutableClock;
