//! In-memory adapters for user directory tests.

mod user;

pub use user::InMemoryUserRepository;
