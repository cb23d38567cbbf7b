//! Domain model for the user directory.
//!
//! The user domain models passport-keyed registration, partial profile
//! updates, and lookup while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod passport;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use passport::PassportNumber;
pub use user::{PersistedUserData, User, UserProfile, UserUpdate};
