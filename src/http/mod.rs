//! Inbound REST adapter for Timetrack.
//!
//! Translates HTTP requests into service calls and service errors into the
//! standard `{code, message}` envelope. All routes live under `/api`.

pub mod error;
pub mod state;
mod tasks;
mod users;

pub use error::{ApiError, ErrorCode};
pub use state::HttpState;

use crate::user::domain::UserId;
use actix_web::web;
use uuid::Uuid;

/// Registers the API routes and payload error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::invalid_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::invalid_request(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/users/info", web::get().to(users::user_by_passport))
            .route("/users", web::post().to(users::create_user))
            .route("/users", web::get().to(users::list_users))
            .route("/users/{uuid}", web::get().to(users::get_user))
            .route("/users/{uuid}", web::patch().to(users::update_user))
            .route("/users/{uuid}", web::delete().to(users::delete_user))
            .route(
                "/users/{uuid}/tasks/start",
                web::post().to(tasks::start_task),
            )
            .route("/users/{uuid}/tasks/stop", web::post().to(tasks::stop_task))
            .route(
                "/users/{uuid}/tasks/result",
                web::get().to(tasks::tasks_result),
            ),
    );
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    Uuid::parse_str(raw)
        .map(UserId::from_uuid)
        .map_err(|_| ApiError::invalid_request(format!("invalid user UUID: {raw}")))
}

#[cfg(test)]
mod tests;
