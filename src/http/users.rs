//! User directory HTTP handlers.
//!
//! ```text
//! POST   /api/users
//! GET    /api/users
//! GET    /api/users/info
//! GET    /api/users/{uuid}
//! PATCH  /api/users/{uuid}
//! DELETE /api/users/{uuid}
//! ```

use super::{parse_user_id, ApiError, HttpState};
use crate::user::domain::{PassportNumber, User};
use crate::user::ports::{Page, UserFilter};
use crate::user::services::{CreateUserRequest, UpdateUserRequest};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Request payload for registering a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateUserPayload {
    passport_number: String,
    surname: String,
    name: String,
    patronymic: Option<String>,
    address: String,
}

/// Request payload for partially updating a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateUserPayload {
    passport_number: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    patronymic: Option<String>,
    address: Option<String>,
}

/// User record as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserResponse {
    uuid: Uuid,
    passport_number: String,
    surname: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    patronymic: Option<String>,
    address: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uuid: user.id().into_inner(),
            passport_number: user.passport_number().as_str().to_owned(),
            surname: user.profile().surname().to_owned(),
            name: user.profile().name().to_owned(),
            patronymic: user.profile().patronymic().map(str::to_owned),
            address: user.profile().address().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Query parameters for listing users. Filter names match the stored column
/// names rather than the camelCase body fields.
#[derive(Debug, Deserialize)]
pub(super) struct ListUsersQuery {
    limit: Option<i64>,
    offset: Option<i64>,
    passport_number: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    patronymic: Option<String>,
    address: Option<String>,
}

/// Query parameters for the passport lookup endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PassportQuery {
    passport_serie: Option<String>,
    passport_number: Option<String>,
}

/// Plain status payload for endpoints without a resource body.
#[derive(Debug, Serialize)]
pub(super) struct StatusResponse {
    description: &'static str,
}

pub(super) async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = payload.into_inner();
    let mut request =
        CreateUserRequest::new(body.passport_number, body.surname, body.name, body.address);
    if let Some(patronymic) = body.patronymic {
        request = request.with_patronymic(patronymic);
    }

    let user = state.directory.create_user(request).await?;
    info!(user = %user.id(), "user created");
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

pub(super) async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = query.into_inner();
    let filter = UserFilter {
        passport_number: params.passport_number,
        surname: params.surname,
        name: params.name,
        patronymic: params.patronymic,
        address: params.address,
    };
    let default_page = Page::default();
    let page = Page {
        limit: params.limit.unwrap_or(default_page.limit),
        offset: params.offset.unwrap_or(default_page.offset),
    };

    let users = state.directory.users(&filter, page).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub(super) async fn user_by_passport(
    state: web::Data<HttpState>,
    query: web::Query<PassportQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = query.into_inner();
    let (Some(serie), Some(number)) = (params.passport_serie, params.passport_number) else {
        return Err(ApiError::invalid_request(
            "passportSerie and passportNumber are required",
        ));
    };
    let passport = PassportNumber::from_parts(&serie, &number)
        .map_err(|err| ApiError::invalid_request(err.to_string()))?;

    let user = state.directory.user_by_passport(&passport).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub(super) async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    let user = state.directory.user_by_id(id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub(super) async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    let body = payload.into_inner();
    let request = UpdateUserRequest {
        passport_number: body.passport_number,
        surname: body.surname,
        name: body.name,
        patronymic: body.patronymic,
        address: body.address,
    };

    if request.is_empty() {
        // Confirm existence so an empty patch on a missing user still 404s.
        state.directory.user_by_id(id).await?;
        return Ok(HttpResponse::Ok().json(StatusResponse {
            description: "No fields to update",
        }));
    }

    let user = state.directory.update_user(id, request).await?;
    info!(user = %user.id(), "user updated");
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub(super) async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    state.directory.delete_user(id).await?;
    info!(user = %id, "user deleted");
    Ok(HttpResponse::Ok().json(StatusResponse {
        description: "User deleted successfully",
    }))
}
