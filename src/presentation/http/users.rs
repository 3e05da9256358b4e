use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::users::create_user::CreateUser;
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::update_user::UpdateUser;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::balance::display_balance;
use crate::domain::users::user::User;
use crate::domain::users::validation::{CreateUserFields, UpdateUserFields};
use crate::presentation::http::error::ApiError;

/// Create payload. Every key is optional; required-field violations are
/// the validator's to report, so a sparse payload still deserializes.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}

/// Update payload. There is no password key; whatever else the client
/// sends beyond these four keys is dropped at deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub balance: Option<String>,
}

/// Outward shape of a user. The balance is the display number, never
/// the stored text; the hash has no field here.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub balance: f64,
}

impl UserView {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            balance: display_balance(&user.balance),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    pub data: UserView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowUserResponse {
    pub user: UserView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    pub message: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/:id",
            get(show_user).put(update_user).delete(delete_user),
        )
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/users", tag = "Users", request_body = CreateUserRequest, responses(
    (status = 201, body = CreateUserResponse),
    (status = 422, description = "Validation errors keyed by field")
))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    let fields = CreateUserFields {
        name: req.name,
        email: req.email,
        password: req.password,
        address: req.address,
        balance: req.balance,
    };
    let user = uc.execute(&fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            data: UserView::from_user(&user),
        }),
    ))
}

#[utoipa::path(get, path = "/api/users/{id}", tag = "Users",
    params(("id" = String, Path, description = "User id"),),
    responses(
        (status = 200, body = ShowUserResponse),
        (status = 404, description = "Unknown or malformed id")
    ))]
pub async fn show_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<ShowUserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc.execute(&id).await?;
    Ok(Json(ShowUserResponse {
        user: UserView::from_user(&user),
    }))
}

#[utoipa::path(put, path = "/api/users/{id}", tag = "Users",
    params(("id" = String, Path, description = "User id"),),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, body = UpdateUserResponse),
        (status = 404, description = "Unknown or malformed id"),
        (status = 422, description = "Validation errors keyed by field")
    ))]
pub async fn update_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = UpdateUser {
        repo: repo.as_ref(),
    };
    let fields = UpdateUserFields {
        name: req.name,
        email: req.email,
        address: req.address,
        balance: req.balance,
    };
    let user = uc.execute(&id, &fields).await?;
    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user: UserView::from_user(&user),
    }))
}

#[utoipa::path(delete, path = "/api/users/{id}", tag = "Users",
    params(("id" = String, Path, description = "User id"),),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown or malformed id")
    ))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<DeleteUserResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    uc.execute(&id).await?;
    // The transport drops the body on 204; the shape is still built so
    // the contract stays visible in one place.
    Ok((
        StatusCode::NO_CONTENT,
        Json(DeleteUserResponse {
            message: "User deleted successfully".to_string(),
        }),
    ))
}
