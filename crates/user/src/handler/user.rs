use crate::{
    middleware::validate::{OptionalJson, ValidPath},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    response::IntoResponse,
    routing::{delete, get},
};
use shared::{
    abstract_trait::user::service::{command::DynUserCommandService, query::DynUserQueryService},
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::{DeleteUserResponse, UserResponse},
    },
    errors::{AppErrorHttp, ErrorResponse, ServiceError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/getUserById/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 400, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/getByFirstName/{name}",
    tag = "User",
    params(("name" = String, Path, description = "First name to match exactly")),
    responses(
        (status = 200, description = "Users with this first name", body = Vec<UserResponse>)
    )
)]
pub async fn get_users_by_first_name(
    Extension(service): Extension<DynUserQueryService>,
    ValidPath(name): ValidPath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_first_name(&name).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/getBySurname/{name}",
    tag = "User",
    params(("name" = String, Path, description = "Surname to match exactly")),
    responses(
        (status = 200, description = "Users with this surname", body = Vec<UserResponse>)
    )
)]
pub async fn get_users_by_surname(
    Extension(service): Extension<DynUserQueryService>,
    ValidPath(name): ValidPath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_surname(&name).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/getByPinCode/{code}",
    tag = "User",
    params(("code" = String, Path, description = "Postal code to match exactly")),
    responses(
        (status = 200, description = "Users with this postal code", body = Vec<UserResponse>)
    )
)]
pub async fn get_users_by_pin_code(
    Extension(service): Extension<DynUserQueryService>,
    ValidPath(code): ValidPath<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_pin_code(&code).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/sortByDoj",
    tag = "User",
    responses(
        (status = 200, description = "Users ascending by date of joining", body = Vec<UserResponse>)
    )
)]
pub async fn sort_users_by_doj(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.sort_by_doj().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/sortByDob",
    tag = "User",
    responses(
        (status = 200, description = "Users ascending by date of birth", body = Vec<UserResponse>)
    )
)]
pub async fn sort_users_by_dob(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.sort_by_dob().await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserCommandService>,
    OptionalJson(body): OptionalJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let body = body.ok_or_else(ServiceError::missing_user_record)?;
    let response = service.create(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/user",
    tag = "User",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User replaced", body = UserResponse),
        (status = 400, description = "Missing record or id, or unknown id", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserCommandService>,
    OptionalJson(body): OptionalJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let body = body.ok_or_else(ServiceError::missing_user_record_or_id)?;
    let response = service.update(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/user/deleteUser/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "User does not exist", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserCommandService>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    service.delete(id).await?;
    Ok(Json(DeleteUserResponse {
        status: "success".to_string(),
        message: format!("User with ID {id} deleted."),
    }))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/user",
            get(get_users).post(create_user).put(update_user),
        )
        .route("/user/getUserById/{id}", get(get_user))
        .route("/user/getByFirstName/{name}", get(get_users_by_first_name))
        .route("/user/getBySurname/{name}", get(get_users_by_surname))
        .route("/user/getByPinCode/{code}", get(get_users_by_pin_code))
        .route("/user/sortByDoj", get(sort_users_by_doj))
        .route("/user/sortByDob", get(sort_users_by_dob))
        .route("/user/deleteUser/{id}", delete(delete_user))
        .layer(Extension(app_state.di_container.user_query.service.clone()))
        .layer(Extension(app_state.di_container.user_command.service.clone()))
}
