use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountDto, RegisterAccountDto, UpdateAccountDto},
        api::ErrorDto,
        chat::ChatDto,
        server::ServerDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::account::{RegisterAccountParam, UpdateAccountParam},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Register a new account.
///
/// Does not log the new account in.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing or invalid field
/// - `409 Conflict` - Username or email already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = RegisterAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AccountService::new(&state.db);

    let account = service
        .register(RegisterAccountParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Get an account by ID.
///
/// # Access Control
/// - Requires a logged-in account
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No account with that ID
#[utoipa::path(
    get,
    path = "/api/accounts/{account_id}",
    tag = ACCOUNT_TAG,
    params(
        ("account_id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account found", body = AccountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
    Path(account_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccountService::new(&state.db);
    let account = service.get_account(account_id).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Update the logged-in account's profile.
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Invalid field
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Username or email already in use
#[utoipa::path(
    patch,
    path = "/api/accounts/me",
    tag = ACCOUNT_TAG,
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = AccountDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccountService::new(&state.db);
    let updated = service
        .update_profile(account.id, UpdateAccountParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the logged-in account and end the session.
///
/// Messages the account sent remain in their chats without a sender.
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    delete,
    path = "/api/accounts/me",
    tag = ACCOUNT_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccountService::new(&state.db);
    service.delete_account(account.id).await?;

    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// List the servers the logged-in account belongs to.
#[utoipa::path(
    get,
    path = "/api/accounts/me/servers",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Servers of the account", body = Vec<ServerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_servers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccountService::new(&state.db);
    let servers = service.list_servers(account.id).await?;

    let servers_dto: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(servers_dto)))
}

/// List the chats the logged-in account belongs to.
#[utoipa::path(
    get,
    path = "/api/accounts/me/chats",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Chats of the account", body = Vec<ChatDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_chats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AccountService::new(&state.db);
    let chats = service.list_chats(account.id).await?;

    let chats_dto: Vec<ChatDto> = chats.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(chats_dto)))
}
