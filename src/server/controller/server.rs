use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MemberUsernamesDto},
        server::{CreateServerDto, ServerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::server::{CreateServerParam, ServerMembershipParam},
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Create a server owned by the logged-in account.
///
/// # Returns
/// - `201 Created` - Server created with the caller as its only member
/// - `400 Bad Request` - Name empty or too long
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Server created", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ServerService::new(&state.db);
    let server = service
        .create_server(CreateServerParam::from_dto(account.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Get a server by ID.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Server found", body = ServerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ServerService::new(&state.db);
    let server = service.get_server(server_id).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Delete a server.
///
/// # Access Control
/// - `ServerMember` - Only members can delete the server
#[utoipa::path(
    delete,
    path = "/api/servers/{server_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the server", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ServerMember(server_id)])
        .await?;

    let service = ServerService::new(&state.db);
    service.delete_server(server_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the usernames of a server's members.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/members",
    tag = SERVER_TAG,
    params(
        ("server_id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Member usernames", body = MemberUsernamesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_members(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ServerService::new(&state.db);
    let members = service.get_server_members(server_id).await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Add an account to a server.
///
/// Adding an existing member succeeds without changes.
///
/// # Access Control
/// - `ServerMember` - Only members can add others
#[utoipa::path(
    put,
    path = "/api/servers/{server_id}/members/{account_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = i32, Path, description = "Server ID"),
        ("account_id" = i32, Path, description = "Account ID to add")
    ),
    responses(
        (status = 204, description = "Account is a member"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the server", body = ErrorDto),
        (status = 404, description = "Server or account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_server_member(
    State(state): State<AppState>,
    session: Session,
    Path((server_id, account_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ServerMember(server_id)])
        .await?;

    let service = ServerService::new(&state.db);
    service
        .add_member(ServerMembershipParam {
            server_id,
            account_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove an account from a server.
///
/// Removing a non-member succeeds without changes.
///
/// # Access Control
/// - `ServerMember` - Only members can remove accounts
#[utoipa::path(
    delete,
    path = "/api/servers/{server_id}/members/{account_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = i32, Path, description = "Server ID"),
        ("account_id" = i32, Path, description = "Account ID to remove")
    ),
    responses(
        (status = 204, description = "Account is not a member"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the server", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_server_member(
    State(state): State<AppState>,
    session: Session,
    Path((server_id, account_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ServerMember(server_id)])
        .await?;

    let service = ServerService::new(&state.db);
    service
        .remove_member(ServerMembershipParam {
            server_id,
            account_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
