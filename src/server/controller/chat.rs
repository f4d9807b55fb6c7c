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
        chat::{ChatDto, CreateChatDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::chat::{ChatMembershipParam, CreateChatParam},
        service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Create a chat.
///
/// The logged-in account is always a member, in addition to `member_ids`.
///
/// # Returns
/// - `201 Created` - Chat created
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - One of `member_ids` does not exist
#[utoipa::path(
    post,
    path = "/api/chats",
    tag = CHAT_TAG,
    request_body = CreateChatDto,
    responses(
        (status = 201, description = "Chat created", body = ChatDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Member account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chat(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateChatDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ChatService::new(&state.db);
    let chat = service
        .create_chat(CreateChatParam::from_dto(account.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into_dto())))
}

/// Delete a chat and its entire message log.
///
/// # Access Control
/// - `ChatMember` - Only members can delete the chat
#[utoipa::path(
    delete,
    path = "/api/chats/{chat_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 204, description = "Chat deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chat", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chat(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatMember(chat_id)])
        .await?;

    let service = ChatService::new(&state.db);
    service.delete_chat(chat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the usernames of a chat's members.
///
/// Public; no login required.
///
/// # Returns
/// - `200 OK` - `{"member_usernames": [...]}`
/// - `404 Not Found` - No chat with that ID
#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/members",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "Member usernames", body = MemberUsernamesDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chat_members(
    State(state): State<AppState>,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ChatService::new(&state.db);
    let members = service.get_chat_members(chat_id).await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Add an account to a chat.
///
/// # Access Control
/// - `ChatMember` - Only members can add others
#[utoipa::path(
    put,
    path = "/api/chats/{chat_id}/members/{account_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID"),
        ("account_id" = i32, Path, description = "Account ID to add")
    ),
    responses(
        (status = 204, description = "Account is a member"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chat", body = ErrorDto),
        (status = 404, description = "Chat or account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_chat_member(
    State(state): State<AppState>,
    session: Session,
    Path((chat_id, account_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatMember(chat_id)])
        .await?;

    let service = ChatService::new(&state.db);
    service
        .add_member(ChatMembershipParam {
            chat_id,
            account_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove an account from a chat.
///
/// # Access Control
/// - `ChatMember` - Only members can remove accounts
#[utoipa::path(
    delete,
    path = "/api/chats/{chat_id}/members/{account_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID"),
        ("account_id" = i32, Path, description = "Account ID to remove")
    ),
    responses(
        (status = 204, description = "Account is not a member"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chat", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_chat_member(
    State(state): State<AppState>,
    session: Session,
    Path((chat_id, account_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatMember(chat_id)])
        .await?;

    let service = ChatService::new(&state.db);
    service
        .remove_member(ChatMembershipParam {
            chat_id,
            account_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
