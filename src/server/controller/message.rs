use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        message::{MessageDto, PostMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::message::PostMessageParam,
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Get a chat's messages, oldest first.
///
/// # Access Control
/// - `ChatMember` - Only members can read the log
#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    responses(
        (status = 200, description = "Messages in order", body = Vec<MessageDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chat", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChatMember(chat_id)])
        .await?;

    let service = MessageService::new(&state.db);
    let messages = service.list_messages(chat_id).await?;

    let messages_dto: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// Post a message as the logged-in account.
///
/// # Returns
/// - `201 Created` - Message stored
/// - `400 Bad Request` - Body empty or longer than 500 characters
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a member of the chat
/// - `404 Not Found` - No chat with that ID
#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat ID")
    ),
    request_body = PostMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 400, description = "Invalid message body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chat", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
    Json(payload): Json<PostMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MessageService::new(&state.db);
    let message = service
        .post_message(PostMessageParam::from_dto(chat_id, account.id, payload))
        .await?;

    let sender_username = Some(account.username);

    Ok((StatusCode::CREATED, Json(message.into_dto(sender_username))))
}
