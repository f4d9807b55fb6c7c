use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{account, auth, chat, message, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Accord", description = "Chat backend API"),
    tags(
        (name = "auth", description = "Login and session endpoints"),
        (name = "account", description = "Account registration and profile endpoints"),
        (name = "server", description = "Server and server membership endpoints"),
        (name = "chat", description = "Chat and chat membership endpoints"),
        (name = "message", description = "Chat message endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// Every documented handler is registered through `OpenApiRouter`, and the collected document is
/// served at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(account::register))
        .routes(routes!(account::get_account))
        .routes(routes!(account::update_me, account::delete_me))
        .routes(routes!(account::get_my_servers))
        .routes(routes!(account::get_my_chats))
        .routes(routes!(server::create_server))
        .routes(routes!(server::get_server, server::delete_server))
        .routes(routes!(server::get_server_members))
        .routes(routes!(
            server::add_server_member,
            server::remove_server_member
        ))
        .routes(routes!(chat::create_chat))
        .routes(routes!(chat::delete_chat))
        .routes(routes!(chat::get_chat_members))
        .routes(routes!(chat::add_chat_member, chat::remove_chat_member))
        .routes(routes!(message::get_messages, message::post_message))
        .split_for_parts();

    router.route("/api/openapi.json", get(move || async move { Json(api) }))
}
