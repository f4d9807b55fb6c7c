use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub chat_id: i32,
    pub sender_id: Option<i32>,
    /// `None` once the sending account has been deleted.
    pub sender_username: Option<String>,
    pub sent_at: DateTime<Utc>,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PostMessageDto {
    pub body: String,
}
