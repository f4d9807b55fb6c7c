use crate::server::{
    error::{validation::ValidationError, AppError},
    model::message::PostMessageParam,
    service::{
        account::AccountService,
        message::{MessageService, MESSAGE_BODY_MAX_LEN},
    },
};
use chrono::{Duration, FixedOffset, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};


fn post(chat_id: i32, sender_id: i32, body: impl Into<String>) -> PostMessageParam {
    PostMessageParam {
        chat_id,
        sender_id,
        body: body.into(),
        sent_at: None,
    }
}
