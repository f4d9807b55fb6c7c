use crate::server::{
    data::{account::AccountRepository, is_unique_violation},
    model::account::{CreateAccountParam, UpdateAccountParam},
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_username;

fn create_param(username: &str, email: &str) -> CreateAccountParam {
    CreateAccountParam {
        username: username.to_string(),
        email: email.to_string(),
        phone_number: "1234567890".to_string(),
        password_hash: "$2b$04$notarealhashnotarealhashnotarealhashnotarealhash".to_string(),
    }
}
