use crate::server::{
    error::{validation::ValidationError, AppError},
    model::account::{RegisterAccountParam, UpdateAccountParam},
    service::account::AccountService,
};
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod delete_account;
mod list_memberships;
mod register;
mod update_profile;

fn register_param(username: &str, email: &str) -> RegisterAccountParam {
    RegisterAccountParam {
        username: username.to_string(),
        email: email.to_string(),
        phone_number: "1234567890".to_string(),
        password: format!("{}pass", username),
    }
}
