use crate::server::data::server::ServerRepository;
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_with_owner;
mod delete;
mod get_servers_for_account;
mod list_members;
