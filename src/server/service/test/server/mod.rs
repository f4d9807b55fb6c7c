use crate::server::{
    error::{validation::ValidationError, AppError},
    model::server::{CreateServerParam, ServerMembershipParam},
    service::server::ServerService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete_server;
mod membership;
