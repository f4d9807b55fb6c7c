//! Server domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::server::{CreateServerDto, ServerDto};

/// A named group of accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub server_name: String,
    pub created_at: DateTime<Utc>,
}

impl Server {
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            server_name: self.server_name,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            server_name: entity.server_name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a server owned by an existing account.
///
/// The owner becomes the server's first member.
#[derive(Debug, Clone)]
pub struct CreateServerParam {
    pub owner_id: i32,
    pub server_name: String,
}

impl CreateServerParam {
    pub fn from_dto(owner_id: i32, dto: CreateServerDto) -> Self {
        Self {
            owner_id,
            server_name: dto.server_name,
        }
    }
}

/// Identifies one account's membership in one server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerMembershipParam {
    pub server_id: i32,
    pub account_id: i32,
}
