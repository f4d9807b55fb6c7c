use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub phone_number: String,
    pub password_hash: String,
    pub last_login: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::server_member::Entity")]
    ServerMember,
    #[sea_orm(has_many = "super::chat_member::Entity")]
    ChatMember,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
}

impl Related<super::server_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerMember.def()
    }
}

impl Related<super::chat_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMember.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        super::server_member::Relation::Server.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::server_member::Relation::Account.def().rev())
    }
}

impl Related<super::chat::Entity> for Entity {
    fn to() -> RelationDef {
        super::chat_member::Relation::Chat.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::chat_member::Relation::Account.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
