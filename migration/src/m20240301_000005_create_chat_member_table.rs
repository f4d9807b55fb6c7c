use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_account_table::Account;
use super::m20240301_000004_create_chat_table::Chat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMember::Table)
                    .if_not_exists()
                    .col(integer(ChatMember::ChatId))
                    .col(integer(ChatMember::AccountId))
                    .primary_key(
                        Index::create()
                            .col(ChatMember::ChatId)
                            .col(ChatMember::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_member_chat_id")
                            .from(ChatMember::Table, ChatMember::ChatId)
                            .to(Chat::Table, Chat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_member_account_id")
                            .from(ChatMember::Table, ChatMember::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chat_member_account_id")
                    .table(ChatMember::Table)
                    .col(ChatMember::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_chat_member_account_id")
                    .table(ChatMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatMember {
    Table,
    ChatId,
    AccountId,
}
