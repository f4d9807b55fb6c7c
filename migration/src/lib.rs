pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_account_table;
mod m20240301_000002_create_server_table;
mod m20240301_000003_create_server_member_table;
mod m20240301_000004_create_chat_table;
mod m20240301_000005_create_chat_member_table;
mod m20240301_000006_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_account_table::Migration),
            Box::new(m20240301_000002_create_server_table::Migration),
            Box::new(m20240301_000003_create_server_member_table::Migration),
            Box::new(m20240301_000004_create_chat_table::Migration),
            Box::new(m20240301_000005_create_chat_member_table::Migration),
            Box::new(m20240301_000006_create_message_table::Migration),
        ]
    }
}
