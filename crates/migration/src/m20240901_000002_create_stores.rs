//! Create `stores` table with FK to `users`.
//!
//! `user_id` is unique: a user owns at most one store. Deleting the user
//! removes the store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(pk_auto(Stores::Id))
                    .col(string(Stores::Name))
                    .col(integer(Stores::UserId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_user")
                            .from(Stores::Table, Stores::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stores::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stores { Table, Id, Name, UserId }

#[derive(DeriveIden)]
enum Users { Table, Id }
