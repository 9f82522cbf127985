use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Products: index on store_id, used by every store read
        manager
            .create_index(
                Index::create()
                    .name("idx_product_store")
                    .table(Products::Table)
                    .col(Products::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_store").table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products { Table, StoreId }
