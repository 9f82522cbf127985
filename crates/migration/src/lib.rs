//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users;
mod m20240901_000002_create_stores;
mod m20240901_000003_create_products;
mod m20240901_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users::Migration),
            Box::new(m20240901_000002_create_stores::Migration),
            Box::new(m20240901_000003_create_products::Migration),
            // Indexes should always be applied last
            Box::new(m20240901_000004_add_indexes::Migration),
        ]
    }
}
