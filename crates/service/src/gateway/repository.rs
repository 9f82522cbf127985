use async_trait::async_trait;
use models::user;

use super::domain::{
    NewProduct, NewStore, NewUser, ProductChanges, ProductDetail, StoreChanges, StoreDetail, UserChanges, UserDetail,
};
use super::errors::GatewayError;

/// Typed create/find/update/delete per entity.
///
/// Lists come back in ascending id order. Updates and deletes of a missing id
/// fail with [`GatewayError::RecordNotFound`]; a write naming a missing parent
/// fails with [`GatewayError::ForeignKeyViolation`].
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn create_user(&self, data: NewUser) -> Result<user::Model, GatewayError>;
    async fn find_users(&self) -> Result<Vec<user::Model>, GatewayError>;
    async fn find_user(&self, id: i32) -> Result<Option<UserDetail>, GatewayError>;
    async fn update_user(&self, id: i32, changes: UserChanges) -> Result<user::Model, GatewayError>;
    async fn delete_user(&self, id: i32) -> Result<(), GatewayError>;

    async fn create_store(&self, data: NewStore) -> Result<StoreDetail, GatewayError>;
    async fn find_stores(&self) -> Result<Vec<StoreDetail>, GatewayError>;
    async fn find_store(&self, id: i32) -> Result<Option<StoreDetail>, GatewayError>;
    async fn update_store(&self, id: i32, changes: StoreChanges) -> Result<StoreDetail, GatewayError>;
    async fn delete_store(&self, id: i32) -> Result<(), GatewayError>;

    async fn create_product(&self, data: NewProduct) -> Result<ProductDetail, GatewayError>;
    async fn find_products(&self) -> Result<Vec<ProductDetail>, GatewayError>;
    async fn find_product(&self, id: i32) -> Result<Option<ProductDetail>, GatewayError>;
    async fn update_product(&self, id: i32, changes: ProductChanges) -> Result<ProductDetail, GatewayError>;
    async fn delete_product(&self, id: i32) -> Result<(), GatewayError>;
}
