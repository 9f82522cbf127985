use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::gateway::domain::{NewStore, StoreChanges, StoreDetail};
use crate::gateway::{GatewayError, PersistenceGateway};
use crate::input::{is_present, non_empty, to_id};
use crate::user_service::USER_NOT_FOUND;

pub const STORE_NOT_FOUND: &str = "Loja não encontrada";
pub const USER_HAS_STORE: &str = "Usuário já possui uma loja";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreInput {
    pub name: Option<String>,
    /// Number or numeric string.
    pub user_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStoreInput {
    pub name: Option<String>,
}

/// Store operations; ownership and uniqueness are enforced by the insert itself.
#[derive(Clone)]
pub struct StoreService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl StoreService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self { Self { gateway } }

    /// Create a store for an existing user that has none yet.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use service::gateway::repo::InMemoryGateway;
    /// use service::user_service::{CreateUserInput, UserService};
    /// use service::store_service::{CreateStoreInput, StoreService};
    /// let gw = Arc::new(InMemoryGateway::new());
    /// let users = UserService::new(gw.clone());
    /// let stores = StoreService::new(gw);
    /// let owner = tokio_test::block_on(users.create(CreateUserInput {
    ///     name: Some("Ana".into()), email: Some("ana@example.com".into()), password: Some("1".into()),
    /// })).unwrap();
    /// let created = tokio_test::block_on(stores.create(CreateStoreInput {
    ///     name: Some("Loja".into()), user_id: Some(json!(owner.id)),
    /// })).unwrap();
    /// assert_eq!(created.user.id, owner.id);
    /// assert!(created.products.is_empty());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateStoreInput) -> Result<StoreDetail, ServiceError> {
        let name = match non_empty(input.name.as_deref()) {
            Some(name) if is_present(input.user_id.as_ref()) => name.to_owned(),
            _ => {
                return Err(ServiceError::missing_fields(
                    "Nome e userId são obrigatórios",
                    json!({ "name": input.name, "userId": input.user_id }),
                ))
            }
        };
        let user_id = input
            .user_id
            .as_ref()
            .and_then(to_id)
            .ok_or_else(|| ServiceError::validation("userId deve ser um número válido"))?;

        let created = self.gateway.create_store(NewStore { name, user_id }).await.map_err(|e| match e {
            GatewayError::ForeignKeyViolation(_) => ServiceError::NotFound(USER_NOT_FOUND.into()),
            GatewayError::UniqueConstraintViolation(_) => ServiceError::Conflict(USER_HAS_STORE.into()),
            other => ServiceError::Gateway(other),
        })?;
        info!(store_id = created.store.id, user_id, "store_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<StoreDetail>, ServiceError> {
        Ok(self.gateway.find_stores().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<StoreDetail, ServiceError> {
        self.gateway.find_store(id).await?.ok_or_else(not_found)
    }

    /// Only the name is mutable; an absent or empty name leaves the store as is.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateStoreInput) -> Result<StoreDetail, ServiceError> {
        let changes = StoreChanges { name: input.name.filter(|s| !s.is_empty()) };
        let updated = self.gateway.update_store(id, changes).await.map_err(missing_as_not_found)?;
        info!(store_id = id, "store_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.gateway.delete_store(id).await.map_err(missing_as_not_found)?;
        info!(store_id = id, "store_deleted");
        Ok(())
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound(STORE_NOT_FOUND.into())
}

fn missing_as_not_found(err: GatewayError) -> ServiceError {
    match err {
        GatewayError::RecordNotFound => not_found(),
        other => ServiceError::Gateway(other),
    }
}
