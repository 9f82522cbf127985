use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use models::product;

use crate::errors::ServiceError;
use crate::gateway::domain::{NewProduct, ProductChanges, ProductDetail};
use crate::gateway::{GatewayError, PersistenceGateway};
use crate::input::{is_present, non_empty, to_id, to_number};
use crate::store_service::STORE_NOT_FOUND;

pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub price: Option<Value>,
    pub store_id: Option<Value>,
}

/// `price: null` is treated like an absent price.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<Value>,
}

fn parse_price(raw: &Value) -> Result<f64, ServiceError> {
    let price = to_number(raw).unwrap_or(f64::NAN);
    product::validate_price(price)?;
    Ok(price)
}

/// Product operations; the referenced store is checked by the insert's foreign key.
#[derive(Clone)]
pub struct ProductService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl ProductService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self { Self { gateway } }

    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use serde_json::json;
    /// use service::gateway::repo::InMemoryGateway;
    /// use service::product_service::{CreateProductInput, ProductService};
    /// use service::errors::ServiceError;
    /// let svc = ProductService::new(Arc::new(InMemoryGateway::new()));
    /// let res = tokio_test::block_on(svc.create(CreateProductInput {
    ///     name: Some("Caneta".into()), price: Some(json!(-5)), store_id: Some(json!(1)),
    /// }));
    /// assert!(matches!(res, Err(ServiceError::Validation { .. })));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProductInput) -> Result<ProductDetail, ServiceError> {
        let (Some(name), true, true) = (
            non_empty(input.name.as_deref()),
            is_present(input.price.as_ref()),
            is_present(input.store_id.as_ref()),
        ) else {
            return Err(ServiceError::missing_fields(
                "Nome, preço e storeId são obrigatórios",
                json!({ "name": input.name, "price": input.price, "storeId": input.store_id }),
            ));
        };
        let name = name.to_owned();
        let price = parse_price(input.price.as_ref().unwrap_or(&Value::Null))?;
        let store_id = input
            .store_id
            .as_ref()
            .and_then(to_id)
            .ok_or_else(|| ServiceError::validation("storeId deve ser um número válido"))?;

        let created = self
            .gateway
            .create_product(NewProduct { name, price, store_id })
            .await
            .map_err(|e| match e {
                GatewayError::ForeignKeyViolation(_) => ServiceError::NotFound(STORE_NOT_FOUND.into()),
                other => ServiceError::Gateway(other),
            })?;
        info!(product_id = created.product.id, store_id, price, "product_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<ProductDetail>, ServiceError> {
        Ok(self.gateway.find_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ProductDetail, ServiceError> {
        self.gateway.find_product(id).await?.ok_or_else(not_found)
    }

    /// Updates name and/or price; a supplied price must be a finite number above zero.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateProductInput) -> Result<ProductDetail, ServiceError> {
        let price = match &input.price {
            None | Some(Value::Null) => None,
            Some(raw) => Some(parse_price(raw)?),
        };
        let changes = ProductChanges { name: input.name.filter(|s| !s.is_empty()), price };
        let updated = self.gateway.update_product(id, changes).await.map_err(missing_as_not_found)?;
        info!(product_id = id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.gateway.delete_product(id).await.map_err(missing_as_not_found)?;
        info!(product_id = id, "product_deleted");
        Ok(())
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound(PRODUCT_NOT_FOUND.into())
}

fn missing_as_not_found(err: GatewayError) -> ServiceError {
    match err {
        GatewayError::RecordNotFound => not_found(),
        other => ServiceError::Gateway(other),
    }
}
