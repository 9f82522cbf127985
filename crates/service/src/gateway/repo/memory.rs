//! In-process gateway for tests and doc examples.
//!
//! Mirrors the relational schema: unique email, one store per user, foreign
//! keys on `stores.user_id` / `products.store_id`, cascading deletes.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use models::{product, store, user};

use crate::gateway::domain::{
    NewProduct, NewStore, NewUser, ProductChanges, ProductDetail, StoreChanges, StoreDetail, StoreWithProducts,
    StoreWithUser, UserChanges, UserDetail,
};
use crate::gateway::errors::GatewayError;
use crate::gateway::repository::PersistenceGateway;

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, user::Model>,
    stores: BTreeMap<i32, store::Model>,
    products: BTreeMap<i32, product::Model>,
    last_user_id: i32,
    last_store_id: i32,
    last_product_id: i32,
}

fn next_id(last: &mut i32) -> i32 {
    *last += 1;
    *last
}

impl Tables {
    fn products_of(&self, store_id: i32) -> Vec<product::Model> {
        self.products.values().filter(|p| p.store_id == store_id).cloned().collect()
    }

    fn store_detail(&self, store: &store::Model) -> Result<StoreDetail, GatewayError> {
        let user = self.users.get(&store.user_id).cloned().ok_or(GatewayError::RecordNotFound)?;
        Ok(StoreDetail { store: store.clone(), user, products: self.products_of(store.id) })
    }

    fn product_detail(&self, product: &product::Model) -> Result<ProductDetail, GatewayError> {
        let store = self.stores.get(&product.store_id).cloned().ok_or(GatewayError::RecordNotFound)?;
        let user = self.users.get(&store.user_id).cloned().ok_or(GatewayError::RecordNotFound)?;
        Ok(ProductDetail { product: product.clone(), store: StoreWithUser { store, user } })
    }

    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users.values().any(|u| u.email == email && Some(u.id) != except)
    }

    fn remove_store(&mut self, store_id: i32) -> bool {
        let removed = self.stores.remove(&store_id).is_some();
        if removed {
            self.products.retain(|_, p| p.store_id != store_id);
        }
        removed
    }
}

/// Gateway keeping all rows behind one mutex.
#[derive(Default)]
pub struct InMemoryGateway {
    tables: Mutex<Tables>,
    unavailable: Option<String>,
}

impl InMemoryGateway {
    pub fn new() -> Self { Self::default() }

    /// A gateway whose every call fails with [`GatewayError::Persistence`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { tables: Mutex::default(), unavailable: Some(reason.into()) }
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, GatewayError> {
        if let Some(reason) = &self.unavailable {
            return Err(GatewayError::Persistence(reason.clone()));
        }
        self.tables.lock().map_err(|e| GatewayError::Persistence(e.to_string()))
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn create_user(&self, data: NewUser) -> Result<user::Model, GatewayError> {
        let mut t = self.tables()?;
        if t.email_taken(&data.email, None) {
            return Err(GatewayError::UniqueConstraintViolation("users.email".into()));
        }
        let id = next_id(&mut t.last_user_id);
        let created = user::Model { id, name: data.name, email: data.email, password: data.password };
        t.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_users(&self) -> Result<Vec<user::Model>, GatewayError> {
        Ok(self.tables()?.users.values().cloned().collect())
    }

    async fn find_user(&self, id: i32) -> Result<Option<UserDetail>, GatewayError> {
        let t = self.tables()?;
        let Some(found) = t.users.get(&id).cloned() else { return Ok(None) };
        let store = t
            .stores
            .values()
            .find(|s| s.user_id == id)
            .map(|s| StoreWithProducts { store: s.clone(), products: t.products_of(s.id) });
        Ok(Some(UserDetail { user: found, store }))
    }

    async fn update_user(&self, id: i32, changes: UserChanges) -> Result<user::Model, GatewayError> {
        let mut t = self.tables()?;
        if !t.users.contains_key(&id) {
            return Err(GatewayError::RecordNotFound);
        }
        if let Some(email) = &changes.email {
            if t.email_taken(email, Some(id)) {
                return Err(GatewayError::UniqueConstraintViolation("users.email".into()));
            }
        }
        let row = t.users.get_mut(&id).ok_or(GatewayError::RecordNotFound)?;
        if let Some(name) = changes.name { row.name = name; }
        if let Some(email) = changes.email { row.email = email; }
        if let Some(password) = changes.password { row.password = password; }
        Ok(row.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), GatewayError> {
        let mut t = self.tables()?;
        if t.users.remove(&id).is_none() {
            return Err(GatewayError::RecordNotFound);
        }
        let owned: Vec<i32> = t.stores.values().filter(|s| s.user_id == id).map(|s| s.id).collect();
        for store_id in owned {
            t.remove_store(store_id);
        }
        Ok(())
    }

    async fn create_store(&self, data: NewStore) -> Result<StoreDetail, GatewayError> {
        let mut t = self.tables()?;
        if !t.users.contains_key(&data.user_id) {
            return Err(GatewayError::ForeignKeyViolation("stores.user_id".into()));
        }
        if t.stores.values().any(|s| s.user_id == data.user_id) {
            return Err(GatewayError::UniqueConstraintViolation("stores.user_id".into()));
        }
        let id = next_id(&mut t.last_store_id);
        let created = store::Model { id, name: data.name, user_id: data.user_id };
        t.stores.insert(id, created.clone());
        t.store_detail(&created)
    }

    async fn find_stores(&self) -> Result<Vec<StoreDetail>, GatewayError> {
        let t = self.tables()?;
        t.stores.values().map(|s| t.store_detail(s)).collect()
    }

    async fn find_store(&self, id: i32) -> Result<Option<StoreDetail>, GatewayError> {
        let t = self.tables()?;
        t.stores.get(&id).map(|s| t.store_detail(s)).transpose()
    }

    async fn update_store(&self, id: i32, changes: StoreChanges) -> Result<StoreDetail, GatewayError> {
        let mut t = self.tables()?;
        let row = t.stores.get_mut(&id).ok_or(GatewayError::RecordNotFound)?;
        if let Some(name) = changes.name { row.name = name; }
        let updated = row.clone();
        t.store_detail(&updated)
    }

    async fn delete_store(&self, id: i32) -> Result<(), GatewayError> {
        let mut t = self.tables()?;
        if !t.remove_store(id) {
            return Err(GatewayError::RecordNotFound);
        }
        Ok(())
    }

    async fn create_product(&self, data: NewProduct) -> Result<ProductDetail, GatewayError> {
        let mut t = self.tables()?;
        if !t.stores.contains_key(&data.store_id) {
            return Err(GatewayError::ForeignKeyViolation("products.store_id".into()));
        }
        let id = next_id(&mut t.last_product_id);
        let created = product::Model { id, name: data.name, price: data.price, store_id: data.store_id };
        t.products.insert(id, created.clone());
        t.product_detail(&created)
    }

    async fn find_products(&self) -> Result<Vec<ProductDetail>, GatewayError> {
        let t = self.tables()?;
        t.products.values().map(|p| t.product_detail(p)).collect()
    }

    async fn find_product(&self, id: i32) -> Result<Option<ProductDetail>, GatewayError> {
        let t = self.tables()?;
        t.products.get(&id).map(|p| t.product_detail(p)).transpose()
    }

    async fn update_product(&self, id: i32, changes: ProductChanges) -> Result<ProductDetail, GatewayError> {
        let mut t = self.tables()?;
        let row = t.products.get_mut(&id).ok_or(GatewayError::RecordNotFound)?;
        if let Some(name) = changes.name { row.name = name; }
        if let Some(price) = changes.price { row.price = price; }
        let updated = row.clone();
        t.product_detail(&updated)
    }

    async fn delete_product(&self, id: i32) -> Result<(), GatewayError> {
        let mut t = self.tables()?;
        t.products.remove(&id).map(|_| ()).ok_or(GatewayError::RecordNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::gateway_contract;

    #[tokio::test]
    async fn in_memory_gateway_contract() {
        gateway_contract(&InMemoryGateway::new()).await;
    }

    #[tokio::test]
    async fn unavailable_gateway_fails_every_call() {
        let gw = InMemoryGateway::unavailable("database offline");
        assert_eq!(gw.find_users().await, Err(GatewayError::Persistence("database offline".into())));
        assert!(gw.delete_product(1).await.is_err());
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let gw = InMemoryGateway::new();
        let a = gw.create_user(NewUser { name: "A".into(), email: "a@x.com".into(), password: "p".into() }).await.unwrap();
        gw.delete_user(a.id).await.unwrap();
        let b = gw.create_user(NewUser { name: "B".into(), email: "b@x.com".into(), password: "p".into() }).await.unwrap();
        assert!(b.id > a.id);
    }
}
