use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryOrder, Set,
};
use tracing::debug;

use models::{product, store, user};

use crate::gateway::domain::{
    NewProduct, NewStore, NewUser, ProductChanges, ProductDetail, StoreChanges, StoreDetail, StoreWithProducts,
    StoreWithUser, UserChanges, UserDetail,
};
use crate::gateway::errors::GatewayError;
use crate::gateway::repository::PersistenceGateway;

/// SeaORM-backed gateway over a pooled connection.
#[derive(Clone)]
pub struct SeaOrmGateway {
    pub db: DatabaseConnection,
}

impl SeaOrmGateway {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn store_details(&self, stores: Vec<store::Model>) -> Result<Vec<StoreDetail>, GatewayError> {
        if stores.is_empty() {
            return Ok(Vec::new());
        }
        let owners = stores.load_one(user::Entity, &self.db).await?;
        let products = stores
            .load_many(product::Entity::find().order_by_asc(product::Column::Id), &self.db)
            .await?;
        stores
            .into_iter()
            .zip(owners)
            .zip(products)
            .map(|((store, owner), products)| {
                let user = owner.ok_or_else(|| dangling("store", store.id))?;
                Ok(StoreDetail { store, user, products })
            })
            .collect()
    }

    async fn product_details(&self, products: Vec<product::Model>) -> Result<Vec<ProductDetail>, GatewayError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }
        let stores = products
            .load_one(store::Entity, &self.db)
            .await?
            .into_iter()
            .zip(&products)
            .map(|(store, product)| store.ok_or_else(|| dangling("product", product.id)))
            .collect::<Result<Vec<_>, _>>()?;
        let owners = stores.load_one(user::Entity, &self.db).await?;
        products
            .into_iter()
            .zip(stores)
            .zip(owners)
            .map(|((product, store), owner)| {
                let user = owner.ok_or_else(|| dangling("store", store.id))?;
                Ok(ProductDetail { product, store: StoreWithUser { store, user } })
            })
            .collect()
    }

    async fn store_detail(&self, store: store::Model) -> Result<StoreDetail, GatewayError> {
        self.store_details(vec![store]).await?.pop().ok_or(GatewayError::RecordNotFound)
    }

    async fn product_detail(&self, product: product::Model) -> Result<ProductDetail, GatewayError> {
        self.product_details(vec![product]).await?.pop().ok_or(GatewayError::RecordNotFound)
    }
}

fn dangling(entity: &str, id: i32) -> GatewayError {
    GatewayError::Persistence(format!("{entity} {id} references a missing parent row"))
}

#[async_trait]
impl PersistenceGateway for SeaOrmGateway {
    async fn create_user(&self, data: NewUser) -> Result<user::Model, GatewayError> {
        let am = user::ActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            password: Set(data.password),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn find_users(&self) -> Result<Vec<user::Model>, GatewayError> {
        Ok(user::Entity::find().order_by_asc(user::Column::Id).all(&self.db).await?)
    }

    async fn find_user(&self, id: i32) -> Result<Option<UserDetail>, GatewayError> {
        let Some(found) = user::Entity::find_by_id(id).one(&self.db).await? else { return Ok(None) };
        let store = match found.find_related(store::Entity).one(&self.db).await? {
            Some(store) => {
                let products = store
                    .find_related(product::Entity)
                    .order_by_asc(product::Column::Id)
                    .all(&self.db)
                    .await?;
                Some(StoreWithProducts { store, products })
            }
            None => None,
        };
        Ok(Some(UserDetail { user: found, store }))
    }

    async fn update_user(&self, id: i32, changes: UserChanges) -> Result<user::Model, GatewayError> {
        let existing = user::Entity::find_by_id(id).one(&self.db).await?.ok_or(GatewayError::RecordNotFound)?;
        if changes.is_empty() {
            return Ok(existing);
        }
        let mut am: user::ActiveModel = existing.into();
        if let Some(name) = changes.name { am.name = Set(name); }
        if let Some(email) = changes.email { am.email = Set(email); }
        if let Some(password) = changes.password { am.password = Set(password); }
        Ok(am.update(&self.db).await?)
    }

    async fn delete_user(&self, id: i32) -> Result<(), GatewayError> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(GatewayError::RecordNotFound);
        }
        Ok(())
    }

    async fn create_store(&self, data: NewStore) -> Result<StoreDetail, GatewayError> {
        let am = store::ActiveModel { name: Set(data.name), user_id: Set(data.user_id), ..Default::default() };
        let created = am.insert(&self.db).await?;
        debug!(store_id = created.id, user_id = created.user_id, "store row inserted");
        self.store_detail(created).await
    }

    async fn find_stores(&self) -> Result<Vec<StoreDetail>, GatewayError> {
        let stores = store::Entity::find().order_by_asc(store::Column::Id).all(&self.db).await?;
        self.store_details(stores).await
    }

    async fn find_store(&self, id: i32) -> Result<Option<StoreDetail>, GatewayError> {
        match store::Entity::find_by_id(id).one(&self.db).await? {
            Some(store) => Ok(Some(self.store_detail(store).await?)),
            None => Ok(None),
        }
    }

    async fn update_store(&self, id: i32, changes: StoreChanges) -> Result<StoreDetail, GatewayError> {
        let existing = store::Entity::find_by_id(id).one(&self.db).await?.ok_or(GatewayError::RecordNotFound)?;
        let updated = match changes.name {
            Some(name) => {
                let mut am: store::ActiveModel = existing.into();
                am.name = Set(name);
                am.update(&self.db).await?
            }
            None => existing,
        };
        self.store_detail(updated).await
    }

    async fn delete_store(&self, id: i32) -> Result<(), GatewayError> {
        let res = store::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(GatewayError::RecordNotFound);
        }
        Ok(())
    }

    async fn create_product(&self, data: NewProduct) -> Result<ProductDetail, GatewayError> {
        let am = product::ActiveModel {
            name: Set(data.name),
            price: Set(data.price),
            store_id: Set(data.store_id),
            ..Default::default()
        };
        let created = am.insert(&self.db).await?;
        self.product_detail(created).await
    }

    async fn find_products(&self) -> Result<Vec<ProductDetail>, GatewayError> {
        let products = product::Entity::find().order_by_asc(product::Column::Id).all(&self.db).await?;
        self.product_details(products).await
    }

    async fn find_product(&self, id: i32) -> Result<Option<ProductDetail>, GatewayError> {
        match product::Entity::find_by_id(id).one(&self.db).await? {
            Some(product) => Ok(Some(self.product_detail(product).await?)),
            None => Ok(None),
        }
    }

    async fn update_product(&self, id: i32, changes: ProductChanges) -> Result<ProductDetail, GatewayError> {
        let existing = product::Entity::find_by_id(id).one(&self.db).await?.ok_or(GatewayError::RecordNotFound)?;
        let updated = if changes.is_empty() {
            existing
        } else {
            let mut am: product::ActiveModel = existing.into();
            if let Some(name) = changes.name { am.name = Set(name); }
            if let Some(price) = changes.price { am.price = Set(price); }
            am.update(&self.db).await?
        };
        self.product_detail(updated).await
    }

    async fn delete_product(&self, id: i32) -> Result<(), GatewayError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(GatewayError::RecordNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, gateway_contract};

    #[tokio::test]
    async fn seaorm_gateway_contract() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        gateway_contract(&SeaOrmGateway::new(db)).await;
        Ok(())
    }

    #[tokio::test]
    async fn deleting_store_removes_its_products() -> Result<(), anyhow::Error> {
        let gw = SeaOrmGateway::new(get_db().await?);
        let u = gw.create_user(NewUser { name: "A".into(), email: "a@x.com".into(), password: "p".into() }).await?;
        let s = gw.create_store(NewStore { name: "S".into(), user_id: u.id }).await?;
        gw.create_product(NewProduct { name: "P".into(), price: 3.0, store_id: s.store.id }).await?;
        assert_eq!(gw.find_products().await?.len(), 1);

        gw.delete_store(s.store.id).await?;
        assert!(gw.find_products().await?.is_empty());
        assert!(gw.find_user(u.id).await?.expect("user survives").store.is_none());
        Ok(())
    }
}
