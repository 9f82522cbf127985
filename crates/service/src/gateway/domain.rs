use models::{product, store, user};
use serde::Serialize;

/// New user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial user update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct StoreChanges {
    pub name: Option<String>,
}

impl StoreChanges {
    pub fn is_empty(&self) -> bool { self.name.is_none() }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool { self.name.is_none() && self.price.is_none() }
}

/// User with its store (if any) and that store's products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: user::Model,
    pub store: Option<StoreWithProducts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreWithProducts {
    #[serde(flatten)]
    pub store: store::Model,
    pub products: Vec<product::Model>,
}

/// Store with its owner and products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: store::Model,
    pub user: user::Model,
    pub products: Vec<product::Model>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreWithUser {
    #[serde(flatten)]
    pub store: store::Model,
    pub user: user::Model,
}

/// Product with its store and the store's owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: product::Model,
    pub store: StoreWithUser,
}
