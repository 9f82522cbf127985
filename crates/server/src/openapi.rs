//! Schema-only mirrors of the JSON bodies, for the generated document.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfoDoc { pub ok: bool, pub service: String }

#[derive(Serialize, ToSchema)]
pub struct StatusDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct CreateUserDoc { pub name: String, pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
pub struct UpdateUserDoc { pub name: Option<String>, pub email: Option<String>, pub password: Option<String> }

#[derive(Serialize, ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreDoc { pub id: i32, pub name: String, pub user_id: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc { pub id: i32, pub name: String, pub price: f64, pub store_id: i32 }

#[derive(Serialize, ToSchema)]
pub struct StoreWithProductsDoc {
    pub id: i32,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub products: Vec<ProductDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct UserDetailDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub store: Option<StoreWithProductsDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct StoreDetailDoc {
    pub id: i32,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub user: UserDoc,
    pub products: Vec<ProductDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct StoreWithUserDoc {
    pub id: i32,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub user: UserDoc,
}

#[derive(Serialize, ToSchema)]
pub struct ProductDetailDoc {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(rename = "storeId")]
    pub store_id: i32,
    pub store: StoreWithUserDoc,
}

/// `userId` accepts a number or a numeric string.
#[derive(Serialize, ToSchema)]
pub struct CreateStoreDoc {
    pub name: String,
    #[serde(rename = "userId")]
    #[schema(value_type = i32)]
    pub user_id: serde_json::Value,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateStoreDoc { pub name: Option<String> }

/// `price` and `storeId` accept numbers or numeric strings.
#[derive(Serialize, ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    #[schema(value_type = f64)]
    pub price: serde_json::Value,
    #[serde(rename = "storeId")]
    #[schema(value_type = i32)]
    pub store_id: serde_json::Value,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateProductDoc {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::status,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::get_one,
        crate::routes::users::update,
        crate::routes::users::remove,
        crate::routes::stores::create,
        crate::routes::stores::list,
        crate::routes::stores::get_one,
        crate::routes::stores::update,
        crate::routes::stores::remove,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get_one,
        crate::routes::products::update,
        crate::routes::products::remove,
    ),
    components(
        schemas(
            ServiceInfoDoc,
            StatusDoc,
            CreateUserDoc,
            UpdateUserDoc,
            UserDoc,
            StoreDoc,
            ProductDoc,
            StoreWithProductsDoc,
            UserDetailDoc,
            StoreDetailDoc,
            StoreWithUserDoc,
            ProductDetailDoc,
            CreateStoreDoc,
            UpdateStoreDoc,
            CreateProductDoc,
            UpdateProductDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "stores"),
        (name = "products")
    )
)]
pub struct ApiDoc;
