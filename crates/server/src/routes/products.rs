use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use service::errors::ServiceError;
use service::gateway::domain::ProductDetail;
use service::product_service::{CreateProductInput, UpdateProductInput};

use crate::errors::{Fallback, JsonApiError};
use crate::routes::{IdPath, JsonBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", get(get_one).put(update).delete(remove))
}

fn failed(e: ServiceError) -> JsonApiError {
    JsonApiError::from_service(e, Fallback::BadRequest)
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Created with store and owner", body = crate::openapi::ProductDetailDoc),
        (status = 400, description = "Missing fields, invalid price or storeId"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonBody<CreateProductInput>,
) -> Result<(StatusCode, Json<ProductDetail>), JsonApiError> {
    let WithRejection(Json(input), _) = body;
    let created = state.products.create(input).await.map_err(failed)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDetailDoc]), (status = 400, description = "List failed"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductDetail>>, JsonApiError> {
    Ok(Json(state.products.list().await.map_err(failed)?))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with store and owner", body = crate::openapi::ProductDetailDoc),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<Json<ProductDetail>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    Ok(Json(state.products.get(id).await.map_err(failed)?))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDetailDoc),
        (status = 400, description = "Invalid price"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: IdPath,
    body: JsonBody<UpdateProductInput>,
) -> Result<Json<ProductDetail>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    let WithRejection(Json(input), _) = body;
    Ok(Json(state.products.update(id, input).await.map_err(failed)?))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<StatusCode, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    state.products.delete(id).await.map_err(failed)?;
    Ok(StatusCode::NO_CONTENT)
}
