use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use service::errors::ServiceError;
use service::gateway::domain::StoreDetail;
use service::store_service::{CreateStoreInput, UpdateStoreInput};

use crate::errors::{Fallback, JsonApiError};
use crate::routes::{IdPath, JsonBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/stores", get(list).post(create))
        .route("/stores/:id", get(get_one).put(update).delete(remove))
}

fn failed(e: ServiceError) -> JsonApiError {
    JsonApiError::from_service(e, Fallback::BadRequest)
}

#[utoipa::path(
    post, path = "/stores", tag = "stores",
    request_body = crate::openapi::CreateStoreDoc,
    responses(
        (status = 201, description = "Created with owner and products", body = crate::openapi::StoreDetailDoc),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User already owns a store")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonBody<CreateStoreInput>,
) -> Result<(StatusCode, Json<StoreDetail>), JsonApiError> {
    let WithRejection(Json(input), _) = body;
    let created = state.stores.create(input).await.map_err(failed)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/stores", tag = "stores",
    responses((status = 200, description = "All stores", body = [crate::openapi::StoreDetailDoc]), (status = 400, description = "List failed"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StoreDetail>>, JsonApiError> {
    Ok(Json(state.stores.list().await.map_err(failed)?))
}

#[utoipa::path(
    get, path = "/stores/{id}", tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store with owner and products", body = crate::openapi::StoreDetailDoc),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<Json<StoreDetail>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    Ok(Json(state.stores.get(id).await.map_err(failed)?))
}

#[utoipa::path(
    put, path = "/stores/{id}", tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    request_body = crate::openapi::UpdateStoreDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StoreDetailDoc),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: IdPath,
    body: JsonBody<UpdateStoreInput>,
) -> Result<Json<StoreDetail>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    let WithRejection(Json(input), _) = body;
    Ok(Json(state.stores.update(id, input).await.map_err(failed)?))
}

#[utoipa::path(
    delete, path = "/stores/{id}", tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    responses((status = 204, description = "Deleted with its products"), (status = 404, description = "Not found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<StatusCode, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    state.stores.delete(id).await.map_err(failed)?;
    Ok(StatusCode::NO_CONTENT)
}
