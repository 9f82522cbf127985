use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use models::user;
use service::gateway::domain::UserDetail;
use service::user_service::{CreateUserInput, UpdateUserInput};

use crate::errors::{Fallback, JsonApiError};
use crate::routes::{IdPath, JsonBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/usuarios", get(list).post(create))
        .route("/usuarios/:id", get(get_one).put(update).delete(remove))
}

fn failed(msg: &'static str) -> impl FnOnce(service::errors::ServiceError) -> JsonApiError {
    move |e| JsonApiError::from_service(e, Fallback::Internal(msg))
}

#[utoipa::path(
    post, path = "/usuarios", tag = "users",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Missing fields"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Create failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonBody<CreateUserInput>,
) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    let WithRejection(Json(input), _) = body;
    let created = state.users.create(input).await.map_err(failed("Erro ao criar usuário"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/usuarios", tag = "users",
    responses((status = 200, description = "All users", body = [crate::openapi::UserDoc]), (status = 500, description = "List failed"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    Ok(Json(state.users.list().await.map_err(failed("Erro ao listar usuários"))?))
}

#[utoipa::path(
    get, path = "/usuarios/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with store and products", body = crate::openapi::UserDetailDoc),
        (status = 404, description = "Not found"),
        (status = 500, description = "Lookup failed")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<Json<UserDetail>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    Ok(Json(state.users.get(id).await.map_err(failed("Erro ao buscar usuário"))?))
}

#[utoipa::path(
    put, path = "/usuarios/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Update failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: IdPath,
    body: JsonBody<UpdateUserInput>,
) -> Result<Json<user::Model>, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    let WithRejection(Json(input), _) = body;
    Ok(Json(state.users.update(id, input).await.map_err(failed("Erro ao atualizar usuário"))?))
}

#[utoipa::path(
    delete, path = "/usuarios/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Delete failed")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    id: IdPath,
) -> Result<StatusCode, JsonApiError> {
    let WithRejection(Path(id), _) = id;
    state.users.delete(id).await.map_err(failed("Erro ao deletar usuário"))?;
    Ok(StatusCode::NO_CONTENT)
}

