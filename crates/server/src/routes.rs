use axum::{extract::Path, routing::get, Json, Router};
use axum_extra::extract::WithRejection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{ServiceInfo, StatusMessage};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod products;
pub mod stores;
pub mod users;

pub const SERVICE_NAME: &str = "API 3º Bimestre";

/// JSON body whose rejection renders as a JSON 400.
pub(crate) type JsonBody<T> = WithRejection<Json<T>, JsonApiError>;
/// Integer `:id` path segment whose rejection renders as a JSON 400.
pub(crate) type IdPath = WithRejection<Path<i32>, JsonApiError>;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service info", body = crate::openapi::ServiceInfoDoc)))]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(SERVICE_NAME))
}

#[utoipa::path(get, path = "/status", tag = "health", responses((status = 200, description = "Online", body = crate::openapi::StatusDoc)))]
pub async fn status() -> Json<StatusMessage> {
    Json(StatusMessage { message: "API Online".into() })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, entity CRUD and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/status", get(status))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .merge(users::router())
        .merge(stores::router())
        .merge(products::router())
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path only
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
