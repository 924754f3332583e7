use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::token::AuthUser;
use crate::items::dto::ItemCommand;
use crate::items::repo::PgItemStore;
use crate::items::services::ItemService;
use crate::result::{internal, ServiceResult};
use crate::state::AppState;

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create))
        .route("/items", get(get_all))
        .route("/items/:id", get(get_by_id))
        .route("/items/:id", delete(remove))
}

fn service(state: &AppState) -> ItemService {
    ItemService::new(PgItemStore::new(state.db.clone()))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<ItemCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).create_item(payload).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_all_items().await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_item_by_id(id).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).delete_item(id).await.map_err(internal)
}
