use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::token::AuthUser;
use crate::items::repo::PgItemStore;
use crate::orders::dto::ServiceOrderCommand;
use crate::orders::repo::PgOrderStore;
use crate::orders::services::OrderService;
use crate::result::{internal, ServiceResult};
use crate::state::AppState;

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create))
        .route("/orders", get(get_all))
        .route("/orders/:id", get(get_by_id))
        .route("/orders/:id", delete(remove))
        .route("/orders/client/:client_id", get(get_by_client))
}

fn service(state: &AppState) -> OrderService {
    OrderService::new(
        PgOrderStore::new(state.db.clone()),
        PgItemStore::new(state.db.clone()),
    )
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<ServiceOrderCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).create_order(payload).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_all_orders().await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_order_by_id(id).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_by_client(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(client_id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state)
        .get_orders_by_client_id(client_id)
        .await
        .map_err(internal)
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).delete_order(id).await.map_err(internal)
}
