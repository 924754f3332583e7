use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::auth::token::AuthUser;
use crate::clients::dto::{ClientCommand, UpdateClientCommand};
use crate::clients::repo::PgClientStore;
use crate::clients::services::ClientService;
use crate::result::{internal, ServiceResult};
use crate::state::AppState;

pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", post(create))
        .route("/clients", get(get_all))
        .route("/clients", put(update))
        .route("/clients/:id", get(get_by_id))
        .route("/clients/:id", delete(remove))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub amount: Option<i64>,
}

fn service(state: &AppState) -> ClientService {
    ClientService::new(PgClientStore::new(state.db.clone()))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<ClientCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).create_client(payload).await.map_err(internal)
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<UpdateClientCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).update_client(payload).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state)
        .get_all_clients(query.amount)
        .await
        .map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_client_by_id(id).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).delete_client(id).await.map_err(internal)
}
