use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::token::AuthUser;
use crate::result::{internal, ServiceResult};
use crate::state::AppState;
use crate::users::dto::{UpdateUserCommand, UserCommand};
use crate::users::repo::PgUserStore;
use crate::users::services::UserService;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create))
        .route("/users", get(get_all))
        .route("/users", put(update))
        .route("/users/:id", get(get_by_id))
        .route("/users/:id", delete(remove))
}

fn service(state: &AppState) -> UserService {
    UserService::new(PgUserStore::new(state.db.clone()))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<UserCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).create_user(payload).await.map_err(internal)
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Json(payload): Json<UpdateUserCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).update_user(payload).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_all_users().await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).get_user_by_id(id).await.map_err(internal)
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ServiceResult, (StatusCode, String)> {
    service(&state).delete_user(id).await.map_err(internal)
}
