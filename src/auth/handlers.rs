use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::auth::{dto::AuthCommand, services::AuthenticationService};
use crate::result::{internal, ServiceResult};
use crate::state::AppState;
use crate::users::repo::PgUserStore;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AuthCommand>,
) -> Result<ServiceResult, (StatusCode, String)> {
    let service = AuthenticationService::new(
        Arc::new(PgUserStore::new(state.db.clone())),
        state.tokens.clone(),
    );
    service.authenticate(&payload).await.map_err(internal)
}
