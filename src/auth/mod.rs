use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod password;
pub mod services;
pub mod token;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
