use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::token::TokenIssuer;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub tokens: TokenIssuer,
}

impl AppState {
    /// Builds the shared state from the environment. Fails fast on missing
    /// configuration or a weak signing secret; a misconfigured process must
    /// not serve.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let tokens = TokenIssuer::new(&config.jwt)?;
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db, config, tokens })
    }
}
