pub mod health;
pub mod pnl;
pub mod positions;
pub mod trades;

use crate::config::Config;
use crate::db::Repository;
use crate::error::AppError;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/v1/trades",
            post(trades::log_trade).get(trades::get_trades),
        )
        .route("/v1/pnl", get(pnl::get_pnl))
        .route("/v1/positions/open", get(positions::get_open_positions))
        .layer(cors)
        .with_state(state)
}

pub(crate) fn validate_account(account: &str) -> Result<&str, AppError> {
    let trimmed = account.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("account must not be empty".into()));
    }
    Ok(trimmed)
}
