use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{validate_account, AppState};
use crate::engine::settle;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlQuery {
    pub account: String,
    pub day: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlResponse {
    pub realized_pnl: String,
    pub match_count: usize,
    pub skipped_rows: usize,
    pub unmatched_exit_quantity: String,
}

/// Run FIFO settlement over the stored rows of one account/day.
///
/// Recomputed on every call; the result is never cached or persisted.
pub async fn get_pnl(
    Query(params): Query<PnlQuery>,
    State(state): State<AppState>,
) -> Result<Json<PnlResponse>, AppError> {
    let account = validate_account(&params.account)?;

    let (entries, exits) = state.repo.query_day_rows(account, params.day).await?;
    let result = settle(&entries, &exits);

    Ok(Json(PnlResponse {
        realized_pnl: result.realized_pnl.to_canonical_string(),
        match_count: result.matches.len(),
        skipped_rows: result.skipped_rows,
        unmatched_exit_quantity: result.unmatched_exit_quantity.to_canonical_string(),
    }))
}
