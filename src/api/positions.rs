use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{validate_account, AppState};
use crate::engine::open_positions;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPositionsQuery {
    pub account: String,
    pub day: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPositionsResponse {
    pub positions: Vec<OpenPositionDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPositionDto {
    pub ticker: String,
    pub kind: String,
    pub side: String,
    pub premium: String,
    pub entry_quantity: String,
    pub exit_quantity: String,
    pub remaining_quantity: String,
}

/// Open positions per key for one account/day, for pre-filling exit
/// quantities. Uses the same key function as settlement.
pub async fn get_open_positions(
    Query(params): Query<OpenPositionsQuery>,
    State(state): State<AppState>,
) -> Result<Json<OpenPositionsResponse>, AppError> {
    let account = validate_account(&params.account)?;

    let (entries, exits) = state.repo.query_day_rows(account, params.day).await?;

    let positions = open_positions(&entries, &exits)
        .into_iter()
        .map(|p| OpenPositionDto {
            ticker: p.key.ticker,
            kind: p.key.kind.to_string(),
            side: p.key.side.to_string(),
            premium: p.key.premium.to_string(),
            entry_quantity: p.entry_quantity.to_canonical_string(),
            exit_quantity: p.exit_quantity.to_canonical_string(),
            remaining_quantity: p.remaining_quantity.to_canonical_string(),
        })
        .collect();

    Ok(Json(OpenPositionsResponse { positions }))
}
