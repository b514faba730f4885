use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{validate_account, AppState};
use crate::domain::{
    days_to_expiry, parse_option_symbol, Decimal, InstrumentKind, PremiumDirection, TradeRecord,
    TradeRole, TradeRow, TradeSide,
};
use crate::engine::effective_kind;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTradeRequest {
    pub account: String,
    pub day: NaiveDate,
    pub role: TradeRole,
    pub ticker: String,
    pub kind: InstrumentKind,
    pub side: TradeSide,
    pub premium: Option<PremiumDirection>,
    pub strategy: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
    #[serde(default)]
    pub executed_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTradeResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiry: Option<i64>,
}

/// Log one execution. When the ticker parses as an option contract the
/// expiry and days-to-expiry are derived server-side from the journal
/// day.
pub async fn log_trade(
    State(state): State<AppState>,
    Json(req): Json<LogTradeRequest>,
) -> Result<(StatusCode, Json<LogTradeResponse>), AppError> {
    let account = validate_account(&req.account)?.to_string();

    let normalized_ticker = req.ticker.trim().to_uppercase();
    let parsed = match effective_kind(req.kind, &normalized_ticker) {
        InstrumentKind::Option => parse_option_symbol(&normalized_ticker),
        _ => None,
    };
    let expiry = parsed.as_ref().map(|p| p.expiry);
    let dte = expiry.and_then(|e| days_to_expiry(req.day, e));

    let record = TradeRecord::new(
        account,
        req.day,
        req.role,
        TradeRow {
            ticker: req.ticker,
            kind: req.kind,
            side: req.side,
            premium: req.premium,
            strategy: req.strategy,
            price: req.price,
            quantity: req.quantity,
            executed_at: req.executed_at,
            days_to_expiry: dte,
            expiry,
        },
    );

    state.repo.insert_trade(&record).await?;

    Ok((
        StatusCode::CREATED,
        Json(LogTradeResponse {
            id: record.id.to_string(),
            expiry,
            days_to_expiry: dte,
        }),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesQuery {
    pub account: String,
    pub day: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesResponse {
    pub trades: Vec<TradeDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDto {
    pub id: String,
    pub role: String,
    pub ticker: String,
    pub kind: String,
    pub side: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    pub price: String,
    pub quantity: String,
    pub executed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiry: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
}

pub async fn get_trades(
    Query(params): Query<TradesQuery>,
    State(state): State<AppState>,
) -> Result<Json<TradesResponse>, AppError> {
    let account = validate_account(&params.account)?;

    let records = state.repo.query_trades(account, params.day).await?;

    let trades = records
        .into_iter()
        .map(|r| TradeDto {
            id: r.id.to_string(),
            role: r.role.to_string(),
            ticker: r.row.ticker,
            kind: r.row.kind.to_string(),
            side: r.row.side.to_string(),
            premium: r.row.premium.map(|p| p.to_string()),
            strategy: r.row.strategy,
            price: r.row.price.to_canonical_string(),
            quantity: r.row.quantity.to_canonical_string(),
            executed_at: r.row.executed_at,
            days_to_expiry: r.row.days_to_expiry,
            expiry: r.row.expiry,
        })
        .collect();

    Ok(Json(TradesResponse { trades }))
}
