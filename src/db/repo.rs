//! Repository layer for journal storage.
//!
//! Rows are read back in insertion order (`rowid`), which is the FIFO
//! order the settlement engine expects.

use crate::domain::{
    Decimal, InstrumentKind, PremiumDirection, TradeRecord, TradeRole, TradeRow, TradeSide,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use uuid::Uuid;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert one trade record.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_trade(&self, record: &TradeRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO trades (
                id, account, day, role, ticker, kind, side, premium, strategy,
                price, quantity, executed_at, days_to_expiry, expiry, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(record.account.as_str())
        .bind(record.day.format(DAY_FORMAT).to_string())
        .bind(record.role.as_str())
        .bind(record.row.ticker.as_str())
        .bind(record.row.kind.as_str())
        .bind(record.row.side.as_str())
        .bind(record.row.premium.map(|p| p.as_str()))
        .bind(record.row.strategy.as_deref())
        .bind(record.row.price.to_canonical_string())
        .bind(record.row.quantity.to_canonical_string())
        .bind(record.row.executed_at.as_str())
        .bind(record.row.days_to_expiry)
        .bind(record.row.expiry.map(|d| d.format(DAY_FORMAT).to_string()))
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Query all trade records for an account/day in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_trades(
        &self,
        account: &str,
        day: NaiveDate,
    ) -> Result<Vec<TradeRecord>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, account, day, role, ticker, kind, side, premium, strategy,
                   price, quantity, executed_at, days_to_expiry, expiry
            FROM trades
            WHERE account = ? AND day = ?
            ORDER BY rowid ASC
            "#,
        )
        .bind(account)
        .bind(day.format(DAY_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Query the entry and exit rows for an account/day, each in
    /// insertion order, ready for the settlement engine.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_day_rows(
        &self,
        account: &str,
        day: NaiveDate,
    ) -> Result<(Vec<TradeRow>, Vec<TradeRow>), sqlx::Error> {
        let records = self.query_trades(account, day).await?;

        let mut entries = Vec::new();
        let mut exits = Vec::new();
        for record in records {
            match record.role {
                TradeRole::Entry => entries.push(record.row),
                TradeRole::Exit => exits.push(record.row),
            }
        }
        Ok((entries, exits))
    }
}

/// Rebuild a record from a stored row. Field decoding is lenient:
/// unknown enum strings fall back to their defaults rather than failing
/// the whole query.
fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> TradeRecord {
    let id_str: String = row.get("id");
    let day_str: String = row.get("day");
    let role_str: String = row.get("role");
    let kind_str: String = row.get("kind");
    let side_str: String = row.get("side");
    let premium_str: Option<String> = row.get("premium");
    let price_str: String = row.get("price");
    let quantity_str: String = row.get("quantity");
    let expiry_str: Option<String> = row.get("expiry");

    TradeRecord {
        id: Uuid::parse_str(&id_str).unwrap_or_default(),
        account: row.get("account"),
        day: NaiveDate::parse_from_str(&day_str, DAY_FORMAT).unwrap_or_default(),
        role: TradeRole::parse_lenient(&role_str),
        row: TradeRow {
            ticker: row.get("ticker"),
            kind: InstrumentKind::parse_lenient(&kind_str),
            side: TradeSide::parse_lenient(&side_str),
            premium: premium_str.map(|p| PremiumDirection::parse_lenient(&p)),
            strategy: row.get("strategy"),
            price: Decimal::from_str_canonical(&price_str).unwrap_or_default(),
            quantity: Decimal::from_str_canonical(&quantity_str).unwrap_or_default(),
            executed_at: row.get("executed_at"),
            days_to_expiry: row.get("days_to_expiry"),
            expiry: expiry_str.and_then(|d| NaiveDate::parse_from_str(&d, DAY_FORMAT).ok()),
        },
    }
}
