use chrono::{Duration, Local, NaiveDate};

use crate::error::StockError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lookback used when no start date is given.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

pub fn parse_date(field: &str) -> Result<NaiveDate, StockError> {
    NaiveDate::parse_from_str(field.trim(), DATE_FORMAT).map_err(|_| StockError::InvalidDate {
        value: field.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn default_end() -> NaiveDate {
    Local::now().date_naive()
}

pub fn default_start() -> NaiveDate {
    default_end() - Duration::days(DEFAULT_LOOKBACK_DAYS)
}

/// Resolves optional ISO dates into `[start, end)`, filling in the defaults.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), StockError> {
    let start = match start {
        Some(field) => parse_date(field)?,
        None => default_start(),
    };
    let end = match end {
        Some(field) => parse_date(field)?,
        None => default_end(),
    };

    Ok((start, end))
}

/// Sorts closes by date and keeps one close per date, the last one given.
pub fn dedup_by_date(mut closes: Vec<(NaiveDate, f64)>) -> Vec<(NaiveDate, f64)> {
    closes.sort_by_key(|(date, _)| *date);

    let mut deduped: Vec<(NaiveDate, f64)> = Vec::with_capacity(closes.len());
    for (date, close) in closes {
        match deduped.last_mut() {
            Some(last) if last.0 == date => last.1 = close,
            _ => deduped.push((date, close)),
        }
    }

    deduped
}
