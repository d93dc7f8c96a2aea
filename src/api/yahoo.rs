use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use super::{
    utils::{make_request, parse_response_object},
    yahoo_dto::YahooChartResponseDto,
};
use crate::{app::utils::dedup_by_date, error::StockError};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .with_context(|| "Failed to build HTTP client")
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Unadjusted daily closes for `[start, end)` in exchange-local dates.
///
/// The request window is padded by a day on each side and the rows are cut
/// back to the range by exchange-local date.
pub async fn get_daily_closes(
    symbol: &str,
    client: &Client,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(NaiveDate, f64)>> {
    let params = [
        ("period1", unix_midnight(start - Duration::days(1)).to_string()),
        ("period2", unix_midnight(end + Duration::days(1)).to_string()),
        ("interval", String::from("1d")),
        ("events", String::from("history")),
        ("includePrePost", String::from("false")),
    ];

    info!(symbol, %start, %end, "fetching daily history");
    let (status, res) = make_request(client, BASE_URL, symbol, &params)
        .await
        .with_context(|| format!("Yahoo Finance ({})", symbol))?;

    let closes = parse_chart_response(symbol, status, res, start, end)?;
    debug!(symbol, rows = closes.len(), "parsed daily history");

    Ok(closes)
}

/// Turns a chart response into daily closes.
///
/// An unknown symbol and an empty window both come back as `NoData`; any
/// other reported error or a failed status is a provider error.
pub fn parse_chart_response(
    symbol: &str,
    status: StatusCode,
    data: Value,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(NaiveDate, f64)>> {
    let response = parse_response_object::<YahooChartResponseDto>(
        data,
        &format!("Failed to parse Yahoo Finance chart for {}", symbol),
    )?;
    let chart = response.chart();

    if let Some(error) = chart.error() {
        if error.is_not_found() {
            return Err(no_data(symbol));
        }
        return Err(StockError::Provider {
            symbol: symbol.to_string(),
            message: error.message(),
        }
        .into());
    }

    if !status.is_success() {
        return Err(StockError::Provider {
            symbol: symbol.to_string(),
            message: format!("Request failed: {}", status),
        }
        .into());
    }

    let closes = chart
        .result()
        .as_ref()
        .and_then(|results| results.first())
        .map(|result| dedup_by_date(result.to_daily_closes(start, end)))
        .unwrap_or_default();

    if closes.is_empty() {
        return Err(no_data(symbol));
    }

    Ok(closes)
}

fn no_data(symbol: &str) -> anyhow::Error {
    StockError::NoData {
        symbol: symbol.to_string(),
    }
    .into()
}
