use anyhow::{Context, Result};
use chrono::NaiveDate;
use derive_getters::Getters;
use tracing::info;

use super::PriceTable;
use crate::{
    api::yahoo,
    app::{
        calc::calc_returns,
        utils::{dedup_by_date, format_date, normalize_symbol, resolve_range},
    },
    error::StockError,
    plot::{Figure, PerformanceCurve, ReturnDistribution},
};

pub const DEFAULT_BINS: usize = 50;

/// One symbol's daily closes over `[start, end)` with derived returns.
///
/// The table is built once when the stock is loaded and never changes.
#[derive(Clone, Debug, Getters)]
pub struct Stock {
    symbol: String,
    start: String,
    end: String,
    data: PriceTable,
}

impl Stock {
    /// Fetches the daily history for `symbol` and enriches it.
    ///
    /// `start` defaults to one year ago and `end` to today. Fails with
    /// [`StockError::NoData`] when the provider has no rows for the range.
    pub async fn load(symbol: &str, start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let symbol = normalize_symbol(symbol);
        let (start_date, end_date) = resolve_range(start, end)?;

        let closes = {
            let client = yahoo::build_client()?;
            yahoo::get_daily_closes(&symbol, &client, start_date, end_date)
                .await
                .with_context(|| format!("Failed to load daily history for {}", symbol))?
        };

        let stock = Self::build(symbol, start_date, end_date, closes)?;
        info!(symbol = %stock.symbol, rows = stock.data.len(), "loaded stock");

        Ok(stock)
    }

    /// Builds a stock from an already fetched close series.
    pub fn from_closes(
        symbol: &str,
        start: Option<&str>,
        end: Option<&str>,
        closes: Vec<(NaiveDate, f64)>,
    ) -> Result<Self> {
        let (start_date, end_date) = resolve_range(start, end)?;
        Self::build(normalize_symbol(symbol), start_date, end_date, closes)
    }

    fn build(
        symbol: String,
        start: NaiveDate,
        end: NaiveDate,
        closes: Vec<(NaiveDate, f64)>,
    ) -> Result<Self> {
        if closes.is_empty() {
            return Err(StockError::NoData { symbol }.into());
        }
        let closes = dedup_by_date(closes);

        Ok(Self {
            data: PriceTable::new(calc_returns(&closes)),
            symbol,
            start: format_date(start),
            end: format_date(end),
        })
    }

    /// Histogram of the defined daily log returns over `bins` buckets.
    pub fn plot_return_dist(&self, bins: usize) -> Result<Figure> {
        let dist = ReturnDistribution::new(&self.symbol, &self.data.instant_returns(), bins)?;
        Ok(Figure::ReturnDist(dist))
    }

    /// Cumulative return against date.
    pub fn plot_performance(&self) -> Result<Figure> {
        let curve = PerformanceCurve::new(&self.symbol, self.data.cum_returns())?;
        Ok(Figure::Performance(curve))
    }
}
