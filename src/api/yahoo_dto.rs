use chrono::{DateTime, NaiveDate};
use derive_getters::Getters;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooErrorDto {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartResultDto {
    #[serde(default)]
    meta: YahooMetaDto,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicatorsDto,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooMetaDto {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooQuoteDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooQuoteDto {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl YahooErrorDto {
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("Not Found")
    }

    pub fn message(&self) -> String {
        match &self.description {
            Some(description) => format!("{}: {}", self.code, description),
            None => self.code.clone(),
        }
    }
}

impl YahooChartResultDto {
    /// Closes keyed by exchange-local calendar date, limited to `[start, end)`.
    ///
    /// Null or non-finite closes are dropped.
    pub fn to_daily_closes(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, f64)> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .zip(quote.close.iter())
            .filter_map(|(ts, close)| {
                let close = close.filter(|c| c.is_finite())?;
                let date = DateTime::from_timestamp(ts + self.meta.gmtoffset, 0)?.date_naive();
                (start <= date && date < end).then_some((date, close))
            })
            .collect()
    }
}
