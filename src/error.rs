use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StockError {
    #[error("No data returned for {symbol}. Check symbol/dates.")]
    NoData { symbol: String },

    #[error("No returns to plot.")]
    NoReturns,

    #[error("No cumulative performance to plot.")]
    NoPerformance,

    #[error("Histogram needs at least one bin")]
    InvalidBins,

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Market data request for {symbol} failed: {message}")]
    Provider { symbol: String, message: String },

    #[error("{0}")]
    MissingCapability(String),
}
