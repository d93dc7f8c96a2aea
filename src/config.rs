use std::path::PathBuf;

use anyhow::{Error, Result};
use clap::Parser;
use derive_getters::Getters;

use crate::{
    app::utils::{normalize_symbol, parse_date},
    error::StockError,
    models::stock::DEFAULT_BINS,
};

pub const DEFAULT_SYMBOL: &str = "MSFT";
pub const DEFAULT_DPI: u32 = 200;

/// Daily return analysis and charts for a single equity symbol.
#[derive(Debug, Parser)]
#[command(name = "stock-returns", version, about)]
pub struct Args {
    /// Ticker symbol, case and surrounding whitespace are ignored
    #[arg(env = "STOCK_SYMBOL", default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// First date to include (YYYY-MM-DD), defaults to one year ago
    #[arg(long, env = "STOCK_START")]
    pub start: Option<String>,

    /// First date to exclude (YYYY-MM-DD), defaults to today
    #[arg(long, env = "STOCK_END")]
    pub end: Option<String>,

    /// Number of histogram buckets for the return distribution
    #[arg(long, env = "STOCK_BINS", default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Directory the chart images are written to
    #[arg(long, env = "STOCK_OUT_DIR", default_value = ".")]
    pub out_dir: String,

    /// Resolution of the saved images
    #[arg(long, env = "STOCK_DPI", default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Save the charts without opening the terminal viewer
    #[arg(long, env = "STOCK_NO_SHOW")]
    pub no_show: bool,
}

#[derive(Clone, Debug, Getters)]
pub struct AnalysisConfig {
    symbol: String,
    start: Option<String>,
    end: Option<String>,
    bins: usize,
    out_dir: PathBuf,
    dpi: u32,
    show: bool,
}

impl AnalysisConfig {
    /// Validates the arguments so that bad input fails before any network call.
    pub fn from_args(args: Args) -> Result<Self> {
        let symbol = normalize_symbol(&args.symbol);
        if symbol.is_empty() {
            return Err(Error::msg("Symbol must not be empty"));
        }

        for date in [&args.start, &args.end].into_iter().flatten() {
            parse_date(date)?;
        }

        if args.bins == 0 {
            return Err(StockError::InvalidBins.into());
        }
        if args.dpi == 0 {
            return Err(Error::msg("DPI must be greater than zero"));
        }

        Ok(Self {
            symbol,
            start: args.start,
            end: args.end,
            bins: args.bins,
            out_dir: PathBuf::from(shellexpand::tilde(&args.out_dir).into_owned()),
            dpi: args.dpi,
            show: !args.no_show,
        })
    }
}
