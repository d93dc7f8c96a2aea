use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use derive_getters::Getters;
use strum_macros::{Display, EnumIter};

use super::{
    PlotTheme,
    histogram::{Bin, histogram},
    render,
};
use crate::error::StockError;

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum FigureKind {
    #[strum(to_string = "Performance")]
    Performance,
    #[strum(to_string = "Return distribution")]
    ReturnDist,
}

impl FigureKind {
    pub fn file_suffix(&self) -> &'static str {
        match self {
            FigureKind::Performance => "performance",
            FigureKind::ReturnDist => "return_dist",
        }
    }

    pub fn size(&self) -> (f64, f64) {
        match self {
            FigureKind::Performance => (10.0, 5.0),
            FigureKind::ReturnDist => (9.0, 5.0),
        }
    }
}

#[derive(Clone, Debug, Getters)]
pub struct ReturnDistribution {
    symbol: String,
    bins: Vec<Bin>,
    sample_size: usize,
}

impl ReturnDistribution {
    pub fn new(symbol: &str, returns: &[f64], bins: usize) -> Result<Self, StockError> {
        if returns.is_empty() {
            return Err(StockError::NoReturns);
        }

        Ok(Self {
            symbol: symbol.to_string(),
            bins: histogram(returns, bins)?,
            sample_size: returns.len(),
        })
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| *bin.count()).max().unwrap_or(0)
    }

    pub fn value_range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (*first.lower(), *last.upper()),
            _ => (0.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, Getters)]
pub struct PerformanceCurve {
    symbol: String,
    points: Vec<(NaiveDate, f64)>,
}

impl PerformanceCurve {
    pub fn new(symbol: &str, points: Vec<(NaiveDate, f64)>) -> Result<Self, StockError> {
        if points.is_empty() {
            return Err(StockError::NoPerformance);
        }

        Ok(Self {
            symbol: symbol.to_string(),
            points,
        })
    }

    pub fn value_range(&self) -> (f64, f64) {
        let min = self.points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else {
            (max.abs() * 0.05).max(0.01)
        };

        (min - pad, max + pad)
    }

    /// A single-day curve spans one day.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let first = self.first_date().unwrap_or_default();
        let last = self.last_date().unwrap_or_default();
        if last > first {
            (first, last)
        } else {
            (first, first + Duration::days(1))
        }
    }

    pub fn day_offsets(&self) -> Vec<(f64, f64)> {
        let (first, _) = self.date_range();
        self.points
            .iter()
            .map(|(date, value)| ((*date - first).num_days() as f64, *value))
            .collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(date, _)| *date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(date, _)| *date)
    }
}

#[derive(Clone, Debug)]
pub enum Figure {
    ReturnDist(ReturnDistribution),
    Performance(PerformanceCurve),
}

impl Figure {
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::ReturnDist(_) => FigureKind::ReturnDist,
            Figure::Performance(_) => FigureKind::Performance,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Figure::ReturnDist(dist) => dist.symbol(),
            Figure::Performance(curve) => curve.symbol(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Figure::ReturnDist(dist) => {
                format!("{}: Daily Log Return Distribution", dist.symbol())
            }
            Figure::Performance(curve) => format!("{}: Performance Over Period", curve.symbol()),
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            Figure::ReturnDist(_) => "Daily log return",
            Figure::Performance(_) => "Date",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Figure::ReturnDist(_) => "Frequency",
            Figure::Performance(_) => "Cumulative return",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_{}.png", self.symbol(), self.kind().file_suffix())
    }

    pub fn save(&self, path: &Path, theme: &PlotTheme) -> Result<()> {
        let size = theme.pixels(self.kind().size());
        let rendered = match self {
            Figure::ReturnDist(dist) => render::draw_return_dist(self, dist, path, size, theme),
            Figure::Performance(curve) => render::draw_performance(self, curve, path, size, theme),
        };

        rendered.with_context(|| format!("Failed to save '{}' to {}", self.title(), path.display()))
    }
}
