use std::fmt;

use chrono::NaiveDate;

use super::PriceRow;

/// Date-indexed close series with its derived return columns, ascending by date.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub(crate) fn new(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&PriceRow> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&PriceRow> {
        self.rows.last()
    }

    /// Last `n` rows as a new table.
    pub fn tail(&self, n: usize) -> PriceTable {
        let from = self.rows.len().saturating_sub(n);
        PriceTable::new(self.rows[from..].to_vec())
    }

    /// Defined daily log returns, in date order.
    pub fn instant_returns(&self) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| *row.instant_return())
            .collect()
    }

    pub fn cum_returns(&self) -> Vec<(NaiveDate, f64)> {
        self.rows
            .iter()
            .map(|row| (*row.date(), *row.cum_return()))
            .collect()
    }
}

fn fmt_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => String::from("NaN"),
    }
}

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>12} {:>12} {:>15} {:>12}",
            "", "close", "change", "instant_return", "cum_return"
        )?;
        write!(f, "date")?;

        for row in &self.rows {
            write!(
                f,
                "\n{:<10} {:>12.6} {:>12} {:>15} {:>12.6}",
                row.date().to_string(),
                row.close(),
                fmt_optional(*row.change(), 6),
                fmt_optional(*row.instant_return(), 4),
                row.cum_return(),
            )?;
        }

        Ok(())
    }
}
