use chrono::NaiveDate;

use crate::models::PriceRow;

pub const RETURN_DECIMALS: i32 = 4;

/// Rounds half to even, like numpy's `round`.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// `cum_return` compounds the rounded `instant_return`. A non-finite return is
/// left undefined and counts as zero in the sum.
pub fn calc_returns(closes: &[(NaiveDate, f64)]) -> Vec<PriceRow> {
    let mut rows = Vec::with_capacity(closes.len());
    let mut log_sum = 0.0;
    let mut previous: Option<f64> = None;

    for &(date, close) in closes {
        let (change, instant_return) = match previous {
            Some(prev) => {
                let log_return = close.ln() - prev.ln();
                let instant_return = if log_return.is_finite() {
                    Some(round_dp(log_return, RETURN_DECIMALS))
                } else {
                    None
                };
                (Some(close - prev), instant_return)
            }
            None => (None, None),
        };

        log_sum += instant_return.unwrap_or(0.0);
        rows.push(PriceRow::new(
            date,
            close,
            change,
            instant_return,
            log_sum.exp() - 1.0,
        ));
        previous = Some(close);
    }

    rows
}
