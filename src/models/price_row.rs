use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct PriceRow {
    date: NaiveDate,
    close: f64,
    change: Option<f64>,
    instant_return: Option<f64>,
    cum_return: f64,
}
