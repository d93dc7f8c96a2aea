pub mod price_row;
pub mod price_table;
pub mod stock;

pub use price_row::PriceRow;
pub use price_table::PriceTable;
pub use stock::Stock;
