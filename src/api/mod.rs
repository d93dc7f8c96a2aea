pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;
