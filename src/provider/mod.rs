pub mod config;
pub mod rates;
pub mod source;
