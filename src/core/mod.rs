pub mod currency;
pub mod exchange_rate;
