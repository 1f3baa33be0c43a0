//! # cnb-rates
//!
//! Official CZK exchange rates from the Czech National Bank daily bulletin.
//!
//! Given the bulletin text and the currencies a caller cares about, the
//! parser returns per-unit rates against CZK for every requested currency
//! the bulletin publishes.
//!
//! ## Architecture
//!
//! - **core** — Value types: currencies, the requested-currency catalog, exchange rates
//! - **bulletin** — Bulletin parsing and comma-decimal number tokens
//! - **provider** — Bulletin sources (HTTP, file, memory) and the rate provider

pub mod bulletin;
pub mod core;
pub mod provider;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::bulletin::error::{BulletinError, ErrorKind, LineFault};
    pub use crate::bulletin::parser::{BulletinHeader, BulletinParser};
    pub use crate::core::currency::{Currency, CurrencyCatalog, BASE_CURRENCY_CODE};
    pub use crate::core::exchange_rate::ExchangeRate;
    pub use crate::provider::config::ProviderConfig;
    pub use crate::provider::rates::{ExchangeRateProvider, ProviderError};
    pub use crate::provider::source::{BulletinSource, FileSource, HttpSource, StaticSource};
}
