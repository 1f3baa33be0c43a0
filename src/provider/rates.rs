use crate::bulletin::error::BulletinError;
use crate::bulletin::parser::BulletinParser;
use crate::core::currency::{Currency, CurrencyCatalog, BASE_CURRENCY_CODE};
use crate::core::exchange_rate::ExchangeRate;
use crate::provider::source::{BulletinSource, SourceError};
use thiserror::Error;

/// Errors from fetching and parsing today's rates.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Bulletin(#[from] BulletinError),
}

/// Official CZK rates for a set of requested currencies.
///
/// Only rates published in the bulletin are returned. Nothing is inverted
/// or derived, and currencies the bulletin does not list are ignored.
///
/// # Examples
///
/// ```
/// use cnb_rates::core::currency::Currency;
/// use cnb_rates::provider::rates::ExchangeRateProvider;
/// use cnb_rates::provider::source::StaticSource;
/// use rust_decimal_macros::dec;
///
/// let provider = ExchangeRateProvider::new(StaticSource::new(
///     "17.10.2026 #201\nzemě|měna|množství|kód|kurz\nEMU|euro|1|EUR|24,330\n",
/// ));
/// let rates = provider
///     .get_exchange_rates(["CZK", "EUR", "XYZ"].map(Currency::new))
///     .unwrap();
/// assert_eq!(rates.len(), 1);
/// assert_eq!(rates[0].source_currency().code(), "EUR");
/// assert_eq!(rates[0].rate(), dec!(24.33));
/// ```
pub struct ExchangeRateProvider<S> {
    source: S,
}

impl<S: BulletinSource> ExchangeRateProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch today's bulletin and return rates for `currencies`.
    ///
    /// The base currency must be among `currencies`; this is checked before
    /// the bulletin is fetched.
    pub fn get_exchange_rates(
        &self,
        currencies: impl IntoIterator<Item = Currency>,
    ) -> Result<Vec<ExchangeRate>, ProviderError> {
        let catalog: CurrencyCatalog = currencies.into_iter().collect();
        if !catalog.contains_base() {
            return Err(BulletinError::MissingBaseCurrency {
                base: BASE_CURRENCY_CODE.to_string(),
            }
            .into());
        }

        let raw = self.source.fetch().map_err(|e| {
            log::warn!("fetching bulletin from {} failed: {}", self.source.name(), e);
            e
        })?;
        match BulletinParser::parse_header(&raw) {
            Some(header) => log::info!(
                "bulletin #{} of {} from {}",
                header.sequence,
                header.date,
                self.source.name()
            ),
            None => log::info!("bulletin from {} has no recognizable header", self.source.name()),
        }

        let rates = BulletinParser::parse(&raw, &catalog).map_err(|e| {
            log::warn!("bulletin from {} rejected: {}", self.source.name(), e);
            e
        })?;
        log::info!(
            "{} of {} requested currencies found",
            rates.len(),
            catalog.len() - 1
        );
        Ok(rates)
    }
}
