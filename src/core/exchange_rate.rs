use crate::core::currency::Currency;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors arising from constructing an exchange rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    #[error("exchange rate must be positive, got {rate} for {source_currency} -> {target_currency}")]
    NonPositive {
        source_currency: Currency,
        target_currency: Currency,
        rate: Decimal,
    },
    #[error("exchange rate source and target are both {0}")]
    SameCurrency(Currency),
}

/// An official exchange rate between two currencies.
///
/// One unit of `source_currency` equals `rate` units of `target_currency`.
/// Exchange rates are immutable once created.
///
/// # Examples
///
/// ```
/// use cnb_rates::core::currency::Currency;
/// use cnb_rates::core::exchange_rate::ExchangeRate;
/// use rust_decimal_macros::dec;
///
/// let rate = ExchangeRate::new(Currency::new("EUR"), Currency::base(), dec!(25.123)).unwrap();
/// assert_eq!(rate.to_string(), "EUR/CZK=25.123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    source_currency: Currency,
    target_currency: Currency,
    rate: Decimal,
}

impl ExchangeRate {
    /// Create a new exchange rate. The currencies must differ and the rate
    /// must be strictly positive.
    pub fn new(
        source_currency: Currency,
        target_currency: Currency,
        rate: Decimal,
    ) -> Result<Self, RateError> {
        if source_currency == target_currency {
            return Err(RateError::SameCurrency(source_currency));
        }
        if rate <= Decimal::ZERO {
            return Err(RateError::NonPositive {
                source_currency,
                target_currency,
                rate,
            });
        }
        Ok(Self {
            source_currency,
            target_currency,
            rate,
        })
    }

    pub fn source_currency(&self) -> &Currency {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &Currency {
        &self.target_currency
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}={}",
            self.source_currency, self.target_currency, self.rate
        )
    }
}
