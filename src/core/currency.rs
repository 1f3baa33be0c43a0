use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Code of the base currency every bulletin rate is quoted against.
pub const BASE_CURRENCY_CODE: &str = "CZK";

/// Three-letter currency code.
///
/// Identity and equality are defined by the code alone. `Currency::new`
/// accepts the code as given; use [`str::parse`] to validate user input.
///
/// # Examples
///
/// ```
/// use cnb_rates::core::currency::Currency;
///
/// let eur = Currency::new("EUR");
/// let usd: Currency = "usd".parse().unwrap();
/// assert_ne!(eur, usd);
/// assert_eq!(usd.code(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The base currency (CZK).
    pub fn base() -> Self {
        Self::new(BASE_CURRENCY_CODE)
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_base(&self) -> bool {
        self.0 == BASE_CURRENCY_CODE
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from currency code validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("invalid currency code {0:?}: expected three ASCII letters")]
    InvalidCode(String),
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Trims, upper-cases and checks for exactly three ASCII letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCode(s.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}

/// The currencies a caller wants rates for, keyed by code.
///
/// Acts as an allow-list when filtering bulletin lines. Duplicate codes in
/// the input collapse to a single entry.
///
/// # Examples
///
/// ```
/// use cnb_rates::core::currency::{Currency, CurrencyCatalog};
///
/// let catalog: CurrencyCatalog = ["CZK", "EUR", "EUR"]
///     .into_iter()
///     .map(Currency::new)
///     .collect();
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.contains_base());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    currencies: HashMap<String, Currency>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, currency: Currency) {
        self.currencies
            .entry(currency.code().to_string())
            .or_insert(currency);
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    pub fn contains_base(&self) -> bool {
        self.contains(BASE_CURRENCY_CODE)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// All codes in the catalog, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl FromIterator<Currency> for CurrencyCatalog {
    fn from_iter<T: IntoIterator<Item = Currency>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for currency in iter {
            catalog.insert(currency);
        }
        catalog
    }
}
