//! Daily bulletin parsing.
//!
//! The bulletin is line-feed separated text. The first two lines are
//! headers and every following non-blank line has five `|`-separated
//! fields:
//!
//! ```text
//! 17.10.2026 #201
//! země|měna|množství|kód|kurz
//! EMU|euro|1|EUR|24,330
//! Japonsko|jen|100|JPY|15,512
//! ```
//!
//! A rate is quoted per `amount` units of the foreign currency, so the
//! parser divides it down to a per-unit rate against CZK.

use crate::bulletin::error::{BulletinError, LineFault};
use crate::bulletin::number::{parse_decimal, parse_integer};
use crate::core::currency::{CurrencyCatalog, BASE_CURRENCY_CODE};
use crate::core::exchange_rate::ExchangeRate;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of header lines preceding the data lines.
const HEADER_LINES: usize = 2;
/// Fields per data line: country, currency name, amount, code, rate.
const FIELD_COUNT: usize = 5;

const AMOUNT_FIELD: usize = 2;
const CODE_FIELD: usize = 3;
const RATE_FIELD: usize = 4;

/// Publication date and sequence number from the first bulletin line,
/// e.g. `17.10.2026 #201`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletinHeader {
    pub date: NaiveDate,
    pub sequence: u32,
}

/// Bulletin parser.
///
/// Stateless; every call works only on its arguments.
pub struct BulletinParser;

impl BulletinParser {
    /// Parse bulletin text into per-unit CZK rates for the requested currencies.
    ///
    /// Lines for currencies missing from `requested` are dropped. A data line
    /// with the wrong field count or an unparsable number aborts the whole
    /// parse, whether or not its currency was requested. Requested lines must
    /// also carry a positive amount and rate and appear only once.
    ///
    /// # Examples
    ///
    /// ```
    /// use cnb_rates::bulletin::parser::BulletinParser;
    /// use cnb_rates::core::currency::{Currency, CurrencyCatalog};
    /// use rust_decimal_macros::dec;
    ///
    /// let catalog: CurrencyCatalog = ["CZK", "EUR"].into_iter().map(Currency::new).collect();
    /// let rates = BulletinParser::parse("header1\nheader2\nCountry|Name|1|EUR|25,123", &catalog).unwrap();
    ///
    /// assert_eq!(rates.len(), 1);
    /// assert_eq!(rates[0].source_currency().code(), "EUR");
    /// assert_eq!(rates[0].rate(), dec!(25.123));
    /// ```
    pub fn parse(
        raw: &str,
        requested: &CurrencyCatalog,
    ) -> Result<Vec<ExchangeRate>, BulletinError> {
        let base = requested
            .get(BASE_CURRENCY_CODE)
            .ok_or_else(|| BulletinError::MissingBaseCurrency {
                base: BASE_CURRENCY_CODE.to_string(),
            })?;

        if raw.trim().is_empty() {
            return Err(BulletinError::EmptyBulletin);
        }

        let lines: Vec<&str> = raw.split('\n').collect();
        if lines.len() < HEADER_LINES + 1 {
            return Err(BulletinError::TooFewLines {
                expected: HEADER_LINES + 1,
                actual: lines.len(),
            });
        }

        let mut rates = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, line) in lines.iter().copied().enumerate().skip(HEADER_LINES) {
            if line.trim().is_empty() {
                continue;
            }

            let malformed = |cause: LineFault| BulletinError::MalformedLine {
                line_number: index + 1,
                content: line.to_string(),
                cause,
            };

            let entry = parse_line(line).map_err(&malformed)?;

            let Some(foreign) = requested.get(entry.code) else {
                log::debug!("line {}: {} not requested, skipping", index + 1, entry.code);
                continue;
            };
            if foreign == base {
                log::debug!("line {}: base currency listed against itself, skipping", index + 1);
                continue;
            }
            if !seen.insert(entry.code) {
                return Err(malformed(LineFault::DuplicateCurrency(
                    entry.code.to_string(),
                )));
            }

            if entry.amount <= 0 {
                return Err(malformed(LineFault::NonPositiveAmount(entry.amount)));
            }
            if entry.rate <= Decimal::ZERO {
                return Err(malformed(LineFault::NonPositiveRate(entry.rate)));
            }

            // Both operands are positive, so only rounding to zero can fail here.
            let normalized = entry.rate / Decimal::from(entry.amount);
            let rate = ExchangeRate::new(foreign.clone(), base.clone(), normalized).map_err(|_| {
                malformed(LineFault::Underflow {
                    rate: entry.rate,
                    amount: entry.amount,
                })
            })?;
            rates.push(rate);
        }

        log::debug!(
            "parsed {} rate(s) for {} requested currencies",
            rates.len(),
            requested.len()
        );
        Ok(rates)
    }

    /// Read the publication date and sequence number from the first line.
    ///
    /// Returns `None` when the line does not look like `DD.MM.YYYY #N`.
    /// [`parse`](Self::parse) never depends on the header.
    pub fn parse_header(raw: &str) -> Option<BulletinHeader> {
        let first = raw.lines().next()?.trim();
        let (date, sequence) = first.split_once('#')?;
        let date = NaiveDate::parse_from_str(date.trim(), "%d.%m.%Y").ok()?;
        let sequence = sequence.trim().parse().ok()?;
        Some(BulletinHeader { date, sequence })
    }
}

/// The fields of a data line the parser needs.
struct LineEntry<'a> {
    code: &'a str,
    amount: i64,
    rate: Decimal,
}

fn parse_line(line: &str) -> Result<LineEntry<'_>, LineFault> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineFault::FieldCount {
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let amount = parse_integer(fields[AMOUNT_FIELD]).map_err(LineFault::Amount)?;
    let rate = parse_decimal(fields[RATE_FIELD]).map_err(LineFault::Rate)?;

    Ok(LineEntry {
        code: fields[CODE_FIELD].trim(),
        amount,
        rate,
    })
}
