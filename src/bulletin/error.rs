use crate::bulletin::number::NumberError;
use rust_decimal::Decimal;
use thiserror::Error;

/// The two broad classes of bulletin parsing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed unusable arguments. Retrying with the same inputs
    /// will fail again.
    InvalidArgument,
    /// The bulletin text does not follow the expected layout.
    MalformedInput,
}

/// Errors that can occur while parsing a bulletin.
///
/// Every variant maps to an [`ErrorKind`] via [`kind`](Self::kind).
#[derive(Debug, Error)]
pub enum BulletinError {
    /// The requested currencies do not include the base currency.
    #[error("requested currencies do not contain the base currency {base}")]
    MissingBaseCurrency { base: String },

    /// The bulletin text is empty or whitespace only.
    #[error("bulletin text is empty or whitespace only")]
    EmptyBulletin,

    /// Fewer lines than two headers plus one data line.
    #[error("too few lines: expected at least {expected}, got {actual}")]
    TooFewLines { expected: usize, actual: usize },

    /// A data line could not be turned into an exchange rate.
    #[error("line {line_number}: {content:?} cannot be parsed as an exchange rate")]
    MalformedLine {
        /// 1-based line number within the bulletin.
        line_number: usize,
        /// The raw line text.
        content: String,
        #[source]
        cause: LineFault,
    },
}

impl BulletinError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BulletinError::MissingBaseCurrency { .. } | BulletinError::EmptyBulletin => {
                ErrorKind::InvalidArgument
            }
            BulletinError::TooFewLines { .. } | BulletinError::MalformedLine { .. } => {
                ErrorKind::MalformedInput
            }
        }
    }

    /// The 1-based line number, for errors tied to a single line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            BulletinError::MalformedLine { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

/// What exactly was wrong with a malformed data line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineFault {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("invalid amount")]
    Amount(#[source] NumberError),

    #[error("invalid rate")]
    Rate(#[source] NumberError),

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    #[error("rate {rate} per {amount} units rounds to zero per unit")]
    Underflow { rate: Decimal, amount: i64 },

    #[error("currency {0} appears more than once")]
    DuplicateCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_kinds() {
        assert_eq!(
            BulletinError::MissingBaseCurrency { base: "CZK".into() }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(BulletinError::EmptyBulletin.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            BulletinError::TooFewLines { expected: 3, actual: 1 }.kind(),
            ErrorKind::MalformedInput
        );
    }

    #[test]
    fn test_malformed_line_chains_number_error() {
        let err = BulletinError::MalformedLine {
            line_number: 3,
            content: "EMU|euro|1|EUR|x".into(),
            cause: LineFault::Rate(NumberError::MissingDigits),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.line_number(), Some(3));
        assert!(err.to_string().contains("line 3"));

        let cause = err.source().unwrap();
        assert_eq!(cause.to_string(), "invalid rate");
        let root = cause.source().unwrap();
        assert_eq!(root.to_string(), "expected at least one digit");
    }
}
