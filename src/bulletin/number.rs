//! Numeric tokens as they appear in the bulletin.
//!
//! Amounts are plain integers and rates use a comma as the decimal
//! separator (`25,123`). The grammar is fixed and never consults the
//! host locale:
//!
//! ```text
//! integer := ws* sign? digit+ ws*
//! decimal := ws* sign? digit+ (',' digit+)? ws*
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest scale a [`Decimal`] can carry.
const MAX_SCALE: u32 = 28;

/// Errors from parsing a numeric token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("empty numeric field")]
    Empty,
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("expected at least one digit")]
    MissingDigits,
    #[error("number is out of range")]
    Overflow,
}

/// Parse an integer amount such as `100`.
pub fn parse_integer(token: &str) -> Result<i64, NumberError> {
    let (negative, digits, offset) = split_sign(token)?;
    let mut value: i64 = 0;
    for (i, ch) in digits.char_indices() {
        let digit = ch
            .to_digit(10)
            .ok_or(NumberError::UnexpectedCharacter {
                ch,
                position: offset + i,
            })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(NumberError::Overflow)?;
    }
    Ok(if negative { -value } else { value })
}

/// Parse a comma-separated decimal such as `25,123`.
pub fn parse_decimal(token: &str) -> Result<Decimal, NumberError> {
    let (negative, body, offset) = split_sign(token)?;
    let (whole, fraction) = match body.split_once(',') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };
    if whole.is_empty() {
        return Err(NumberError::MissingDigits);
    }

    let mut mantissa: i128 = 0;
    let mut scale: u32 = 0;
    accumulate(whole, offset, &mut mantissa)?;
    if let Some(fraction) = fraction {
        if fraction.is_empty() {
            return Err(NumberError::MissingDigits);
        }
        accumulate(fraction, offset + whole.len() + 1, &mut mantissa)?;
        scale = u32::try_from(fraction.len()).map_err(|_| NumberError::Overflow)?;
        if scale > MAX_SCALE {
            return Err(NumberError::Overflow);
        }
    }

    if negative {
        mantissa = -mantissa;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| NumberError::Overflow)
}

/// Trim surrounding whitespace and strip an optional sign. Returns the sign,
/// the remaining text, and its byte offset within the original token.
fn split_sign(token: &str) -> Result<(bool, &str, usize), NumberError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(NumberError::Empty);
    }
    let start = token.len() - token.trim_start().len();
    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if rest.is_empty() {
        return Err(NumberError::MissingDigits);
    }
    Ok((negative, rest, start + trimmed.len() - rest.len()))
}

fn accumulate(digits: &str, offset: usize, mantissa: &mut i128) -> Result<(), NumberError> {
    for (i, ch) in digits.char_indices() {
        let digit = ch.to_digit(10).ok_or(NumberError::UnexpectedCharacter {
            ch,
            position: offset + i,
        })?;
        *mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(digit)))
            .ok_or(NumberError::Overflow)?;
    }
    Ok(())
}
