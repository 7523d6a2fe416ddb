//! Fixed-point conversion of human-readable token amounts into base units.

use alloy::primitives::U256;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnitsError {
    #[error("valor vazio")]
    Empty,
    #[error("formato decimal inválido: {0}")]
    InvalidFormat(String),
    #[error("mais de {max} casas decimais")]
    TooManyDecimals { max: u8 },
    #[error("o valor deve ser maior que zero")]
    NotPositive,
    #[error("valor excede o limite de 256 bits")]
    Overflow,
}

/// Scales a decimal string such as `"100.5"` by `10^decimals`.
///
/// Only plain positive decimals are accepted: no sign, exponent, or
/// separators. Fractional digits beyond `decimals` are rejected unless they
/// are zeros; they are never rounded or truncated away.
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(UnitsError::InvalidFormat(amount.to_string()));
    }

    let fraction = fraction.trim_end_matches('0');
    let scale = usize::from(decimals);
    if fraction.len() > scale {
        return Err(UnitsError::TooManyDecimals { max: decimals });
    }

    let mut digits = String::with_capacity(integer.len() + scale);
    digits.push_str(integer);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(scale - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Err(UnitsError::NotPositive);
    }

    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::Overflow)
}
