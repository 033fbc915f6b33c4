use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::validation::ValidationError;

/// Fractional digits carried by [`TokenAmount`].
pub const TOKEN_DECIMALS: u32 = 18;
const TOKEN_SCALE: u128 = 10u128.pow(TOKEN_DECIMALS);
const CENTS_DECIMALS: usize = 2;

/// Split a plain decimal literal into its integer and fraction digits.
fn split_decimal(input: &str, max_fraction: usize) -> Result<(bool, &str, &str), ValidationError> {
    let s = input.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ValidationError::InvalidAmount);
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || frac_part.len() > max_fraction {
        return Err(ValidationError::InvalidAmount);
    }
    Ok((negative, int_part, frac_part))
}

fn scaled(int_part: &str, frac_part: &str, decimals: usize) -> Result<u128, ValidationError> {
    let int: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| ValidationError::AmountOutOfRange)?
    };
    let frac: u128 = if frac_part.is_empty() {
        0
    } else {
        format!("{frac_part:0<decimals$}")
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?
    };
    int.checked_mul(10u128.pow(decimals as u32))
        .and_then(|v| v.checked_add(frac))
        .ok_or(ValidationError::AmountOutOfRange)
}

/// Non-negative token quantity with 18 fractional digits.
///
/// Rendered without trailing zeros: `1.5`, `3`, `0.0001`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    /// Parse a decimal literal such as `"1.5"`.
    ///
    /// Negative input is reported as [`ValidationError::NonPositiveAmount`]
    /// so callers surface the same message as for zero.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (negative, int_part, frac_part) = split_decimal(input, TOKEN_DECIMALS as usize)?;
        let raw = scaled(int_part, frac_part, TOKEN_DECIMALS as usize)?;
        if negative && raw > 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self(raw))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }

    /// Value of this quantity at `price` per whole token, rounded half-up to
    /// the cent.
    pub fn value_at(self, price: UsdValue) -> Option<UsdValue> {
        let product = self.0.checked_mul(price.cents())?;
        let rounded = product.checked_add(TOKEN_SCALE / 2)? / TOKEN_SCALE;
        Some(UsdValue::from_cents(rounded))
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let int = self.0 / TOKEN_SCALE;
        let frac = self.0 % TOKEN_SCALE;
        if frac == 0 {
            return write!(f, "{int}");
        }
        let digits = format!("{frac:0width$}", width = TOKEN_DECIMALS as usize);
        write!(f, "{int}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for TokenAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// US-dollar amount in whole cents, rendered with two decimals (`4800.00`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct UsdValue(u128);

impl UsdValue {
    pub const ZERO: UsdValue = UsdValue(0);

    pub fn from_cents(cents: u128) -> Self {
        Self(cents)
    }

    pub fn from_dollars(dollars: u128) -> Self {
        Self(dollars * 100)
    }

    pub fn cents(&self) -> u128 {
        self.0
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (negative, int_part, frac_part) = split_decimal(input, CENTS_DECIMALS)?;
        let cents = scaled(int_part, frac_part, CENTS_DECIMALS)?;
        if negative && cents > 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self(cents))
    }

    pub fn checked_add(self, other: UsdValue) -> Option<UsdValue> {
        self.0.checked_add(other.0).map(UsdValue)
    }
}

impl Display for UsdValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for UsdValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> Sum<&'a UsdValue> for UsdValue {
    fn sum<I: Iterator<Item = &'a UsdValue>>(iter: I) -> Self {
        UsdValue(iter.map(|v| v.0).fold(0u128, u128::saturating_add))
    }
}
