use std::{cmp::Ordering, fmt, str::FromStr};

use ethereum_types::U512;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use super::{DECIMAL_MAX_BIT_LEN, DECIMAL_PRECISION};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecimalError {
    #[error("Decimal overflow: value exceeds 316 bits")]
    Overflow,
    #[error("Decimal operation would produce a negative value")]
    NegativeResult,
    #[error("Decimal division by zero")]
    DivisionByZero,
    #[error("Invalid decimal string: {0}")]
    InvalidString(String),
    #[error("Too much precision, max 18 decimal places: {0}")]
    TooMuchPrecision(String),
}

/// Non-negative fixed point decimal with 18 fractional digits.
///
/// The value is kept as the integer `value * 10^18`. Operations are exact,
/// round half to even (`checked_mul`) or truncate (`checked_quo_int`).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(U512);

fn precision_multiplier() -> U512 {
    U512::exp10(DECIMAL_PRECISION)
}

fn check_bit_len(raw: U512) -> Result<Decimal, DecimalError> {
    if raw.bits() > DECIMAL_MAX_BIT_LEN {
        return Err(DecimalError::Overflow);
    }
    Ok(Decimal(raw))
}

/// Removes the precision digits from a scaled product, rounding half to even.
fn chop_precision_and_round(product: U512) -> U512 {
    let multiplier = precision_multiplier();
    let (quo, rem) = product.div_mod(multiplier);
    let half = multiplier / 2;
    match rem.cmp(&half) {
        Ordering::Less => quo,
        Ordering::Greater => quo + U512::one(),
        // Ties round to the even neighbour
        Ordering::Equal if quo.bit(0) => quo + U512::one(),
        Ordering::Equal => quo,
    }
}

impl Decimal {
    pub fn zero() -> Self {
        Self(U512::zero())
    }

    pub fn one() -> Self {
        Self(precision_multiplier())
    }

    pub fn from_u64(value: u64) -> Self {
        // u64::MAX * 10^18 stays far below the bit length limit
        Self(U512::from(value) * precision_multiplier())
    }

    /// Builds `value * 10^-prec`, e.g. `with_precision(5, 1)` is 0.5.
    /// `prec` is capped at 18.
    pub fn with_precision(value: u64, prec: usize) -> Self {
        let shift = DECIMAL_PRECISION - prec.min(DECIMAL_PRECISION);
        Self(U512::from(value) * U512::exp10(shift))
    }

    /// Builds a decimal from its scaled integer representation
    pub fn from_raw(raw: U512) -> Result<Self, DecimalError> {
        check_bit_len(raw)
    }

    pub fn raw(&self) -> U512 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        let sum = self.0.checked_add(other.0).ok_or(DecimalError::Overflow)?;
        check_bit_len(sum)
    }

    pub fn checked_sub(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        self.0
            .checked_sub(other.0)
            .map(Decimal)
            .ok_or(DecimalError::NegativeResult)
    }

    /// Multiplies two decimals, rounding the discarded digits half to even
    pub fn checked_mul(&self, other: &Decimal) -> Result<Decimal, DecimalError> {
        let product = self.0.checked_mul(other.0).ok_or(DecimalError::Overflow)?;
        check_bit_len(chop_precision_and_round(product))
    }

    /// Multiplies by an integer, exactly
    pub fn checked_mul_int(&self, value: u64) -> Result<Decimal, DecimalError> {
        let product = self
            .0
            .checked_mul(U512::from(value))
            .ok_or(DecimalError::Overflow)?;
        check_bit_len(product)
    }

    /// Divides by an integer, truncating toward zero
    pub fn checked_quo_int(&self, value: u64) -> Result<Decimal, DecimalError> {
        if value == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(Decimal(self.0 / U512::from(value)))
    }

    /// Integer part of the decimal, fractional digits dropped
    pub fn truncate_int(&self) -> U512 {
        self.0 / precision_multiplier()
    }

    /// Integer part of the decimal, or `None` if it does not fit in a u64
    pub fn truncate_u64(&self) -> Option<u64> {
        let int = self.truncate_int();
        (int <= U512::from(u64::MAX)).then(|| int.low_u64())
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal::from_u64(value)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::InvalidString(s.to_string());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };
        if int_part.is_empty() || (s.contains('.') && frac_part.is_empty()) {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_part.len() > DECIMAL_PRECISION {
            return Err(DecimalError::TooMuchPrecision(s.to_string()));
        }

        let padded = format!("{int_part}{frac_part:0<width$}", width = DECIMAL_PRECISION);
        let raw = U512::from_dec_str(&padded).map_err(|_| DecimalError::Overflow)?;
        check_bit_len(raw)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int, frac) = self.0.div_mod(precision_multiplier());
        let frac = frac.to_string();
        write!(f, "{int}.{frac:0>width$}", width = DECIMAL_PRECISION)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
