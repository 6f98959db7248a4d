//! Exact decimal values for both on-disk decimal representations.
//!
//! The current representation stores a decimal as a scaled `i128` with an
//! explicit scale, matching Arrow's `Decimal128` semantics. The legacy
//! 12-byte representation splits the value into an 8-byte integer part and
//! a 4-byte fraction holding exactly nine decimal digits. Both round-trip
//! through text without precision loss.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use arrow::datatypes::DECIMAL128_MAX_PRECISION;
use arrow_buffer::i256;

/// Maximum precision supported by [`DecimalValue`] (Decimal128 semantics).
pub const MAX_DECIMAL_PRECISION: u8 = DECIMAL128_MAX_PRECISION;

/// Digits carried by the fraction word of the legacy 12-byte decimal.
pub const DECIMAL12_FRACTION_DIGITS: u32 = 9;

/// Integer digits the legacy 12-byte decimal can hold.
pub const DECIMAL12_INTEGER_DIGITS: u32 = 18;

const FRACTION_BASE: i64 = 1_000_000_000;
const POW10: i256 = i256::from_i128(10);

/// Errors that can occur while constructing or manipulating decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The text is not a decimal literal at all.
    InvalidLiteral { literal: String },
    /// Requested scale falls outside the supported range.
    ScaleOutOfRange { scale: i8 },
    /// Value exceeds the maximum representable precision.
    PrecisionOverflow { value: i128, scale: i8 },
    /// Arithmetic overflowed the Decimal128 range.
    Overflow,
    /// Lowering the scale would discard nonzero fractional digits.
    InexactRescale { from: i8, to: i8 },
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidLiteral { literal } => {
                write!(f, "'{literal}' is not a decimal literal")
            }
            DecimalError::ScaleOutOfRange { scale } => {
                write!(f, "decimal scale {scale} outside supported range")
            }
            DecimalError::PrecisionOverflow { value, scale } => {
                write!(
                    f,
                    "decimal value {value} with scale {scale} exceeds maximum precision"
                )
            }
            DecimalError::Overflow => write!(f, "decimal arithmetic overflow"),
            DecimalError::InexactRescale { from, to } => {
                write!(
                    f,
                    "cannot rescale decimal from scale {from} to {to} without losing digits"
                )
            }
        }
    }
}

impl std::error::Error for DecimalError {}

/// An exact decimal: scaled integer plus fractional-digit count.
///
/// `scale` is the number of fractional digits; the numeric value is
/// `value / 10^scale`. Equality and ordering are representation-aware:
/// two values with different scales compare numerically via `Ord`, but
/// `PartialEq` is derived on the raw parts so a round-tripped value is
/// bit-for-bit identical, trailing zeros included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    value: i128,
    scale: i8,
}

impl DecimalValue {
    /// Create a decimal from its raw parts, validating precision bounds.
    pub fn new(value: i128, scale: i8) -> Result<Self, DecimalError> {
        if scale < 0 || scale > MAX_DECIMAL_PRECISION as i8 {
            return Err(DecimalError::ScaleOutOfRange { scale });
        }
        if digit_count(value) > MAX_DECIMAL_PRECISION {
            return Err(DecimalError::PrecisionOverflow { value, scale });
        }
        Ok(Self { value, scale })
    }

    /// Construct from an integer with zero scale.
    pub fn from_i64(value: i64) -> Self {
        // i64 has at most 19 digits, always within Decimal128 precision.
        Self {
            value: value as i128,
            scale: 0,
        }
    }

    /// The scaled integer backing this decimal.
    #[inline]
    pub fn raw_value(self) -> i128 {
        self.value
    }

    /// The number of fractional digits.
    #[inline]
    pub fn scale(self) -> i8 {
        self.scale
    }

    /// Total digit count of the backing integer.
    #[inline]
    pub fn precision(self) -> u8 {
        digit_count(self.value)
    }

    /// Digit count of the integer part (digits left of the point).
    pub fn integer_digits(self) -> u8 {
        let total = self.precision();
        total.saturating_sub(self.scale as u8).max(1)
    }

    /// Change the scale without changing the numeric value.
    ///
    /// Raising the scale multiplies the backing integer by a power of ten
    /// and can overflow precision; lowering it requires the discarded
    /// digits to be zero.
    pub fn rescale(self, to: i8) -> Result<Self, DecimalError> {
        if to < 0 || to > MAX_DECIMAL_PRECISION as i8 {
            return Err(DecimalError::ScaleOutOfRange { scale: to });
        }
        match to.cmp(&self.scale) {
            Ordering::Equal => Ok(self),
            Ordering::Greater => {
                let factor = pow10_i128((to - self.scale) as u32)?;
                let value = self
                    .value
                    .checked_mul(factor)
                    .ok_or(DecimalError::Overflow)?;
                Self::new(value, to)
            }
            Ordering::Less => {
                let factor = pow10_i128((self.scale - to) as u32)?;
                if self.value % factor != 0 {
                    return Err(DecimalError::InexactRescale {
                        from: self.scale,
                        to,
                    });
                }
                Self::new(self.value / factor, to)
            }
        }
    }

    /// Lossy conversion for diagnostics and float contexts.
    pub fn to_f64(self) -> f64 {
        if self.value == 0 {
            return 0.0;
        }
        (self.value as f64) / 10f64.powi(self.scale as i32)
    }
}

impl FromStr for DecimalValue {
    type Err = DecimalError;

    /// Parse a plain decimal literal: optional sign, digits, optional
    /// point and fractional digits. The scale is the number of fractional
    /// digits written, trailing zeros included. Exponent notation is not a
    /// storage literal and is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalError::InvalidLiteral {
            literal: s.to_owned(),
        };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(&b'-') => (true, &trimmed[1..]),
            Some(&b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_part.len() > MAX_DECIMAL_PRECISION as usize {
            return Err(DecimalError::ScaleOutOfRange {
                scale: frac_part.len() as i8,
            });
        }

        let mut value: i128 = 0;
        for digit in int_part.bytes().chain(frac_part.bytes()) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((digit - b'0') as i128))
                .ok_or(DecimalError::Overflow)?;
        }
        if negative {
            value = -value;
        }

        Self::new(value, frac_part.len() as i8)
    }
}

impl fmt::Display for DecimalValue {
    /// Renders exactly `scale` fractional digits; trailing zeros are part
    /// of the representation and are retained.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.value);
        }
        let digits = self.value.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if self.value < 0 {
            f.write_str("-")?;
        }
        if digits.len() <= scale {
            f.write_str("0.")?;
            for _ in digits.len()..scale {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        } else {
            let split = digits.len() - scale;
            f.write_str(&digits[..split])?;
            f.write_str(".")?;
            f.write_str(&digits[split..])
        }
    }
}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    /// Numeric comparison across scales. Widening to `i256` keeps the
    /// cross-scale alignment from overflowing at full Decimal128 range.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.value.cmp(&other.value);
        }
        let max_scale = self.scale.max(other.scale);
        let lhs = i256::from_i128(self.value)
            .wrapping_mul(POW10.wrapping_pow((max_scale - self.scale) as u32));
        let rhs = i256::from_i128(other.value)
            .wrapping_mul(POW10.wrapping_pow((max_scale - other.scale) as u32));
        lhs.cmp(&rhs)
    }
}

/// The legacy 12-byte fixed decimal: integer part plus a nine-digit
/// fraction. Both words carry the sign of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decimal12 {
    integer: i64,
    fraction: i32,
}

impl Decimal12 {
    /// Assemble from raw parts, validating the fraction range and that the
    /// two words agree on sign.
    pub fn new(integer: i64, fraction: i32) -> Result<Self, DecimalError> {
        if fraction.unsigned_abs() as i64 >= FRACTION_BASE {
            return Err(DecimalError::ScaleOutOfRange {
                scale: DECIMAL12_FRACTION_DIGITS as i8,
            });
        }
        if (integer < 0 && fraction > 0) || (integer > 0 && fraction < 0) {
            return Err(DecimalError::InvalidLiteral {
                literal: format!("{integer}:{fraction}"),
            });
        }
        if integer.unsigned_abs() >= 10u64.pow(DECIMAL12_INTEGER_DIGITS) {
            return Err(DecimalError::PrecisionOverflow {
                value: integer as i128,
                scale: 0,
            });
        }
        Ok(Self { integer, fraction })
    }

    /// The integer part, sign included.
    #[inline]
    pub fn integer(self) -> i64 {
        self.integer
    }

    /// The nine-digit fraction word, sign included.
    #[inline]
    pub fn fraction(self) -> i32 {
        self.fraction
    }

    /// Widen to the current representation at scale 9.
    pub fn to_decimal(self) -> DecimalValue {
        let value = self.integer as i128 * FRACTION_BASE as i128 + self.fraction as i128;
        DecimalValue {
            value,
            scale: DECIMAL12_FRACTION_DIGITS as i8,
        }
    }
}

impl TryFrom<DecimalValue> for Decimal12 {
    type Error = DecimalError;

    fn try_from(value: DecimalValue) -> Result<Self, DecimalError> {
        let scaled = value.rescale(DECIMAL12_FRACTION_DIGITS as i8)?;
        let raw = scaled.raw_value();
        let integer = raw / FRACTION_BASE as i128;
        let fraction = (raw % FRACTION_BASE as i128) as i32;
        let integer = i64::try_from(integer).map_err(|_| DecimalError::PrecisionOverflow {
            value: raw,
            scale: scaled.scale(),
        })?;
        Self::new(integer, fraction)
    }
}

impl FromStr for Decimal12 {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: DecimalValue = s.parse()?;
        if value.scale() > DECIMAL12_FRACTION_DIGITS as i8 {
            return Err(DecimalError::ScaleOutOfRange {
                scale: value.scale(),
            });
        }
        Self::try_from(value)
    }
}

impl fmt::Display for Decimal12 {
    /// Fraction rendered with trailing zeros trimmed; a zero fraction
    /// renders as a bare integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.integer < 0 || self.fraction < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer.unsigned_abs())?;
        if self.fraction != 0 {
            let digits = format!(
                "{:0width$}",
                self.fraction.unsigned_abs(),
                width = DECIMAL12_FRACTION_DIGITS as usize
            );
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

fn digit_count(value: i128) -> u8 {
    let mut remaining = value.unsigned_abs();
    if remaining == 0 {
        return 1;
    }
    let mut count = 0u8;
    while remaining != 0 {
        remaining /= 10;
        count += 1;
    }
    count
}

fn pow10_i128(exp: u32) -> Result<i128, DecimalError> {
    10i128.checked_pow(exp).ok_or(DecimalError::Overflow)
}
