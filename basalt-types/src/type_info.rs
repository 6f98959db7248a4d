//! Runtime type descriptors.

use basalt_result::{Error, Result};

use crate::decimal::{DECIMAL12_FRACTION_DIGITS, MAX_DECIMAL_PRECISION};
use crate::format::estimate_field_size;
use crate::logical_type::LogicalType;

/// A runtime descriptor bound to one [`LogicalType`].
///
/// Carries the declared precision and scale for decimal kinds and a byte
/// length for variable-width kinds. Readers, writers, and the datum codec
/// dispatch on the descriptor instead of threading loose
/// `(type, precision, scale)` triples around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    logical_type: LogicalType,
    precision: u8,
    scale: i8,
    length: usize,
}

impl TypeInfo {
    /// Descriptor with the engine defaults for `ty`.
    ///
    /// Decimal kinds get their maximum precision; the two scale-9 legacy
    /// representations default to scale 9, the parameterized family to
    /// scale 0. Variable-width kinds default to length 0; real lengths
    /// come from the schema.
    pub fn new(ty: LogicalType) -> Self {
        let (precision, scale) = match ty {
            LogicalType::Decimal | LogicalType::DecimalV2 => {
                (27, DECIMAL12_FRACTION_DIGITS as i8)
            }
            LogicalType::Decimal32 => (9, 0),
            LogicalType::Decimal64 => (18, 0),
            LogicalType::Decimal128 => (MAX_DECIMAL_PRECISION, 0),
            _ => (0, 0),
        };
        Self {
            logical_type: ty,
            precision,
            scale,
            length: 0,
        }
    }

    /// Descriptor for a decimal kind with declared precision and scale.
    pub fn decimal(ty: LogicalType, precision: u8, scale: i8) -> Result<Self> {
        let max = match ty {
            LogicalType::Decimal | LogicalType::DecimalV2 => 27,
            LogicalType::Decimal32 => 9,
            LogicalType::Decimal64 => 18,
            LogicalType::Decimal128 => MAX_DECIMAL_PRECISION,
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "{other} does not carry precision and scale"
                )));
            }
        };
        if precision == 0 || precision > max {
            return Err(Error::InvalidArgumentError(format!(
                "precision {precision} outside 1..={max} for {ty}"
            )));
        }
        if scale < 0 || scale as u8 > precision {
            return Err(Error::InvalidArgumentError(format!(
                "scale {scale} outside 0..={precision} for {ty}"
            )));
        }
        let max_scale = match ty {
            // The legacy representations store at most nine fractional digits.
            LogicalType::Decimal | LogicalType::DecimalV2 => DECIMAL12_FRACTION_DIGITS as i8,
            _ => max as i8,
        };
        if scale > max_scale {
            return Err(Error::InvalidArgumentError(format!(
                "scale {scale} exceeds maximum {max_scale} for {ty}"
            )));
        }
        Ok(Self {
            logical_type: ty,
            precision,
            scale,
            length: 0,
        })
    }

    /// Descriptor for a variable-width kind with a schema-declared length.
    pub fn varlen(ty: LogicalType, length: usize) -> Self {
        Self {
            logical_type: ty,
            precision: 0,
            scale: 0,
            length,
        }
    }

    #[inline]
    pub fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    pub fn scale(&self) -> i8 {
        self.scale
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Encoded byte width of one value under this descriptor.
    pub fn size(&self) -> usize {
        estimate_field_size(self.logical_type, self.length)
    }
}
