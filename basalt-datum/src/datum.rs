//! The tagged single-value container.

use basalt_types::{Decimal12, DecimalValue, OlapDate, OlapDatetime};

/// A single typed value.
///
/// Fixed-width kinds are stored inline; strings and binary payloads borrow
/// arena storage through the lifetime `'a`, so a datum must not outlive
/// the arena that parsed it. The variant must agree with the
/// [`LogicalType`](basalt_types::LogicalType) supplied alongside the
/// datum; the codec treats that agreement as a precondition rather than
/// checking it on every access.
///
/// `Null` marks an explicitly absent value. It is outside the text value
/// space: callers check nullability before invoking the codec in either
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Datum<'a> {
    Null,
    Boolean(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Int128(i128),
    Float32(f32),
    Float64(f64),
    /// Generation-1 packed calendar date.
    DateV1(OlapDate),
    /// Generation-2 date: days since the Unix epoch.
    Date(i32),
    /// Generation-1 digit-packed datetime.
    DatetimeV1(OlapDatetime),
    /// Generation-2 datetime: microseconds since the Unix epoch.
    Datetime(i64),
    /// Generation-1 fixed decimal.
    Decimal(Decimal12),
    /// Generation-2 exact decimal.
    DecimalV2(DecimalValue),
    Decimal32(DecimalValue),
    Decimal64(DecimalValue),
    Decimal128(DecimalValue),
    /// Arena-owned UTF-8 payload.
    String(&'a str),
    /// Arena-owned raw byte payload.
    Binary(&'a [u8]),
}

impl<'a> Datum<'a> {
    /// Reports whether this datum is the explicit null marker.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Datum::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Widening view of any inline signed integer variant.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Datum::Int8(v) => Some(i128::from(*v)),
            Datum::Int16(v) => Some(i128::from(*v)),
            Datum::Int32(v) => Some(i128::from(*v)),
            Datum::Int64(v) => Some(i128::from(*v)),
            Datum::Int128(v) => Some(*v),
            Datum::UInt8(v) => Some(i128::from(*v)),
            Datum::UInt16(v) => Some(i128::from(*v)),
            Datum::UInt32(v) => Some(i128::from(*v)),
            Datum::UInt64(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Float32(v) => Some(f64::from(*v)),
            Datum::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Datum::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// View of any decimal variant as the scaled-integer representation.
    pub fn as_decimal(&self) -> Option<DecimalValue> {
        match self {
            Datum::Decimal(d) => Some(d.to_decimal()),
            Datum::DecimalV2(d) | Datum::Decimal32(d) | Datum::Decimal64(d)
            | Datum::Decimal128(d) => Some(*d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert!(Datum::Null.is_null());
        assert_eq!(Datum::Boolean(true).as_bool(), Some(true));
        assert_eq!(Datum::Int16(-7).as_i128(), Some(-7));
        assert_eq!(Datum::UInt64(u64::MAX).as_i128(), Some(u64::MAX as i128));
        assert_eq!(Datum::Float32(0.5).as_f64(), Some(0.5));
        assert_eq!(Datum::String("x").as_str(), Some("x"));
        assert_eq!(Datum::Int32(1).as_str(), None);
    }

    #[test]
    fn legacy_decimal_widens_through_as_decimal() {
        let datum = Datum::Decimal("2.5".parse().unwrap());
        let wide = datum.as_decimal().unwrap();
        assert_eq!(wide.to_string(), "2.500000000");
    }
}
