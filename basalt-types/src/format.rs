//! On-disk format generations and the conversions between them.
//!
//! Two real generations exist. V1 is the legacy representation with packed
//! calendar dates and the 12-byte fixed decimal; V2 is the current one with
//! epoch-based dates and 16-byte decimals. Readers of legacy segments use
//! [`convert_to_format`] to translate a stored type tag into the generation
//! they materialize, and segment writers size fixed-width cells with
//! [`estimate_field_size`].
//!
//! Both mapping directions are independent wildcard-free matches rather
//! than one bidirectional table: a new [`LogicalType`] variant must fail to
//! compile in each direction separately, so neither mapping can silently
//! fall through.

use std::fmt;

use crate::logical_type::LogicalType;

/// A versioned on-disk physical encoding convention.
///
/// `Unknown` is a sentinel that legacy segment headers can materialize from
/// a zero byte; it is never a valid conversion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormatVersion {
    Unknown,
    V1,
    V2,
}

impl DataFormatVersion {
    /// The raw byte written into segment headers.
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            DataFormatVersion::Unknown => 0,
            DataFormatVersion::V1 => 1,
            DataFormatVersion::V2 => 2,
        }
    }

    /// Decode a header byte. Anything unrecognized is the sentinel.
    #[inline]
    pub fn from_u8(raw: u8) -> DataFormatVersion {
        match raw {
            1 => DataFormatVersion::V1,
            2 => DataFormatVersion::V2,
            _ => DataFormatVersion::Unknown,
        }
    }
}

impl fmt::Display for DataFormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormatVersion::Unknown => f.write_str("UNKNOWN"),
            DataFormatVersion::V1 => f.write_str("V1"),
            DataFormatVersion::V2 => f.write_str("V2"),
        }
    }
}

/// True iff `ty` only makes sense under format generation 1.
#[inline]
pub fn specific_type_of_format_v1(ty: LogicalType) -> bool {
    matches!(
        ty,
        LogicalType::DateV1 | LogicalType::DatetimeV1 | LogicalType::Decimal
    )
}

/// True iff `ty` only makes sense under format generation 2.
#[inline]
pub fn specific_type_of_format_v2(ty: LogicalType) -> bool {
    matches!(
        ty,
        LogicalType::Date | LogicalType::Datetime | LogicalType::DecimalV2
    )
}

/// Fixed encoded byte width of `ty`, or `variable_length` verbatim for the
/// kinds whose width the caller decides.
///
/// The single-byte group mixes real one-byte values (booleans, tiny
/// integers) with structural and sentinel markers that occupy a placeholder
/// cell in fixed-width layouts.
pub fn estimate_field_size(ty: LogicalType, variable_length: usize) -> usize {
    match ty {
        LogicalType::Unknown
        | LogicalType::DiscreteDouble
        | LogicalType::Struct
        | LogicalType::Map
        | LogicalType::None
        | LogicalType::MaxValue
        | LogicalType::Boolean
        | LogicalType::TinyInt
        | LogicalType::UnsignedTinyInt => 1,
        LogicalType::SmallInt | LogicalType::UnsignedSmallInt => 2,
        LogicalType::DateV1 => 3,
        LogicalType::Int
        | LogicalType::UnsignedInt
        | LogicalType::Float
        | LogicalType::Date
        | LogicalType::Decimal32 => 4,
        LogicalType::BigInt
        | LogicalType::UnsignedBigInt
        | LogicalType::Double
        | LogicalType::DatetimeV1
        | LogicalType::Datetime
        | LogicalType::Decimal64 => 8,
        LogicalType::Decimal => 12,
        LogicalType::LargeInt | LogicalType::DecimalV2 | LogicalType::Decimal128 => 16,
        LogicalType::Char
        | LogicalType::Varchar
        | LogicalType::Hll
        | LogicalType::Object
        | LogicalType::Percentile
        | LogicalType::Json
        | LogicalType::Array
        | LogicalType::Null
        | LogicalType::Function
        | LogicalType::Time
        | LogicalType::Binary
        | LogicalType::Varbinary => variable_length,
    }
}

/// Translate `ty` into its equivalent under the requested generation.
///
/// Toward V2 the three legacy kinds map to their current counterparts and
/// everything else maps to itself. Toward V1 the three current kinds map
/// back to their legacy counterparts; kinds that exist only under
/// generation 2 map to [`LogicalType::Unknown`], signaling "not
/// representable in this generation".
///
/// # Panics
///
/// Panics when `version` is the `Unknown` sentinel. That is a caller bug,
/// not bad input: segment headers are validated long before type mapping
/// runs, and there is no sensible fallback tag to return.
pub fn convert_to_format(ty: LogicalType, version: DataFormatVersion) -> LogicalType {
    match version {
        DataFormatVersion::V2 => match ty {
            LogicalType::DateV1 => LogicalType::Date,
            LogicalType::DatetimeV1 => LogicalType::Datetime,
            LogicalType::Decimal => LogicalType::DecimalV2,
            LogicalType::Unknown
            | LogicalType::None
            | LogicalType::Boolean
            | LogicalType::TinyInt
            | LogicalType::UnsignedTinyInt
            | LogicalType::SmallInt
            | LogicalType::UnsignedSmallInt
            | LogicalType::Int
            | LogicalType::UnsignedInt
            | LogicalType::BigInt
            | LogicalType::UnsignedBigInt
            | LogicalType::LargeInt
            | LogicalType::Float
            | LogicalType::Double
            | LogicalType::DiscreteDouble
            | LogicalType::Char
            | LogicalType::Varchar
            | LogicalType::Date
            | LogicalType::Datetime
            | LogicalType::DecimalV2
            | LogicalType::Decimal32
            | LogicalType::Decimal64
            | LogicalType::Decimal128
            | LogicalType::Struct
            | LogicalType::Array
            | LogicalType::Map
            | LogicalType::Hll
            | LogicalType::Object
            | LogicalType::Percentile
            | LogicalType::Json
            | LogicalType::Null
            | LogicalType::Function
            | LogicalType::Time
            | LogicalType::Binary
            | LogicalType::Varbinary
            | LogicalType::MaxValue => ty,
            // no wildcard by intention
        },
        DataFormatVersion::V1 => match ty {
            LogicalType::Date => LogicalType::DateV1,
            LogicalType::Datetime => LogicalType::DatetimeV1,
            LogicalType::DecimalV2 => LogicalType::Decimal,
            LogicalType::Unknown
            | LogicalType::None
            | LogicalType::Struct
            | LogicalType::Array
            | LogicalType::Map
            | LogicalType::Decimal32
            | LogicalType::Decimal64
            | LogicalType::Decimal128
            | LogicalType::Null
            | LogicalType::Function
            | LogicalType::Time
            | LogicalType::Binary
            | LogicalType::Varbinary => LogicalType::Unknown,
            LogicalType::Boolean
            | LogicalType::TinyInt
            | LogicalType::UnsignedTinyInt
            | LogicalType::SmallInt
            | LogicalType::UnsignedSmallInt
            | LogicalType::Int
            | LogicalType::UnsignedInt
            | LogicalType::BigInt
            | LogicalType::UnsignedBigInt
            | LogicalType::LargeInt
            | LogicalType::Float
            | LogicalType::Double
            | LogicalType::DiscreteDouble
            | LogicalType::Char
            | LogicalType::Varchar
            | LogicalType::DateV1
            | LogicalType::DatetimeV1
            | LogicalType::Decimal
            | LogicalType::Hll
            | LogicalType::Object
            | LogicalType::Percentile
            | LogicalType::Json
            | LogicalType::MaxValue => ty,
            // no wildcard by intention
        },
        DataFormatVersion::Unknown => {
            panic!("cannot convert {ty} to the UNKNOWN format generation")
        }
    }
}

/// Convenience wrapper fixing the target generation to V1.
#[inline]
pub fn to_storage_format_v1(ty: LogicalType) -> LogicalType {
    convert_to_format(ty, DataFormatVersion::V1)
}

/// Convenience wrapper fixing the target generation to V2.
#[inline]
pub fn to_storage_format_v2(ty: LogicalType) -> LogicalType {
    convert_to_format(ty, DataFormatVersion::V2)
}
