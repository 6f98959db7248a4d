//! The closed enumeration of column logical kinds.

use std::fmt;

/// A tag identifying a column's logical kind, independent of physical
/// encoding.
///
/// This is a simple, C-like enum that is cheap to store and copy. The set is
/// closed: every exhaustive match in this workspace dispatches on it without
/// a wildcard arm, so introducing a new variant forces each of those sites
/// to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    /// Sentinel for kinds with no representation in the requested context.
    Unknown,
    /// Absent value marker used by sparse segment metadata.
    None,
    Boolean,
    TinyInt,
    UnsignedTinyInt,
    SmallInt,
    UnsignedSmallInt,
    Int,
    UnsignedInt,
    BigInt,
    UnsignedBigInt,
    /// 128-bit signed integer.
    LargeInt,
    Float,
    Double,
    /// Pre-aggregated double used by legacy rollup segments.
    DiscreteDouble,
    Char,
    Varchar,
    /// Generation-1 packed calendar date (3 bytes on disk).
    DateV1,
    /// Generation-2 date, stored as days since the Unix epoch.
    Date,
    /// Generation-1 digit-packed datetime (`YYYYMMDDHHMMSS`).
    DatetimeV1,
    /// Generation-2 datetime, stored as microseconds since the Unix epoch.
    Datetime,
    /// Generation-1 fixed decimal (12 bytes: integer part plus fraction).
    Decimal,
    /// Generation-2 exact decimal (16 bytes).
    DecimalV2,
    Decimal32,
    Decimal64,
    Decimal128,
    Struct,
    Array,
    Map,
    /// HyperLogLog sketch payload.
    Hll,
    /// Bitmap object payload.
    Object,
    /// Percentile sketch payload.
    Percentile,
    Json,
    Null,
    Function,
    Time,
    Binary,
    Varbinary,
    /// Upper-bound marker used by key comparisons.
    MaxValue,
}

impl LogicalType {
    /// Every variant, in declaration order. Backs the enumerated-coverage
    /// tests that keep the sizing and mapping functions total.
    pub const ALL: [LogicalType; 39] = [
        LogicalType::Unknown,
        LogicalType::None,
        LogicalType::Boolean,
        LogicalType::TinyInt,
        LogicalType::UnsignedTinyInt,
        LogicalType::SmallInt,
        LogicalType::UnsignedSmallInt,
        LogicalType::Int,
        LogicalType::UnsignedInt,
        LogicalType::BigInt,
        LogicalType::UnsignedBigInt,
        LogicalType::LargeInt,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::DiscreteDouble,
        LogicalType::Char,
        LogicalType::Varchar,
        LogicalType::DateV1,
        LogicalType::Date,
        LogicalType::DatetimeV1,
        LogicalType::Datetime,
        LogicalType::Decimal,
        LogicalType::DecimalV2,
        LogicalType::Decimal32,
        LogicalType::Decimal64,
        LogicalType::Decimal128,
        LogicalType::Struct,
        LogicalType::Array,
        LogicalType::Map,
        LogicalType::Hll,
        LogicalType::Object,
        LogicalType::Percentile,
        LogicalType::Json,
        LogicalType::Null,
        LogicalType::Function,
        LogicalType::Time,
        LogicalType::Binary,
        LogicalType::Varbinary,
        LogicalType::MaxValue,
    ];

    /// Canonical upper-case storage name, as written into schema metadata.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Unknown => "UNKNOWN",
            LogicalType::None => "NONE",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::TinyInt => "TINYINT",
            LogicalType::UnsignedTinyInt => "UNSIGNED_TINYINT",
            LogicalType::SmallInt => "SMALLINT",
            LogicalType::UnsignedSmallInt => "UNSIGNED_SMALLINT",
            LogicalType::Int => "INT",
            LogicalType::UnsignedInt => "UNSIGNED_INT",
            LogicalType::BigInt => "BIGINT",
            LogicalType::UnsignedBigInt => "UNSIGNED_BIGINT",
            LogicalType::LargeInt => "LARGEINT",
            LogicalType::Float => "FLOAT",
            LogicalType::Double => "DOUBLE",
            LogicalType::DiscreteDouble => "DISCRETE_DOUBLE",
            LogicalType::Char => "CHAR",
            LogicalType::Varchar => "VARCHAR",
            LogicalType::DateV1 => "DATE_V1",
            LogicalType::Date => "DATE",
            LogicalType::DatetimeV1 => "DATETIME_V1",
            LogicalType::Datetime => "DATETIME",
            LogicalType::Decimal => "DECIMAL",
            LogicalType::DecimalV2 => "DECIMALV2",
            LogicalType::Decimal32 => "DECIMAL32",
            LogicalType::Decimal64 => "DECIMAL64",
            LogicalType::Decimal128 => "DECIMAL128",
            LogicalType::Struct => "STRUCT",
            LogicalType::Array => "ARRAY",
            LogicalType::Map => "MAP",
            LogicalType::Hll => "HLL",
            LogicalType::Object => "OBJECT",
            LogicalType::Percentile => "PERCENTILE",
            LogicalType::Json => "JSON",
            LogicalType::Null => "NULL",
            LogicalType::Function => "FUNCTION",
            LogicalType::Time => "TIME",
            LogicalType::Binary => "BINARY",
            LogicalType::Varbinary => "VARBINARY",
            LogicalType::MaxValue => "MAX_VALUE",
        }
    }

    /// Inverse of [`LogicalType::name`]. Exact match only; schema metadata
    /// is written by us, so there is nothing to normalize.
    pub fn from_name(name: &str) -> Option<LogicalType> {
        LogicalType::ALL.iter().copied().find(|ty| ty.name() == name)
    }

    /// True for the signed and unsigned fixed-width integer kinds.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            LogicalType::TinyInt
                | LogicalType::UnsignedTinyInt
                | LogicalType::SmallInt
                | LogicalType::UnsignedSmallInt
                | LogicalType::Int
                | LogicalType::UnsignedInt
                | LogicalType::BigInt
                | LogicalType::UnsignedBigInt
                | LogicalType::LargeInt
        )
    }

    /// True for every decimal representation, legacy and current.
    pub fn is_decimal(&self) -> bool {
        matches!(
            self,
            LogicalType::Decimal
                | LogicalType::DecimalV2
                | LogicalType::Decimal32
                | LogicalType::Decimal64
                | LogicalType::Decimal128
        )
    }

    /// True for the calendar kinds of either generation.
    pub fn is_date_kind(&self) -> bool {
        matches!(
            self,
            LogicalType::DateV1
                | LogicalType::Date
                | LogicalType::DatetimeV1
                | LogicalType::Datetime
        )
    }

    /// True when the encoded width is caller-supplied rather than fixed.
    ///
    /// This is exactly the set for which [`crate::estimate_field_size`]
    /// returns its `variable_length` argument verbatim.
    pub fn is_variable_length(&self) -> bool {
        matches!(
            self,
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
                | LogicalType::Varbinary
        )
    }

    /// True for the nested container kinds.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            LogicalType::Struct | LogicalType::Array | LogicalType::Map
        )
    }

    /// True for engine-internal markers that never hold user data.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            LogicalType::Unknown
                | LogicalType::None
                | LogicalType::DiscreteDouble
                | LogicalType::Null
                | LogicalType::Function
                | LogicalType::Time
                | LogicalType::MaxValue
        )
    }

    /// True when the datum codec can parse and render this kind.
    pub fn supports_text_codec(&self) -> bool {
        self.is_integer()
            || self.is_decimal()
            || self.is_date_kind()
            || matches!(
                self,
                LogicalType::Boolean
                    | LogicalType::Float
                    | LogicalType::Double
                    | LogicalType::Char
                    | LogicalType::Varchar
                    | LogicalType::Json
                    | LogicalType::Binary
                    | LogicalType::Varbinary
            )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
