//! Conversion between typed datums and their canonical text form.
//!
//! `datum_from_string` parses under the grammar of the logical type and
//! allocates variable-length payloads from the caller's arena;
//! `datum_to_string` is the inverse rendering. For every fixed-width
//! numeric, date/time, and decimal kind the rendering is guaranteed to be
//! acceptable parse input and to round-trip bit-for-bit, declared decimal
//! scale included.
//!
//! Structured kinds (arrays, maps, structs) and engine-internal markers
//! are outside this codec's responsibility and are rejected with
//! [`Error::Unsupported`]; their parsing belongs to the structured-value
//! layer above.

use std::str::FromStr;

use basalt_result::{Error, Result};
use basalt_types::{
    Decimal12, DecimalValue, LogicalType, OlapDate, OlapDatetime, TypeInfo, calendar,
};

use crate::arena::MemArena;
use crate::datum::Datum;

/// Parse `text` as a value of `ty`, allocating variable-length payloads
/// from `arena`.
///
/// Decimal kinds keep the scale the literal was written with; use
/// [`datum_from_string_with_info`] to enforce a declared precision and
/// scale instead.
pub fn datum_from_string<'a>(
    ty: LogicalType,
    text: &str,
    arena: &'a MemArena,
) -> Result<Datum<'a>> {
    if ty.is_decimal() {
        return parse_decimal(ty, text, None);
    }
    datum_from_string_with_info(&TypeInfo::new(ty), text, arena)
}

/// Parse `text` under a full runtime descriptor.
///
/// Decimal literals are rescaled exactly to the descriptor's declared
/// scale, so excess fractional digits fail, and validated against its
/// declared precision.
pub fn datum_from_string_with_info<'a>(
    info: &TypeInfo,
    text: &str,
    arena: &'a MemArena,
) -> Result<Datum<'a>> {
    let ty = info.logical_type();
    match ty {
        LogicalType::Boolean => parse_boolean(text),
        LogicalType::TinyInt => Ok(Datum::Int8(parse_number(text, ty)?)),
        LogicalType::UnsignedTinyInt => Ok(Datum::UInt8(parse_number(text, ty)?)),
        LogicalType::SmallInt => Ok(Datum::Int16(parse_number(text, ty)?)),
        LogicalType::UnsignedSmallInt => Ok(Datum::UInt16(parse_number(text, ty)?)),
        LogicalType::Int => Ok(Datum::Int32(parse_number(text, ty)?)),
        LogicalType::UnsignedInt => Ok(Datum::UInt32(parse_number(text, ty)?)),
        LogicalType::BigInt => Ok(Datum::Int64(parse_number(text, ty)?)),
        LogicalType::UnsignedBigInt => Ok(Datum::UInt64(parse_number(text, ty)?)),
        LogicalType::LargeInt => Ok(Datum::Int128(parse_number(text, ty)?)),
        LogicalType::Float => {
            let value: f32 = parse_number(text, ty)?;
            if !value.is_finite() {
                return Err(Error::parse_error(text.trim(), ty.name()));
            }
            Ok(Datum::Float32(value))
        }
        LogicalType::Double => {
            let value: f64 = parse_number(text, ty)?;
            if !value.is_finite() {
                return Err(Error::parse_error(text.trim(), ty.name()));
            }
            Ok(Datum::Float64(value))
        }
        LogicalType::DateV1 => Ok(Datum::DateV1(text.trim().parse::<OlapDate>()?)),
        LogicalType::Date => Ok(Datum::Date(calendar::parse_epoch_days(text.trim())?)),
        LogicalType::DatetimeV1 => Ok(Datum::DatetimeV1(text.trim().parse::<OlapDatetime>()?)),
        LogicalType::Datetime => Ok(Datum::Datetime(calendar::parse_timestamp_micros(
            text.trim(),
        )?)),
        LogicalType::Decimal
        | LogicalType::DecimalV2
        | LogicalType::Decimal32
        | LogicalType::Decimal64
        | LogicalType::Decimal128 => {
            parse_decimal(ty, text, Some((info.precision(), info.scale())))
        }
        LogicalType::Char | LogicalType::Varchar | LogicalType::Json => {
            Ok(Datum::String(arena.alloc_str(text)))
        }
        LogicalType::Binary | LogicalType::Varbinary => {
            Ok(Datum::Binary(arena.alloc_bytes(text.as_bytes())))
        }
        LogicalType::Struct
        | LogicalType::Array
        | LogicalType::Map
        | LogicalType::Hll
        | LogicalType::Object
        | LogicalType::Percentile => Err(Error::Unsupported(format!(
            "{ty} values are parsed by the structured-value layer, not the datum codec"
        ))),
        LogicalType::Unknown
        | LogicalType::None
        | LogicalType::DiscreteDouble
        | LogicalType::Null
        | LogicalType::Function
        | LogicalType::Time
        | LogicalType::MaxValue => Err(Error::Unsupported(format!(
            "{ty} has no text representation"
        ))),
    }
}

/// Render `datum` as canonical text for `ty`.
pub fn datum_to_string(datum: &Datum<'_>, ty: LogicalType) -> Result<String> {
    datum_to_string_with_info(&TypeInfo::new(ty), datum)
}

/// Render `datum` under a full runtime descriptor.
///
/// The datum's tag must agree with the descriptor's logical type; a
/// disagreement is a caller bug and reports [`Error::Internal`]. A
/// [`Datum::Null`] has no text form; callers check nullability first.
pub fn datum_to_string_with_info(info: &TypeInfo, datum: &Datum<'_>) -> Result<String> {
    let ty = info.logical_type();
    match (ty, datum) {
        (LogicalType::Boolean, Datum::Boolean(v)) => {
            Ok((if *v { "1" } else { "0" }).to_owned())
        }
        (LogicalType::TinyInt, Datum::Int8(v)) => Ok(v.to_string()),
        (LogicalType::UnsignedTinyInt, Datum::UInt8(v)) => Ok(v.to_string()),
        (LogicalType::SmallInt, Datum::Int16(v)) => Ok(v.to_string()),
        (LogicalType::UnsignedSmallInt, Datum::UInt16(v)) => Ok(v.to_string()),
        (LogicalType::Int, Datum::Int32(v)) => Ok(v.to_string()),
        (LogicalType::UnsignedInt, Datum::UInt32(v)) => Ok(v.to_string()),
        (LogicalType::BigInt, Datum::Int64(v)) => Ok(v.to_string()),
        (LogicalType::UnsignedBigInt, Datum::UInt64(v)) => Ok(v.to_string()),
        (LogicalType::LargeInt, Datum::Int128(v)) => Ok(v.to_string()),
        (LogicalType::Float, Datum::Float32(v)) => Ok(v.to_string()),
        (LogicalType::Double, Datum::Float64(v)) => Ok(v.to_string()),
        (LogicalType::DateV1, Datum::DateV1(date)) => Ok(date.to_string()),
        (LogicalType::Date, Datum::Date(days)) => calendar::format_epoch_days(*days),
        (LogicalType::DatetimeV1, Datum::DatetimeV1(dt)) => Ok(dt.to_string()),
        (LogicalType::Datetime, Datum::Datetime(micros)) => {
            calendar::format_timestamp_micros(*micros)
        }
        (LogicalType::Decimal, Datum::Decimal(d)) => Ok(d.to_string()),
        (LogicalType::DecimalV2, Datum::DecimalV2(d))
        | (LogicalType::Decimal32, Datum::Decimal32(d))
        | (LogicalType::Decimal64, Datum::Decimal64(d))
        | (LogicalType::Decimal128, Datum::Decimal128(d)) => Ok(d.to_string()),
        (
            LogicalType::Char | LogicalType::Varchar | LogicalType::Json,
            Datum::String(s),
        ) => Ok((*s).to_owned()),
        (LogicalType::Binary | LogicalType::Varbinary, Datum::Binary(bytes)) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        (
            LogicalType::Struct
            | LogicalType::Array
            | LogicalType::Map
            | LogicalType::Hll
            | LogicalType::Object
            | LogicalType::Percentile,
            _,
        ) => Err(Error::Unsupported(format!(
            "{ty} values are rendered by the structured-value layer, not the datum codec"
        ))),
        (
            LogicalType::Unknown
            | LogicalType::None
            | LogicalType::DiscreteDouble
            | LogicalType::Null
            | LogicalType::Function
            | LogicalType::Time
            | LogicalType::MaxValue,
            _,
        ) => Err(Error::Unsupported(format!(
            "{ty} has no text representation"
        ))),
        (_, Datum::Null) => Err(Error::Internal(
            "null datum has no text form; check nullability before rendering".to_owned(),
        )),
        (ty, datum) => Err(Error::Internal(format!(
            "datum {datum:?} does not match type {ty}"
        ))),
    }
}

fn parse_boolean<'a>(text: &str) -> Result<Datum<'a>> {
    match text.trim() {
        "true" | "1" => Ok(Datum::Boolean(true)),
        "false" | "0" => Ok(Datum::Boolean(false)),
        other => Err(Error::parse_error(other, LogicalType::Boolean.name())),
    }
}

fn parse_number<T: FromStr>(text: &str, ty: LogicalType) -> Result<T> {
    let literal = text.trim();
    literal
        .parse::<T>()
        .map_err(|_| Error::parse_error(literal, ty.name()))
}

/// Parse a decimal literal for `ty`.
///
/// With a declared `(precision, scale)` the value is rescaled exactly to
/// the declared scale and checked against the declared precision. Without
/// one, the literal's own scale is preserved and only the kind's storage
/// ceiling applies.
fn parse_decimal<'a>(
    ty: LogicalType,
    text: &str,
    declared: Option<(u8, i8)>,
) -> Result<Datum<'a>> {
    let literal = text.trim();
    let reject = || Error::parse_error(literal, ty.name());

    let parsed: DecimalValue = literal.parse().map_err(|_| reject())?;
    let value = match declared {
        Some((precision, scale)) => {
            let rescaled = parsed.rescale(scale).map_err(|_| reject())?;
            if rescaled.precision() > precision {
                return Err(reject());
            }
            rescaled
        }
        None => parsed,
    };

    match ty {
        LogicalType::Decimal => {
            if value.scale() > 9 {
                return Err(reject());
            }
            let fixed = Decimal12::try_from(value).map_err(|_| reject())?;
            Ok(Datum::Decimal(fixed))
        }
        LogicalType::DecimalV2 => {
            if value.scale() > 9 || value.integer_digits() > 18 {
                return Err(reject());
            }
            Ok(Datum::DecimalV2(value))
        }
        LogicalType::Decimal32 => {
            if value.precision() > 9 {
                return Err(reject());
            }
            Ok(Datum::Decimal32(value))
        }
        LogicalType::Decimal64 => {
            if value.precision() > 18 {
                return Err(reject());
            }
            Ok(Datum::Decimal64(value))
        }
        LogicalType::Decimal128 => Ok(Datum::Decimal128(value)),
        other => Err(Error::Internal(format!("{other} is not a decimal kind"))),
    }
}
