//! Logical types and on-disk format generations for the basalt storage
//! engine.
//!
//! This crate is the authority on what a column *is*: the closed
//! [`LogicalType`] enumeration, the [`DataFormatVersion`] generations and
//! the conversions between them, per-type encoded widths, and the runtime
//! [`TypeInfo`] descriptor consumed by readers, writers, and the datum
//! codec. The value-support types the codec needs, exact decimals and
//! calendar values, live here too, next to the types that own them.
//!
//! Everything in this crate is a pure function over immutable metadata.
//! The sizing and format-mapping functions are written as wildcard-free
//! matches on purpose: adding a [`LogicalType`] variant must break the
//! build in every place that has an opinion about it.

pub mod calendar;
pub mod decimal;
pub mod format;
pub mod logical_type;
pub mod type_info;

pub use calendar::{OlapDate, OlapDatetime};
pub use decimal::{Decimal12, DecimalError, DecimalValue, MAX_DECIMAL_PRECISION};
pub use format::{
    DataFormatVersion, convert_to_format, estimate_field_size, specific_type_of_format_v1,
    specific_type_of_format_v2, to_storage_format_v1, to_storage_format_v2,
};
pub use logical_type::LogicalType;
pub use type_info::TypeInfo;
