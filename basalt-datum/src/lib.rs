//! Typed single values and their canonical text form.
//!
//! A [`Datum`] holds one column value: fixed-width kinds live inline,
//! variable-length kinds borrow storage from a caller-supplied
//! [`MemArena`]. The codec in [`convert`] moves values between datums and
//! text, the path taken by bulk load, debug dumps, and query-result
//! rendering, and guarantees that every fixed-width kind round-trips
//! through its text form without precision loss.
//!
//! Both directions are pure functions; the only state crossing a call is
//! the arena used for output allocation during parsing.

pub mod arena;
pub mod convert;
pub mod datum;

pub use arena::MemArena;
pub use convert::{
    datum_from_string, datum_from_string_with_info, datum_to_string, datum_to_string_with_info,
};
pub use datum::Datum;
