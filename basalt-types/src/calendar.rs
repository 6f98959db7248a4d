//! Calendar value types and literal helpers.
//!
//! Generation 1 stores dates packed into 24 bits (`year * 512 + month * 32
//! + day`) and datetimes as the decimal digits `YYYYMMDDHHMMSS` in a
//! `u64`. Generation 2 stores dates as days since the Unix epoch and
//! datetimes as microseconds since the Unix epoch. All four forms share
//! one canonical text format: `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`,
//! the latter with an optional microsecond suffix under generation 2.
//!
//! Calendar validation is delegated to `time`; a literal like `2021-06-31`
//! fails because no such `Date` exists, not because of a digit check here.

use std::fmt;
use std::str::FromStr;

use basalt_result::{Error, Result};
use time::{Date, Month, Time};

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Packed year bounds for the generation-1 encodings.
const MIN_PACKED_YEAR: i32 = 1;
const MAX_PACKED_YEAR: i32 = 9999;

fn epoch_julian_day() -> i32 {
    Date::from_calendar_date(1970, Month::January, 1)
        .expect("1970-01-01 is a valid date")
        .to_julian_day()
}

/// Parse `YYYY-MM-DD` into a validated calendar date.
pub fn parse_calendar_date(text: &str) -> Result<Date> {
    let invalid = || Error::InvalidArgumentError(format!("invalid DATE literal '{text}'"));

    let mut parts = text.split('-');
    let year_str = parts.next().ok_or_else(invalid)?;
    let month_str = parts.next().ok_or_else(invalid)?;
    let day_str = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let year = year_str.parse::<i32>().map_err(|_| invalid())?;
    let month_num = month_str.parse::<u8>().map_err(|_| invalid())?;
    let day = day_str.parse::<u8>().map_err(|_| invalid())?;

    let month = Month::try_from(month_num).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day)
        .map_err(|err| Error::InvalidArgumentError(format!("invalid DATE literal '{text}': {err}")))
}

/// Parse `HH:MM:SS[.ffffff]` into a clock time and microsecond remainder.
fn parse_clock(text: &str, literal: &str) -> Result<(Time, u32)> {
    let invalid =
        || Error::InvalidArgumentError(format!("invalid DATETIME literal '{literal}'"));

    let (clock, micros) = match text.split_once('.') {
        Some((clock, frac)) => {
            if frac.is_empty() || frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            // ".5" means half a second: right-pad to six digits.
            let mut scaled = frac.parse::<u32>().map_err(|_| invalid())?;
            for _ in frac.len()..6 {
                scaled *= 10;
            }
            (clock, scaled)
        }
        None => (text, 0),
    };

    let mut parts = clock.split(':');
    let hour = parts
        .next()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or_else(invalid)?;
    let minute = parts
        .next()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or_else(invalid)?;
    let second = parts
        .next()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let time = Time::from_hms(hour, minute, second).map_err(|err| {
        Error::InvalidArgumentError(format!("invalid DATETIME literal '{literal}': {err}"))
    })?;
    Ok((time, micros))
}

fn split_datetime(text: &str) -> Result<(Date, Time, u32)> {
    let (date_part, clock_part) = text.split_once(' ').ok_or_else(|| {
        Error::InvalidArgumentError(format!("invalid DATETIME literal '{text}'"))
    })?;
    let date = parse_calendar_date(date_part)?;
    let (time, micros) = parse_clock(clock_part, text)?;
    Ok((date, time, micros))
}

/// The generation-1 packed date: `year * 512 + month * 32 + day` in the
/// low 24 bits of a `u32`. Three bytes on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OlapDate(u32);

impl OlapDate {
    /// Pack a validated calendar date. Years outside 1..=9999 do not fit
    /// the 24-bit layout and are rejected.
    pub fn from_date(date: Date) -> Result<Self> {
        let year = date.year();
        if !(MIN_PACKED_YEAR..=MAX_PACKED_YEAR).contains(&year) {
            return Err(Error::InvalidArgumentError(format!(
                "year {year} outside packed date range"
            )));
        }
        let packed = (year as u32) << 9 | (date.month() as u32) << 5 | date.day() as u32;
        Ok(Self(packed))
    }

    /// Pack raw calendar components, validating them as a real date.
    pub fn from_calendar(year: u16, month: u8, day: u8) -> Result<Self> {
        let month = Month::try_from(month).map_err(Error::invalid_argument)?;
        let date =
            Date::from_calendar_date(year as i32, month, day).map_err(Error::invalid_argument)?;
        Self::from_date(date)
    }

    /// The raw 24-bit encoding as stored on disk.
    #[inline]
    pub fn to_packed(self) -> u32 {
        self.0
    }

    /// Decode a raw 24-bit encoding, validating the components.
    pub fn from_packed(raw: u32) -> Result<Self> {
        let year = (raw >> 9) as u16;
        let month = ((raw >> 5) & 0xF) as u8;
        let day = (raw & 0x1F) as u8;
        Self::from_calendar(year, month, day)
    }

    #[inline]
    pub fn year(self) -> u16 {
        (self.0 >> 9) as u16
    }

    #[inline]
    pub fn month(self) -> u8 {
        ((self.0 >> 5) & 0xF) as u8
    }

    #[inline]
    pub fn day(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl FromStr for OlapDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_date(parse_calendar_date(s)?)
    }
}

impl fmt::Display for OlapDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// The generation-1 digit-packed datetime: one `u64` holding the decimal
/// digits `YYYYMMDDHHMMSS`. Sub-second precision does not exist in this
/// generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OlapDatetime(u64);

impl OlapDatetime {
    /// Pack a validated date and clock time.
    pub fn from_parts(date: Date, time: Time) -> Result<Self> {
        let year = date.year();
        if !(MIN_PACKED_YEAR..=MAX_PACKED_YEAR).contains(&year) {
            return Err(Error::InvalidArgumentError(format!(
                "year {year} outside packed datetime range"
            )));
        }
        let digits = year as u64 * 10_000_000_000
            + date.month() as u64 * 100_000_000
            + date.day() as u64 * 1_000_000
            + time.hour() as u64 * 10_000
            + time.minute() as u64 * 100
            + time.second() as u64;
        Ok(Self(digits))
    }

    /// The raw digit encoding as stored on disk.
    #[inline]
    pub fn as_digits(self) -> u64 {
        self.0
    }

    /// Decode a raw digit encoding, validating every component.
    pub fn from_digits(raw: u64) -> Result<Self> {
        let second = (raw % 100) as u8;
        let minute = (raw / 100 % 100) as u8;
        let hour = (raw / 10_000 % 100) as u8;
        let day = (raw / 1_000_000 % 100) as u8;
        let month = (raw / 100_000_000 % 100) as u8;
        let year = raw / 10_000_000_000;

        let invalid =
            || Error::InvalidArgumentError(format!("invalid packed DATETIME value {raw}"));
        if year > MAX_PACKED_YEAR as u64 {
            return Err(invalid());
        }
        let month = Month::try_from(month).map_err(|_| invalid())?;
        let date = Date::from_calendar_date(year as i32, month, day).map_err(|_| invalid())?;
        let time = Time::from_hms(hour, minute, second).map_err(|_| invalid())?;
        Self::from_parts(date, time)
    }
}

impl FromStr for OlapDatetime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (date, time, micros) = split_datetime(s)?;
        if micros != 0 {
            return Err(Error::InvalidArgumentError(format!(
                "invalid DATETIME literal '{s}': sub-second precision is not representable"
            )));
        }
        Self::from_parts(date, time)
    }
}

impl fmt::Display for OlapDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            raw / 10_000_000_000,
            raw / 100_000_000 % 100,
            raw / 1_000_000 % 100,
            raw / 10_000 % 100,
            raw / 100 % 100,
            raw % 100
        )
    }
}

/// Parse `YYYY-MM-DD` into the generation-2 day count since the epoch.
pub fn parse_epoch_days(text: &str) -> Result<i32> {
    let date = parse_calendar_date(text)?;
    Ok(date.to_julian_day() - epoch_julian_day())
}

/// Format a generation-2 day count as `YYYY-MM-DD`.
pub fn format_epoch_days(days: i32) -> Result<String> {
    let julian = epoch_julian_day()
        .checked_add(days)
        .ok_or_else(|| Error::InvalidArgumentError("date value out of range".into()))?;
    let date = Date::from_julian_day(julian)
        .map_err(|err| Error::InvalidArgumentError(format!("invalid DATE value: {err}")))?;
    let (year, month, day) = date.to_calendar_date();
    Ok(format!("{:04}-{:02}-{:02}", year, month as u8, day))
}

/// Parse `YYYY-MM-DD HH:MM:SS[.ffffff]` into generation-2 microseconds
/// since the epoch.
pub fn parse_timestamp_micros(text: &str) -> Result<i64> {
    let (date, time, micros) = split_datetime(text)?;
    let days = i64::from(date.to_julian_day() - epoch_julian_day());
    let seconds_of_day = i64::from(time.hour()) * 3600
        + i64::from(time.minute()) * 60
        + i64::from(time.second());
    days.checked_mul(SECONDS_PER_DAY)
        .map(|s| s + seconds_of_day)
        .and_then(|s| s.checked_mul(MICROS_PER_SECOND))
        .map(|us| us + i64::from(micros))
        .ok_or_else(|| {
            Error::InvalidArgumentError(format!("DATETIME literal '{text}' out of range"))
        })
}

/// Format generation-2 microseconds as `YYYY-MM-DD HH:MM:SS[.ffffff]`.
///
/// The fractional suffix appears only when the value carries sub-second
/// precision, so a whole-second value renders in the same shape as its
/// generation-1 counterpart.
pub fn format_timestamp_micros(micros: i64) -> Result<String> {
    let seconds = micros.div_euclid(MICROS_PER_SECOND);
    let sub_micros = micros.rem_euclid(MICROS_PER_SECOND);
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let seconds_of_day = seconds.rem_euclid(SECONDS_PER_DAY);

    let julian = i64::from(epoch_julian_day())
        .checked_add(days)
        .and_then(|j| i32::try_from(j).ok())
        .ok_or_else(|| Error::InvalidArgumentError("datetime value out of range".into()))?;
    let date = Date::from_julian_day(julian)
        .map_err(|err| Error::InvalidArgumentError(format!("invalid DATETIME value: {err}")))?;
    let (year, month, day) = date.to_calendar_date();

    let mut rendered = format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month as u8,
        day,
        seconds_of_day / 3600,
        seconds_of_day / 60 % 60,
        seconds_of_day % 60
    );
    if sub_micros != 0 {
        rendered.push_str(&format!(".{sub_micros:06}"));
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    /* ---------------- OlapDate ---------------- */

    #[test]
    fn olap_date_packs_components() {
        let date: OlapDate = "2021-03-07".parse().unwrap();
        assert_eq!(date.year(), 2021);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 7);
        assert_eq!(date.to_packed(), 2021 * 512 + 3 * 32 + 7);
        assert_eq!(date.to_string(), "2021-03-07");
    }

    #[test]
    fn olap_date_roundtrips_through_packed_form() {
        let date: OlapDate = "1999-12-31".parse().unwrap();
        assert_eq!(OlapDate::from_packed(date.to_packed()).unwrap(), date);
    }

    #[test]
    fn olap_date_rejects_bad_calendar_values() {
        assert!("2021-06-31".parse::<OlapDate>().is_err());
        assert!("2021-02-29".parse::<OlapDate>().is_err());
        assert!("2021-13-01".parse::<OlapDate>().is_err());
        assert!("2021-03".parse::<OlapDate>().is_err());
        assert!("not-a-date".parse::<OlapDate>().is_err());
    }

    #[test]
    fn olap_date_accepts_leap_day() {
        let date: OlapDate = "2020-02-29".parse().unwrap();
        assert_eq!(date.to_string(), "2020-02-29");
    }

    /* ---------------- OlapDatetime ---------------- */

    #[test]
    fn olap_datetime_packs_digits() {
        let dt: OlapDatetime = "2021-03-07 14:30:05".parse().unwrap();
        assert_eq!(dt.as_digits(), 2021_03_07_14_30_05);
        assert_eq!(dt.to_string(), "2021-03-07 14:30:05");
    }

    #[test]
    fn olap_datetime_roundtrips_through_digits() {
        let dt: OlapDatetime = "0001-01-01 00:00:00".parse().unwrap();
        assert_eq!(OlapDatetime::from_digits(dt.as_digits()).unwrap(), dt);
    }

    #[test]
    fn olap_datetime_rejects_invalid_components() {
        assert!("2021-03-07 24:00:00".parse::<OlapDatetime>().is_err());
        assert!("2021-03-07 00:60:00".parse::<OlapDatetime>().is_err());
        assert!("2021-03-07".parse::<OlapDatetime>().is_err());
        assert!("2021-03-07 00:00:00.5".parse::<OlapDatetime>().is_err());
        assert!(OlapDatetime::from_digits(2021_02_30_00_00_00).is_err());
    }

    /* ---------------- Epoch helpers ---------------- */

    #[test]
    fn epoch_days_anchor_at_unix_epoch() {
        assert_eq!(parse_epoch_days("1970-01-01").unwrap(), 0);
        assert_eq!(parse_epoch_days("1970-01-02").unwrap(), 1);
        assert_eq!(parse_epoch_days("1969-12-31").unwrap(), -1);
        assert_eq!(format_epoch_days(0).unwrap(), "1970-01-01");
        assert_eq!(format_epoch_days(-1).unwrap(), "1969-12-31");
    }

    #[test]
    fn epoch_days_roundtrip() {
        for text in ["2024-02-29", "1900-01-01", "2262-04-11"] {
            let days = parse_epoch_days(text).unwrap();
            assert_eq!(format_epoch_days(days).unwrap(), text);
        }
    }

    #[test]
    fn timestamp_micros_anchor_and_fraction() {
        assert_eq!(parse_timestamp_micros("1970-01-01 00:00:00").unwrap(), 0);
        assert_eq!(
            parse_timestamp_micros("1970-01-01 00:00:01.5").unwrap(),
            1_500_000
        );
        assert_eq!(
            parse_timestamp_micros("1969-12-31 23:59:59").unwrap(),
            -1_000_000
        );
        assert_eq!(
            format_timestamp_micros(1_500_000).unwrap(),
            "1970-01-01 00:00:01.500000"
        );
        assert_eq!(
            format_timestamp_micros(-1_000_000).unwrap(),
            "1969-12-31 23:59:59"
        );
    }

    #[test]
    fn timestamp_micros_roundtrip() {
        for text in [
            "2021-03-07 14:30:05",
            "2021-03-07 14:30:05.000123",
            "1969-07-20 20:17:40",
        ] {
            let micros = parse_timestamp_micros(text).unwrap();
            assert_eq!(format_timestamp_micros(micros).unwrap(), text);
        }
    }

    #[test]
    fn timestamp_rejects_malformed_clock() {
        assert!(parse_timestamp_micros("2021-03-07 14:30").is_err());
        assert!(parse_timestamp_micros("2021-03-07 14:30:05.1234567").is_err());
        assert!(parse_timestamp_micros("2021-03-07T14:30:05").is_err());
    }
}
