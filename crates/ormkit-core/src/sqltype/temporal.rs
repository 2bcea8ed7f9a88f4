//! Built-in types for the temporal canonical-table entries.
//!
//! Instants and datetimes travel as microseconds since the Unix epoch, dates
//! as Julian day numbers, times of day as microseconds since midnight.
//! Month-day and year-month values have no wire variant of their own and are
//! stored as text (`"MM-dd"` / `"yyyy-MM"`); years are stored as plain ints.
//!
//! The wire granularity is one microsecond. `time` values carry nanosecond
//! precision, so binding a value with a sub-microsecond component fails with
//! [`Error::InvalidValue`] rather than silently losing the remainder; this
//! keeps write-then-read an identity for every value that binds.

use super::{get_text_field, mismatch, SqlType};
use crate::error::Error;
use ormkit_proto::{ParamBuffer, Row, SqlValue, TypeCode};
use std::fmt;
use std::str::FromStr;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// `timestamp` column type for absolute instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampType;

impl SqlType for TimestampType {
    type Value = OffsetDateTime;

    fn type_name(&self) -> &'static str {
        "timestamp"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Timestamp
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Timestamp(micros) => micros_to_datetime(*micros).map(Some),
            other => Err(mismatch("timestamp", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        let micros = datetime_to_micros("timestamp", value.unix_timestamp_nanos())?;
        params
            .set(index, SqlValue::Timestamp(micros))
            .map_err(Error::from)
    }
}

/// `datetime` column type for wall-clock datetimes without an offset.
///
/// Values are interpreted as UTC on the wire; the offset is dropped on write
/// and never reattached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatetimeType;

impl SqlType for DatetimeType {
    type Value = PrimitiveDateTime;

    fn type_name(&self) -> &'static str {
        "datetime"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Timestamp
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Timestamp(micros) => {
                let utc = micros_to_datetime(*micros)?;
                Ok(Some(PrimitiveDateTime::new(utc.date(), utc.time())))
            }
            other => Err(mismatch("datetime", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        let micros = datetime_to_micros("datetime", value.assume_utc().unix_timestamp_nanos())?;
        params
            .set(index, SqlValue::Timestamp(micros))
            .map_err(Error::from)
    }
}

/// `date` column type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateType;

impl SqlType for DateType {
    type Value = Date;

    fn type_name(&self) -> &'static str {
        "date"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Date
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Date(julian) => Date::from_julian_day(*julian)
                .map(Some)
                .map_err(|e| Error::invalid_value("date", e.to_string())),
            other => Err(mismatch("date", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Date(value.to_julian_day()))
            .map_err(Error::from)
    }
}

/// `time` column type for times of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeType;

impl SqlType for TimeType {
    type Value = Time;

    fn type_name(&self) -> &'static str {
        "time"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Time
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match row.get(index)? {
            SqlValue::Null => Ok(None),
            SqlValue::Time(micros) => micros_to_time(*micros).map(Some),
            other => Err(mismatch("time", other)),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        if value.nanosecond() % 1_000 != 0 {
            return Err(sub_micro_error("time"));
        }
        let micros = i64::from(value.hour()) * 3_600 * MICROS_PER_SECOND
            + i64::from(value.minute()) * 60 * MICROS_PER_SECOND
            + i64::from(value.second()) * MICROS_PER_SECOND
            + i64::from(value.microsecond());
        params
            .set(index, SqlValue::Time(micros))
            .map_err(Error::from)
    }
}

fn sub_micro_error(type_name: &'static str) -> Error {
    Error::invalid_value(
        type_name,
        "sub-microsecond precision is not representable on the wire",
    )
}

fn datetime_to_micros(type_name: &'static str, nanos: i128) -> Result<i64, Error> {
    if nanos % 1_000 != 0 {
        return Err(sub_micro_error(type_name));
    }
    Ok((nanos / 1_000) as i64)
}

fn micros_to_datetime(micros: i64) -> Result<OffsetDateTime, Error> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(micros) * 1_000)
        .map_err(|e| Error::invalid_value("timestamp", e.to_string()))
}

fn micros_to_time(micros: i64) -> Result<Time, Error> {
    if !(0..MICROS_PER_DAY).contains(&micros) {
        return Err(Error::invalid_value(
            "time",
            format!("{micros} microseconds is outside the day"),
        ));
    }
    let second_of_day = micros / MICROS_PER_SECOND;
    Time::from_hms_micro(
        (second_of_day / 3_600) as u8,
        ((second_of_day / 60) % 60) as u8,
        (second_of_day % 60) as u8,
        (micros % MICROS_PER_SECOND) as u32,
    )
    .map_err(|e| Error::invalid_value("time", e.to_string()))
}

/// A month-day pair without a year, e.g. a birthday or recurring date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a month-day, validating ranges.
    ///
    /// Day bounds are leap-agnostic, so February 29 is accepted.
    pub fn new(month: u8, day: u8) -> Result<Self, Error> {
        let max_day = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => 29,
            _ => {
                return Err(Error::invalid_value(
                    "varchar",
                    format!("month {month} out of range"),
                ))
            }
        };
        if day == 0 || day > max_day {
            return Err(Error::invalid_value(
                "varchar",
                format!("day {day} out of range for month {month}"),
            ));
        }
        Ok(Self { month, day })
    }

    /// The month, 1 through 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .split_once('-')
            .ok_or_else(|| Error::invalid_value("varchar", format!("bad month-day `{s}`")))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| Error::invalid_value("varchar", format!("bad month in `{s}`")))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| Error::invalid_value("varchar", format!("bad day in `{s}`")))?;
        MonthDay::new(month, day)
    }
}

/// A year-month pair, e.g. a card expiry or reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Create a year-month, validating ranges.
    ///
    /// Years outside 0..=9999 are rejected so the text encoding stays
    /// unambiguous.
    pub fn new(year: i32, month: u8) -> Result<Self, Error> {
        if !(0..=9999).contains(&year) {
            return Err(Error::invalid_value(
                "varchar",
                format!("year {year} out of range"),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_value(
                "varchar",
                format!("month {month} out of range"),
            ));
        }
        Ok(Self { year, month })
    }

    /// The year, 0 through 9999.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month, 1 through 12.
    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| Error::invalid_value("varchar", format!("bad year-month `{s}`")))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| Error::invalid_value("varchar", format!("bad year in `{s}`")))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| Error::invalid_value("varchar", format!("bad month in `{s}`")))?;
        YearMonth::new(year, month)
    }
}

/// A bare calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(pub i32);

impl Year {
    /// The year value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `varchar`-backed column type for [`MonthDay`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthDayType;

impl SqlType for MonthDayType {
    type Value = MonthDay;

    fn type_name(&self) -> &'static str {
        "varchar"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Varchar
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match get_text_field(row, index, "varchar")? {
            Some(text) => text.parse().map(Some),
            None => Ok(None),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Text(value.to_string()))
            .map_err(Error::from)
    }
}

/// `varchar`-backed column type for [`YearMonth`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearMonthType;

impl SqlType for YearMonthType {
    type Value = YearMonth;

    fn type_name(&self) -> &'static str {
        "varchar"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Varchar
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        match get_text_field(row, index, "varchar")? {
            Some(text) => text.parse().map(Some),
            None => Ok(None),
        }
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Text(value.to_string()))
            .map_err(Error::from)
    }
}

/// `int`-backed column type for [`Year`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearType;

impl SqlType for YearType {
    type Value = Year;

    fn type_name(&self) -> &'static str {
        "int"
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Integer
    }

    fn get_result(&self, row: &Row, index: usize) -> Result<Option<Self::Value>, Error> {
        let value = row.get(index)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_i32()
            .map(|y| Some(Year(y)))
            .ok_or_else(|| mismatch("int", value))
    }

    fn set_parameter(
        &self,
        params: &mut ParamBuffer,
        index: usize,
        value: &Self::Value,
    ) -> Result<(), Error> {
        params
            .set(index, SqlValue::Int(value.0))
            .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};

    fn roundtrip<S: SqlType>(sql_type: &S, value: S::Value) -> Option<S::Value> {
        let mut params = ParamBuffer::new(1);
        sql_type.set_parameter(&mut params, 0, &value).unwrap();
        sql_type.get_result(&params.into_row(), 0).unwrap()
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let instant = datetime!(2024-01-01 00:00:00 UTC);
        assert_eq!(roundtrip(&TimestampType, instant), Some(instant));

        let pre_epoch = datetime!(1969-07-20 20:17:40 UTC);
        assert_eq!(roundtrip(&TimestampType, pre_epoch), Some(pre_epoch));
    }

    #[test]
    fn test_timestamp_normalizes_offset() {
        // Same instant expressed at +02:00 reads back at UTC.
        let offset = datetime!(2024-06-15 14:30:00 +02:00);
        let back = roundtrip(&TimestampType, offset).unwrap();
        assert_eq!(back, offset);
        assert!(back.offset().is_utc());
    }

    #[test]
    fn test_datetime_roundtrip() {
        let dt = datetime!(2023-11-05 09:15:30.250);
        assert_eq!(roundtrip(&DatetimeType, dt), Some(dt));
    }

    #[test]
    fn test_date_roundtrip() {
        let d = date!(2024 - 02 - 29);
        assert_eq!(roundtrip(&DateType, d), Some(d));

        let early = date!(1900 - 01 - 01);
        assert_eq!(roundtrip(&DateType, early), Some(early));
    }

    #[test]
    fn test_time_roundtrip() {
        let t = time!(23:59:59.999999);
        assert_eq!(roundtrip(&TimeType, t), Some(t));
        assert_eq!(roundtrip(&TimeType, time!(00:00)), Some(time!(00:00)));
    }

    #[test]
    fn test_sub_microsecond_time_rejected() {
        let t = Time::from_hms_nano(12, 0, 0, 999).unwrap();
        let mut params = ParamBuffer::new(1);
        assert!(matches!(
            TimeType.set_parameter(&mut params, 0, &t),
            Err(Error::InvalidValue { type_name: "time", .. })
        ));
        // The slot is untouched, not half-written.
        assert!(params.get(0).unwrap().is_null());

        // Whole microseconds still bind.
        let t = Time::from_hms_nano(12, 0, 0, 1_000).unwrap();
        assert_eq!(roundtrip(&TimeType, t), Some(t));
    }

    #[test]
    fn test_sub_microsecond_timestamp_rejected() {
        let instant = OffsetDateTime::from_unix_timestamp_nanos(1_500).unwrap();
        let mut params = ParamBuffer::new(1);
        assert!(matches!(
            TimestampType.set_parameter(&mut params, 0, &instant),
            Err(Error::InvalidValue { type_name: "timestamp", .. })
        ));

        let whole = OffsetDateTime::from_unix_timestamp_nanos(2_000).unwrap();
        assert_eq!(roundtrip(&TimestampType, whole), Some(whole));
    }

    #[test]
    fn test_sub_microsecond_datetime_rejected() {
        let with_nanos = datetime!(2024-01-01 00:00:00).replace_nanosecond(1).unwrap();
        let mut params = ParamBuffer::new(1);
        assert!(matches!(
            DatetimeType.set_parameter(&mut params, 0, &with_nanos),
            Err(Error::InvalidValue { type_name: "datetime", .. })
        ));
    }

    #[test]
    fn test_time_out_of_range() {
        let row = Row::new(vec![SqlValue::Time(MICROS_PER_DAY)]);
        assert!(TimeType.get_result(&row, 0).is_err());

        let row = Row::new(vec![SqlValue::Time(-1)]);
        assert!(TimeType.get_result(&row, 0).is_err());
    }

    #[test]
    fn test_month_day_encoding() {
        let md = MonthDay::new(12, 25).unwrap();
        assert_eq!(md.to_string(), "12-25");
        assert_eq!("12-25".parse::<MonthDay>().unwrap(), md);
        assert_eq!(roundtrip(&MonthDayType, md), Some(md));

        // Leap day is representable without a year.
        assert!(MonthDay::new(2, 29).is_ok());
        assert!(MonthDay::new(2, 30).is_err());
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(4, 31).is_err());
    }

    #[test]
    fn test_year_month_encoding() {
        let ym = YearMonth::new(2026, 8).unwrap();
        assert_eq!(ym.to_string(), "2026-08");
        assert_eq!("2026-08".parse::<YearMonth>().unwrap(), ym);
        assert_eq!(roundtrip(&YearMonthType, ym), Some(ym));

        assert!(YearMonth::new(2026, 13).is_err());
        assert!(YearMonth::new(-1, 6).is_err());
        assert!(YearMonth::new(10_000, 6).is_err());
    }

    #[test]
    fn test_year_roundtrip() {
        assert_eq!(roundtrip(&YearType, Year(1984)), Some(Year(1984)));
    }

    #[test]
    fn test_text_backed_blank_is_absent() {
        let row = Row::new(vec![SqlValue::Text("  ".into()), SqlValue::Null]);
        assert_eq!(MonthDayType.get_result(&row, 0).unwrap(), None);
        assert_eq!(YearMonthType.get_result(&row, 1).unwrap(), None);
    }

    #[test]
    fn test_text_backed_garbage_errors() {
        let row = Row::new(vec![SqlValue::Text("not-a-date".into())]);
        assert!(MonthDayType.get_result(&row, 0).is_err());
        assert!(YearMonthType.get_result(&row, 0).is_err());
    }
}
