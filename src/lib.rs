//! Conversion between the Gregorian and Bikram Sambat (Nepali) calendars.
//!
//! Both directions pivot through the Julian Day Number. The Gregorian side is
//! pure arithmetic; the Nepali side walks a compiled-in table of month lengths
//! covering BS 2000 through BS 2100.
//!
//! ```
//! use nepali_date::{gregorian_to_nepali, nepali_to_gregorian, CalendarDate};
//!
//! let bs = gregorian_to_nepali(2023, 10, 17).unwrap();
//! assert_eq!(bs, CalendarDate::new(2080, 6, 10));
//!
//! let ad = nepali_to_gregorian(2080, 6, 10).unwrap();
//! assert_eq!(ad.to_string(), "2023-10-17");
//! ```

mod consts;
mod jdn;
mod nepali;
mod prelude;
mod table;
mod types;
mod validate;

pub use consts::*;
pub use table::{days_in_nepali_month, days_in_nepali_year, is_supported_nepali_year};
pub use types::{CalendarDate, ValidationResult};
pub use validate::{
    days_in_gregorian_month, is_leap_year, validate_gregorian, validate_nepali, ValidationError,
};

use crate::prelude::*;

/// Error parsing a `YYYY-MM-DD` string into a [`CalendarDate`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error returned by the conversion functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Input failed Gregorian validation.
    #[error("Invalid Gregorian date: {0}")]
    InvalidGregorianDate(#[source] ValidationError),

    /// Input failed Nepali validation.
    #[error("Invalid Nepali date: {0}")]
    InvalidNepaliDate(#[source] ValidationError),

    /// A valid Gregorian date that falls before BS 2000-01-01 or after the
    /// last tabulated BS day.
    #[error("Gregorian date {0} is outside the supported Nepali calendar range")]
    OutOfRange(CalendarDate),
}

/// Converts a Gregorian date to Bikram Sambat.
///
/// # Errors
/// Returns `ConversionError::InvalidGregorianDate` if the input is not a valid
/// Gregorian date, or `ConversionError::OutOfRange` if it has no counterpart
/// in the month-length table.
pub fn gregorian_to_nepali(
    year: i32,
    month: i32,
    day: i32,
) -> Result<CalendarDate, ConversionError> {
    validate::check_gregorian(year, month, day).map_err(|e| {
        log::debug!("rejected Gregorian date {year}-{month}-{day}: {e}");
        ConversionError::InvalidGregorianDate(e)
    })?;

    let jdn = jdn::gregorian_to_jdn(year, month, day);
    let nepali = nepali::jdn_to_nepali(jdn).ok_or_else(|| {
        let date = CalendarDate::new(year, month, day);
        log::debug!("Gregorian date {date} (JDN {jdn}) is outside the month-length table");
        ConversionError::OutOfRange(date)
    })?;

    log::trace!("{year}-{month}-{day} AD -> {nepali} BS");
    Ok(nepali)
}

/// Converts a Bikram Sambat date to Gregorian.
///
/// # Errors
/// Returns `ConversionError::InvalidNepaliDate` if the month or day is out of
/// bounds or the year is not in the month-length table.
pub fn nepali_to_gregorian(
    year: i32,
    month: i32,
    day: i32,
) -> Result<CalendarDate, ConversionError> {
    validate::check_nepali(year, month, day).map_err(|e| {
        log::debug!("rejected Nepali date {year}-{month}-{day}: {e}");
        ConversionError::InvalidNepaliDate(e)
    })?;

    let gregorian = jdn::jdn_to_gregorian(nepali::nepali_to_jdn(year, month, day));

    log::trace!("{year}-{month}-{day} BS -> {gregorian} AD");
    Ok(gregorian)
}
