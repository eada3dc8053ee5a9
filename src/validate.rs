use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_NEPALI_YEAR, MIN_DAY, MIN_MONTH, MIN_NEPALI_YEAR,
};
use crate::table;
use crate::ValidationResult;

/// Why a date failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// Month outside `1..=12`.
    #[error("Month must be between {min} and {max}", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(i32),

    /// Nepali year with no month-length table entry.
    #[error(
        "Year {0} is not supported (supported range: {min}-{max})",
        min = MIN_NEPALI_YEAR,
        max = MAX_NEPALI_YEAR
    )]
    UnsupportedYear(i32),

    /// Day outside `1..=max` for the given month.
    #[error("Day must be between {min} and {max} for month {month}", min = MIN_DAY)]
    InvalidDay { day: i32, month: i32, max: u8 },
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, or `None` when `month` is outside `1..=12`
#[allow(clippy::cast_sign_loss)]
pub const fn days_in_gregorian_month(year: i32, month: i32) -> Option<u8> {
    if month < MIN_MONTH || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

fn check_day(day: i32, month: i32, max: u8) -> Result<(), ValidationError> {
    if day < MIN_DAY || day > i32::from(max) {
        return Err(ValidationError::InvalidDay { day, month, max });
    }
    Ok(())
}

/// Month first, then day. Any year is accepted (proleptic calendar).
pub(crate) fn check_gregorian(year: i32, month: i32, day: i32) -> Result<(), ValidationError> {
    let max = days_in_gregorian_month(year, month).ok_or(ValidationError::InvalidMonth(month))?;
    check_day(day, month, max)
}

/// Month first, then year support, then day.
pub(crate) fn check_nepali(year: i32, month: i32, day: i32) -> Result<(), ValidationError> {
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        return Err(ValidationError::InvalidMonth(month));
    }
    if !table::is_supported_nepali_year(year) {
        return Err(ValidationError::UnsupportedYear(year));
    }
    let max = table::days_in_nepali_month(year, month).ok_or(ValidationError::UnsupportedYear(year))?;
    check_day(day, month, max)
}

/// Checks a proleptic Gregorian date. Never fails; the outcome is in the result.
pub fn validate_gregorian(year: i32, month: i32, day: i32) -> ValidationResult {
    check_gregorian(year, month, day).into()
}

/// Checks a Bikram Sambat date against the month-length table. Never fails;
/// the outcome is in the result.
pub fn validate_nepali(year: i32, month: i32, day: i32) -> ValidationResult {
    check_nepali(year, month, day).into()
}
