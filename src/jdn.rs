//! Proleptic Gregorian <-> Julian Day Number arithmetic.
//!
//! Every division here is a floor division (`div_euclid` with a positive
//! divisor), so intermediates below zero round toward negative infinity
//! rather than toward zero.

use crate::CalendarDate;

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// No validation: out-of-range months or days still produce a consistent
/// day count.
pub(crate) fn gregorian_to_jdn(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Converts a Julian Day Number back to a proleptic Gregorian date.
///
/// Total over every JDN whose year fits in an `i32`, which covers anything
/// produced by [`gregorian_to_jdn`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn jdn_to_gregorian(jdn: i64) -> CalendarDate {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    // m counts from March, so m >= 10 is January or February of the next year
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    // month and day are always small; year is bounded by the input JDN
    CalendarDate::new(year as i32, month as i32, day as i32)
}
