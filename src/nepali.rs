//! Bikram Sambat <-> Julian Day Number day counting.

use crate::consts::NEPALI_EPOCH_JDN;
use crate::table::{self, year_total};
use crate::CalendarDate;

/// Converts a Bikram Sambat date to its Julian Day Number.
///
/// The caller must validate first: `year` has to be tabulated and `month`
/// in `1..=12`.
pub(crate) fn nepali_to_jdn(year: i32, month: i32, day: i32) -> i64 {
    debug_assert!(table::is_supported_nepali_year(year));

    let full_years: i64 = table::years()
        .take_while(|&(y, _)| y < year)
        .map(|(_, lengths)| year_total(lengths))
        .sum();

    let months_before = usize::try_from(month - 1).unwrap_or(0);
    let full_months: i64 = table::month_lengths(year).map_or(0, |lengths| {
        lengths
            .iter()
            .take(months_before)
            .map(|&days| i64::from(days))
            .sum()
    });

    NEPALI_EPOCH_JDN + full_years + full_months + i64::from(day) - 1
}

/// Converts a Julian Day Number to a Bikram Sambat date.
///
/// Returns `None` for a JDN before BS 2000-01-01 or after the last
/// tabulated day. A remainder equal to a whole year or month rolls over
/// to the next one.
pub(crate) fn jdn_to_nepali(jdn: i64) -> Option<CalendarDate> {
    let mut remaining = jdn - NEPALI_EPOCH_JDN;
    if remaining < 0 {
        return None;
    }

    for (year, lengths) in table::years() {
        let total = year_total(lengths);
        if remaining >= total {
            remaining -= total;
            continue;
        }

        for (month, &days) in (1..).zip(lengths.iter()) {
            let days = i64::from(days);
            if remaining < days {
                // remaining < days <= u8::MAX
                let day = i32::try_from(remaining).ok()? + 1;
                return Some(CalendarDate::new(year, month, day));
            }
            remaining -= days;
        }
    }

    None
}
