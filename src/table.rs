//! Bikram Sambat month lengths.
//!
//! The Nepali calendar is not rule-computable: month lengths differ from
//! year to year and have to be tabulated. This table is the only source of
//! that irregularity. Together with `NEPALI_EPOCH_JDN` it places
//! BS 2000-07-17 on 1944-01-01 and BS 2080-06-10 on 2023-10-17.

use crate::consts::{MAX_NEPALI_YEAR, MIN_NEPALI_YEAR, MONTHS_PER_YEAR};

/// Number of tabulated years
pub(crate) const TABLE_YEARS: usize = (MAX_NEPALI_YEAR - MIN_NEPALI_YEAR + 1) as usize;

/// Days in each month (Baisakh through Chaitra), one row per BS year starting at
/// `MIN_NEPALI_YEAR`
static NEPALI_MONTH_LENGTHS: [[u8; MONTHS_PER_YEAR]; TABLE_YEARS] = [
    [30, 32, 31, 32, 31, 31, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 29], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 29], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 30], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 29], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 29], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 29], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 29], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 29], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 29], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 29], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 29], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 29], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2057
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 29], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2091
    [30, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2092
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2093
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2094
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30], // 2095
    [30, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2096
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2097
    [31, 31, 32, 31, 31, 31, 29, 30, 29, 30, 29, 31], // 2098
    [31, 31, 32, 31, 31, 31, 30, 29, 29, 30, 30, 30], // 2099
    [31, 32, 31, 32, 30, 31, 30, 29, 30, 29, 30, 30], // 2100
];

/// Returns the 12 month lengths of `year`, or `None` outside the table
pub(crate) fn month_lengths(year: i32) -> Option<&'static [u8; MONTHS_PER_YEAR]> {
    let index = year.checked_sub(MIN_NEPALI_YEAR)?;
    usize::try_from(index)
        .ok()
        .and_then(|index| NEPALI_MONTH_LENGTHS.get(index))
}

/// Iterates `(year, month lengths)` in ascending year order
pub(crate) fn years() -> impl Iterator<Item = (i32, &'static [u8; MONTHS_PER_YEAR])> {
    (MIN_NEPALI_YEAR..).zip(NEPALI_MONTH_LENGTHS.iter())
}

/// Sum of a year's month lengths
pub(crate) fn year_total(lengths: &[u8; MONTHS_PER_YEAR]) -> i64 {
    lengths.iter().map(|&days| i64::from(days)).sum()
}

/// Returns `true` when `year` has a row in the month-length table
pub fn is_supported_nepali_year(year: i32) -> bool {
    month_lengths(year).is_some()
}

/// Days in a Nepali month, or `None` when the year is unsupported or the
/// month is outside `1..=12`
pub fn days_in_nepali_month(year: i32, month: i32) -> Option<u8> {
    let lengths = month_lengths(year)?;
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    lengths.get(index).copied()
}

/// Days in a Nepali year, or `None` when the year is unsupported
pub fn days_in_nepali_year(year: i32) -> Option<u32> {
    month_lengths(year).map(|lengths| lengths.iter().map(|&days| u32::from(days)).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_supported_range() {
        assert_eq!(TABLE_YEARS, 101);
        assert_eq!(years().count(), TABLE_YEARS);
        assert_eq!(years().next().map(|(y, _)| y), Some(MIN_NEPALI_YEAR));
        assert_eq!(years().last().map(|(y, _)| y), Some(MAX_NEPALI_YEAR));
    }

    #[test]
    fn test_every_month_is_plausible() {
        for (year, lengths) in years() {
            for (month, &days) in (1..).zip(lengths.iter()) {
                assert!(
                    (29..=32).contains(&days),
                    "BS {year}-{month:02} has {days} days"
                );
            }
        }
    }

    #[test]
    fn test_year_totals() {
        for (year, lengths) in years() {
            let total = year_total(lengths);
            assert!(
                (364..=366).contains(&total),
                "BS {year} has {total} days"
            );
        }
    }

    #[test]
    fn test_month_lengths_lookup() {
        assert_eq!(
            month_lengths(2000),
            Some(&[30, 32, 31, 32, 31, 31, 30, 30, 29, 30, 29, 31])
        );
        assert_eq!(
            month_lengths(2080),
            Some(&[31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30])
        );
        assert!(month_lengths(2100).is_some());
    }

    #[test]
    fn test_month_lengths_outside_table() {
        assert_eq!(month_lengths(1999), None);
        assert_eq!(month_lengths(2101), None);
        assert_eq!(month_lengths(i32::MIN), None);
        assert_eq!(month_lengths(i32::MAX), None);
    }

    #[test]
    fn test_days_in_nepali_month() {
        assert_eq!(days_in_nepali_month(2080, 1), Some(31));
        assert_eq!(days_in_nepali_month(2080, 6), Some(30));
        assert_eq!(days_in_nepali_month(2000, 2), Some(32));
        assert_eq!(days_in_nepali_month(2080, 0), None);
        assert_eq!(days_in_nepali_month(2080, 13), None);
        assert_eq!(days_in_nepali_month(1999, 1), None);
    }

    #[test]
    fn test_days_in_nepali_year() {
        assert_eq!(days_in_nepali_year(2000), Some(366));
        assert_eq!(days_in_nepali_year(2001), Some(364));
        assert_eq!(days_in_nepali_year(2080), Some(365));
        assert_eq!(days_in_nepali_year(2081), Some(366));
        assert_eq!(days_in_nepali_year(2101), None);
    }

    #[test]
    fn test_is_supported_nepali_year() {
        assert!(is_supported_nepali_year(MIN_NEPALI_YEAR));
        assert!(is_supported_nepali_year(MAX_NEPALI_YEAR));
        assert!(!is_supported_nepali_year(MIN_NEPALI_YEAR - 1));
        assert!(!is_supported_nepali_year(MAX_NEPALI_YEAR + 1));
    }
}
