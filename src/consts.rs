/// First Nepali (BS) year covered by the month-length table (inclusive)
pub const MIN_NEPALI_YEAR: i32 = 2000;
/// Last Nepali (BS) year covered by the month-length table (inclusive)
pub const MAX_NEPALI_YEAR: i32 = 2100;

/// Julian Day Number of BS 2000-01-01 (Gregorian 1943-06-12)
pub const NEPALI_EPOCH_JDN: i64 = 2_430_888;

/// Months in a year, for both calendars
pub const MONTHS_PER_YEAR: usize = 12;

/// Minimum valid month
pub const MIN_MONTH: i32 = 1;
/// Maximum valid month
pub const MAX_MONTH: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Month number for February
pub const FEBRUARY: i32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
