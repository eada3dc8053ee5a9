use crate::consts::DATE_SEPARATOR;
use crate::prelude::*;
use crate::validate::ValidationError;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A `(year, month, day)` triple in either calendar.
///
/// The same shape is used for Gregorian and Bikram Sambat dates; which one a
/// value holds depends on the function that produced it. Construction does
/// not validate; run it through [`crate::validate_gregorian`] or
/// [`crate::validate_nepali`] first when the source is untrusted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarDate {
    /// Creates a date from its components (no validation)
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Treats `self` as a Gregorian date and converts it to Bikram Sambat.
    ///
    /// # Errors
    /// See [`crate::gregorian_to_nepali`].
    pub fn to_nepali(self) -> Result<Self, crate::ConversionError> {
        crate::gregorian_to_nepali(self.year, self.month, self.day)
    }

    /// Treats `self` as a Bikram Sambat date and converts it to Gregorian.
    ///
    /// # Errors
    /// See [`crate::nepali_to_gregorian`].
    pub fn to_gregorian(self) -> Result<Self, crate::ConversionError> {
        crate::nepali_to_gregorian(self.year, self.month, self.day)
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl From<(i32, i32, i32)> for CalendarDate {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, i32, i32) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. A leading `-` marks a negative (proleptic) year.
    /// Only the shape is checked here, not calendar validity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        // Signs belong only on the year, and only as a leading separator
        if [year, month, day]
            .iter()
            .any(|part| part.is_empty() || part.starts_with(['+', '-']))
        {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_i32(year)?;
        Ok(Self {
            year: if negative { -year } else { year },
            month: Self::parse_i32(month)?,
            day: Self::parse_i32(day)?,
        })
    }
}

/// Outcome of validating a date.
///
/// `error` is present if and only if `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing result
    pub const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing result carrying the error's message
    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the failure reason, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::invalid(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(CalendarDate::new(2080, 6, 30).to_string(), "2080-06-30");
        assert_eq!(CalendarDate::new(944, 1, 1).to_string(), "0944-01-01");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = "2080-06-30".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::new(2080, 6, 30));
        assert_eq!(date.to_tuple(), (2080, 6, 30));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 2023 - 10 - 17 ".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::new(2023, 10, 17));
    }

    #[test]
    fn test_parse_negative_year() {
        let date = "-4713-11-24".parse::<CalendarDate>().unwrap();
        assert_eq!(date, CalendarDate::new(-4713, 11, 24));
    }

    #[test]
    fn test_parse_does_not_validate_calendar() {
        // 13th month is structurally fine; validators decide
        let date = "2080-13-01".parse::<CalendarDate>().unwrap();
        assert_eq!(date.month, 13);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<CalendarDate>(), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        let result = "2080-06".parse::<CalendarDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "2080-06-30-01".parse::<CalendarDate>();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("found 4 component(s)"));
    }

    #[test]
    fn test_parse_bad_tokens() {
        for input in ["20X0-01-01", "2080-0A-01", "2080-01-", "2080--01-01", "2080-+1-01"] {
            let result = input.parse::<CalendarDate>();
            assert!(
                matches!(result, Err(ParseError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::new(2080, 6, 30);
        let b = CalendarDate::new(2080, 7, 1);
        let c = CalendarDate::new(2081, 1, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_tuple_conversions() {
        let date: CalendarDate = (2023, 10, 17).into();
        assert_eq!(date, CalendarDate::new(2023, 10, 17));
        let tuple: (i32, i32, i32) = date.into();
        assert_eq!(tuple, (2023, 10, 17));
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = CalendarDate::new(2080, 6, 30);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2080,"month":6,"day":30}"#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.is_valid());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_validation_result_from_error() {
        let result: ValidationResult = Err(ValidationError::InvalidMonth(13)).into();
        assert!(!result.is_valid());
        assert_eq!(result.error(), Some("Month must be between 1 and 12"));
    }

    #[test]
    fn test_validation_result_serde() {
        let json = serde_json::to_string(&ValidationResult::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);

        let result = ValidationResult::invalid(&ValidationError::UnsupportedYear(2101));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"valid":false,"error":"Year 2101 is not supported (supported range: 2000-2100)"}"#
        );
        let parsed: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
