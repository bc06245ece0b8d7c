//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical storage format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Literal `YYYY-MM-DD` shape. chrono alone would also accept unpadded fields.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthday regex is valid"));

/// A contact's date of birth.
///
/// Only real calendar dates written as `YYYY-MM-DD` are accepted, so the
/// rendered value is always identical to the raw value it was built from.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("2000-03-01").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(birthday.days_until_next(today), Some(0));
/// assert!(Birthday::new("2023-02-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value has the wrong
    /// shape or names a date that does not exist (Feb 30, month 13, ...).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Parse an optional raw birthday; an absent value is always valid.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        raw.map(Self::new).transpose()
    }

    /// The stored calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// The occurrence in `today`'s year counts unless it is strictly in the
    /// past, so the birthday itself yields `0`. Feb 29 birthdays fall on
    /// Feb 28 in non-leap years. Returns `None` only when the next occurrence
    /// lies outside chrono's supported calendar range.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        let this_year = self.occurrence_in(today.year())?;
        let next = if today > this_year {
            self.occurrence_in(today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }

    /// Same as [`Birthday::days_until_next`], measured from the local date.
    pub fn days_until_next_from_today(&self) -> Option<i64> {
        self.days_until_next(Local::now().date_naive())
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Field for Birthday {
    const LABEL: &'static str = "birthday";
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
