use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ERA_WORDS, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTH_ABBREVIATIONS, MONTH_NAMES,
};
use crate::prelude::*;
use crate::{MonthBound, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year as written in the input, 1 to 4 digits (0..=9999 structurally).
/// Unlike month and day it carries no calendar validation of its own; the
/// era decides how it reads, and the era never enters arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Wraps a year value. Infallible: the input grammar already bounds
    /// years to four digits.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth`, carrying which bound was
    /// violated, if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let Some(non_zero) = NonZeroU8::new(value) else {
            return Err(ParseError::InvalidMonth {
                value,
                bound: MonthBound::BelowLower,
            });
        };
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth {
                value,
                bound: MonthBound::AboveUpper,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Canonical full name, e.g. `3` -> `"March"`.
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// Three-letter abbreviation, always derived from the canonical full
    /// name rather than from whatever spelling the input used.
    pub fn abbreviation(self) -> &'static str {
        let name = self.name();
        MONTH_ABBREVIATIONS
            .iter()
            .copied()
            .find(|&(_, full)| full == name)
            .map_or(name, |(abbrev, _)| abbrev)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to fit its month, including the February 29
/// leap rule when a year is known.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the days in the given
    /// month. February 29 requires a year that is a leap year; with no
    /// year at all it is rejected.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds the
    /// days in the month.
    pub fn new(value: u8, year: Option<u16>, month: u8) -> Result<Self, ParseError> {
        let Some(non_zero) = NonZeroU8::new(value) else {
            return Err(ParseError::InvalidDay { day: value, month });
        };
        if value > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { day: value, month });
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar era marker. Display only: the year is left exactly as written
/// and no era arithmetic is ever performed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Era {
    #[default]
    #[display(fmt = "AD")]
    Ad,
    #[display(fmt = "BC")]
    Bc,
    #[display(fmt = "CE")]
    Ce,
    #[display(fmt = "BCE")]
    Bce,
}

impl Era {
    /// Detects an era marker inside a token. Matching is a deliberately
    /// loose case-insensitive substring test against [`ERA_WORDS`];
    /// the longest contained marker wins so `bce` is not misread as `bc`
    /// or `ce`.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        ERA_WORDS
            .iter()
            .copied()
            .filter(|word| upper.contains(word))
            .max_by_key(|word| word.len())
            .map(|word| match word {
                "BCE" => Self::Bce,
                "BC" => Self::Bc,
                "CE" => Self::Ce,
                _ => Self::Ad,
            })
    }
}

// Calendar helpers

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in the given month. February yields 29 only when the year is
/// present and leap; an unknown year falls back to 28.
pub const fn days_in_month(year: Option<u16>, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY {
        if let Some(y) = year {
            if is_leap_year(y) {
                return FEBRUARY_DAYS_LEAP;
            }
        }
    }
    DAYS_IN_MONTH[month as usize]
}

/// Day-of-week index for a proleptic Gregorian date, Sunday = 0, indexing
/// [`crate::WEEKDAY_NAMES`]. Sakamoto's congruence.
pub const fn weekday_index(year: u16, month: u8, day: u8) -> usize {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let mut y = year as i32;
    if month < 3 {
        y -= 1;
    }
    let raw = y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day as i32;
    raw.rem_euclid(7) as usize
}
