//! Parsing of loosely formatted historical dates.
//!
//! Record-keeping data (genealogy, archival catalogues) carries dates in
//! whatever shape the transcriber used. This crate normalizes a single
//! such date - not a range - into structured [`DateParts`] and renders it
//! in three textual forms. Accepted shapes:
//!
//! * `YYYY` - 3 or 4 digit year
//! * `YYYY-MM` and `YYYY-MM-DD`
//! * `MM-DD-YYYY`, or `DD-MM-YYYY` with [`DateOrder::DayFirst`]
//! * `MM-YYYY`
//! * `DD-MMM`, `DD-MMM-YYYY`, `MMM-YYYY`, `MMM-DD-YYYY` - month names or
//!   three-letter abbreviations
//!
//! Delimiters can be most anything non-alphanumeric. A date may be
//! prefixed with a circa word (`Circa`, `About`, `Abt`) and suffixed with
//! an era code (`AD`, `BC`, `CE`, `BCE`); `AD` is assumed.

mod consts;
mod matcher;
mod normalize;
mod prelude;
mod render;
mod types;

pub use consts::*;
pub use matcher::DateOrder;
pub use types::{Day, Era, Month, Year};

use crate::normalize::Normalized;
use crate::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which side of the `1..=12` month range a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MonthBound {
    #[display(fmt = "less than 1")]
    BelowLower,
    #[display(fmt = "greater than 12")]
    AboveUpper,
}

/// Terminal failures of the parse pipeline. None of these comes with a
/// partial result; the caller decides whether to surface or recover.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No format rule matched the canonicalized input.
    #[error("cannot parse date: {0:?}")]
    Unparsable(String),

    /// Month outside `1..=12`, carrying which bound was violated.
    #[error("month cannot be {bound} (got {value})")]
    InvalidMonth { value: u8, bound: MonthBound },

    /// Day outside `1..=days-in-month` for the resolved month, accounting
    /// for the February 29 leap rule.
    #[error("day {day} is not valid for month {month}")]
    InvalidDay { day: u8, month: u8 },

    /// Empty input handed to the [`FromStr`] impl, which has no way to
    /// express "no date". [`parse`] reports empty input as `Ok(None)`.
    #[error("empty date string")]
    EmptyInput,
}

/// The parsed form of one date string. Produced fresh per call, owned by
/// the caller, immutable once returned.
///
/// After validation the populated fields are one of year+month+day,
/// year+month, month+day, or year alone. (A bare month name also parses,
/// but renders no textual forms.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateParts {
    /// The raw input, pre-sanitization, kept for diagnostics.
    pub original: String,
    /// The canonicalized token sequence after modifier stripping,
    /// `-`-joined; this is what the format rules matched against.
    pub fixed: String,
    /// Whether a circa marker led the input.
    pub circa: bool,
    /// Era marker; `AD` when the input carried none.
    pub era: Era,
    pub year: Option<Year>,
    pub month: Option<Month>,
    pub day: Option<Day>,
    /// Full month name derived from `month`.
    pub month_name: Option<&'static str>,
    /// Compact form, `M/D/Y`-style.
    pub short: String,
    /// Spelled-out form.
    pub long: String,
    /// Weekday-qualified form when the date is complete enough to place
    /// on the proleptic Gregorian calendar; otherwise equals `long`.
    pub full: String,
}

impl DateParts {
    /// The primitive `(year, month, day)` triple, convenient for storage
    /// columns.
    pub fn fields(&self) -> (Option<u16>, Option<u8>, Option<u8>) {
        (
            self.year.map(Year::get),
            self.month.map(Month::get),
            self.day.map(Day::get),
        )
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long)
    }
}

impl FromStr for DateParts {
    type Err = ParseError;

    /// Month-first parsing. Unlike [`parse`], whitespace-only input is an
    /// error here: `FromStr` cannot express the no-date outcome.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)?.ok_or(ParseError::EmptyInput)
    }
}

/// Parses one loosely formatted date in the default month-first order.
///
/// `Ok(None)` means the input held nothing but whitespace - a valid
/// "no date" outcome, deliberately distinct from a parse failure.
///
/// # Errors
/// [`ParseError::Unparsable`] when no format rule matches the input,
/// [`ParseError::InvalidMonth`] and [`ParseError::InvalidDay`] when the
/// matched fields do not denote a real calendar date.
pub fn parse(text: impl AsRef<str>) -> Result<Option<DateParts>, ParseError> {
    parse_with_order(text, DateOrder::MonthFirst)
}

/// Parses one date, selecting how the ambiguous bare `N-N-N` shape is
/// read. Every other format rule behaves identically in both orders.
///
/// # Errors
/// As for [`parse`].
pub fn parse_with_order(
    text: impl AsRef<str>,
    order: DateOrder,
) -> Result<Option<DateParts>, ParseError> {
    let original = text.as_ref();
    match normalize::normalize(original) {
        Some(normalized) => build(original, normalized, order).map(Some),
        None => Ok(None),
    }
}

/// Runs the canonicalized input through match, validate, render.
fn build(
    original: &str,
    normalized: Normalized,
    order: DateOrder,
) -> Result<DateParts, ParseError> {
    let raw = matcher::match_format(&normalized.fixed, order)?;

    let year = raw.year.map(Year::new);
    let month = raw.month.map(Month::new).transpose()?;
    let day = match (raw.day, month) {
        (Some(value), Some(m)) => Some(Day::new(value, raw.year, m.get())?),
        // No format rule yields a day without a month
        (Some(_), None) => return Err(ParseError::Unparsable(normalized.fixed)),
        (None, _) => None,
    };
    let month_name = month.map(Month::name);

    let rendered = render::render(year, month, day, normalized.circa, normalized.era);

    Ok(DateParts {
        original: original.to_owned(),
        fixed: normalized.fixed,
        circa: normalized.circa,
        era: normalized.era,
        year,
        month,
        day,
        month_name,
        short: rendered.short,
        long: rendered.long,
        full: rendered.full,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> DateParts {
        parse(text).unwrap().unwrap()
    }

    #[test]
    fn test_parse_iso_full_date() {
        let parts = parsed("2024-03-15");
        assert_eq!(parts.fields(), (Some(2024), Some(3), Some(15)));
        assert_eq!(parts.month_name, Some("March"));
        assert_eq!(parts.era, Era::Ad);
        assert!(!parts.circa);
        assert_eq!(parts.short, "3/15/2024 AD");
        assert_eq!(parts.long, "March 15, 2024 AD");
        assert_eq!(parts.full, "Friday, March 15, 2024 AD");
        assert_eq!(parts.original, "2024-03-15");
        assert_eq!(parts.fixed, "2024-03-15");
    }

    #[test]
    fn test_parse_circa_year() {
        let parts = parsed("circa 1850");
        assert!(parts.circa);
        assert_eq!(parts.fields(), (Some(1850), None, None));
        assert_eq!(parts.short, "About 1850 AD");
        assert_eq!(parts.long, "About 1850 AD");
        assert_eq!(parts.full, "About 1850 AD");
    }

    #[test]
    fn test_parse_day_month_year_with_era() {
        let parts = parsed("15-Mar-1990 BC");
        assert_eq!(parts.era, Era::Bc);
        assert_eq!(parts.fields(), (Some(1990), Some(3), Some(15)));
        assert_eq!(parts.short, "3/15/1990 BC");
        assert_eq!(parts.fixed, "15-Mar-1990");
    }

    #[test]
    fn test_parse_month_year() {
        let parts = parsed("Feb-2000");
        assert_eq!(parts.fields(), (Some(2000), Some(2), None));
        assert_eq!(parts.month_name, Some("February"));
        assert_eq!(parts.short, "2/2000 AD");
        assert_eq!(parts.long, "February, 2000 AD");
        assert_eq!(parts.full, parts.long);
    }

    #[test]
    fn test_parse_month_day_only() {
        let parts = parsed("24 July");
        assert_eq!(parts.fields(), (None, Some(7), Some(24)));
        assert_eq!(parts.short, "24-Jul AD");
        assert_eq!(parts.long, "24 July AD");
    }

    #[test]
    fn test_parse_free_punctuation() {
        let parts = parsed("March 15, 2024");
        assert_eq!(parts.fields(), (Some(2024), Some(3), Some(15)));

        let parts = parsed("15/Mar/1990");
        assert_eq!(parts.fields(), (Some(1990), Some(3), Some(15)));
    }

    #[test]
    fn test_parse_invalid_day() {
        let result = parse("30-Feb-2001");
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay { day: 30, month: 2 })
        ));
    }

    #[test]
    fn test_parse_leap_day() {
        let parts = parsed("29-Feb-2000");
        assert_eq!(parts.fields(), (Some(2000), Some(2), Some(29)));

        assert!(matches!(
            parse("29-Feb-1900"),
            Err(ParseError::InvalidDay { day: 29, month: 2 })
        ));

        // Without a year, February 29 cannot be shown valid
        assert!(matches!(
            parse("29-Feb"),
            Err(ParseError::InvalidDay { day: 29, month: 2 })
        ));
    }

    #[test]
    fn test_parse_empty_is_no_date() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("\t \n").unwrap(), None);
    }

    #[test]
    fn test_european_order_flag() {
        let parts = parse_with_order("14-05-2020", DateOrder::DayFirst)
            .unwrap()
            .unwrap();
        assert_eq!(parts.fields(), (Some(2020), Some(5), Some(14)));

        // Month-first, 14 lands in the month slot and overflows the range
        let result = parse("14-05-2020");
        assert!(matches!(
            result,
            Err(ParseError::InvalidMonth {
                value: 14,
                bound: MonthBound::AboveUpper
            })
        ));
    }

    #[test]
    fn test_invalid_month_bounds() {
        assert!(matches!(
            parse("1850-13"),
            Err(ParseError::InvalidMonth {
                value: 13,
                bound: MonthBound::AboveUpper
            })
        ));
        assert!(matches!(
            parse("1850-0-5"),
            Err(ParseError::InvalidMonth {
                value: 0,
                bound: MonthBound::BelowLower
            })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse("14-05-2020").unwrap_err().to_string(),
            "month cannot be greater than 12 (got 14)"
        );
        assert_eq!(
            parse("30-Feb-2001").unwrap_err().to_string(),
            "day 30 is not valid for month 2"
        );
        assert_eq!(
            parse("what-even").unwrap_err().to_string(),
            "cannot parse date: \"what-even\""
        );
    }

    #[test]
    fn test_short_form_reparses_to_same_fields() {
        for input in ["1990-03-15", "2000-1-1", "1850-12-31"] {
            let first = parsed(input);
            let second = parsed(&first.short);
            assert_eq!(
                first.fields(),
                second.fields(),
                "short form of {input:?} should round-trip"
            );
            assert_eq!(first.era, second.era);
        }
    }

    #[test]
    fn test_fixed_reparses_to_same_fields() {
        for input in [
            "circa 1850",
            "March 15, 2024",
            "15-Mar-1990 BC",
            "Feb-2000",
            "24 July",
        ] {
            let first = parsed(input);
            let second = parsed(&first.fixed);
            assert_eq!(
                first.fields(),
                second.fields(),
                "fixed form of {input:?} should be idempotent"
            );
            assert_eq!(second.fixed, first.fixed);
        }
    }

    #[test]
    fn test_parse_unparsable() {
        let result = parse("sometime in spring");
        assert!(matches!(result, Err(ParseError::Unparsable(_))));
    }

    #[test]
    fn test_parse_month_alone() {
        let parts = parsed("January");
        assert_eq!(parts.fields(), (None, Some(1), None));
        assert_eq!(parts.month_name, Some("January"));
        // No rendering is defined for a bare month
        assert_eq!(parts.short, "");
        assert_eq!(parts.long, "");
        assert_eq!(parts.full, "");
    }

    #[test]
    fn test_trailing_december_reads_as_era() {
        // Known vocabulary collision: "December" contains "ce", so a
        // trailing December token is consumed as an era marker
        let parts = parsed("15 December");
        assert_eq!(parts.era, Era::Ce);
        assert_eq!(parts.fields(), (Some(15), None, None));
    }

    #[test]
    fn test_era_variants() {
        assert_eq!(parsed("1850 ad").era, Era::Ad);
        assert_eq!(parsed("1850 BC").era, Era::Bc);
        assert_eq!(parsed("1850 ce").era, Era::Ce);
        assert_eq!(parsed("1850 BCE").era, Era::Bce);
        assert_eq!(parsed("1850 BCE").short, "1850 BCE");
    }

    #[test]
    fn test_parse_accepts_owned_strings() {
        let input = String::from("2024-03-15");
        let parts = parse(input).unwrap().unwrap();
        assert_eq!(parts.fields(), (Some(2024), Some(3), Some(15)));
    }

    #[test]
    fn test_from_str() {
        let parts: DateParts = "15-Mar-1990".parse().unwrap();
        assert_eq!(parts.fields(), (Some(1990), Some(3), Some(15)));

        let result = "   ".parse::<DateParts>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_display_is_long_form() {
        let parts = parsed("Feb-2000");
        assert_eq!(parts.to_string(), "February, 2000 AD");
    }

    #[test]
    fn test_serialize() {
        let parts = parsed("circa 15-Mar-1990 BC");
        let value = serde_json::to_value(&parts).unwrap();
        assert_eq!(value["original"], "circa 15-Mar-1990 BC");
        assert_eq!(value["fixed"], "15-Mar-1990");
        assert_eq!(value["circa"], true);
        assert_eq!(value["era"], "BC");
        assert_eq!(value["year"], 1990);
        assert_eq!(value["month"], 3);
        assert_eq!(value["day"], 15);
        assert_eq!(value["month_name"], "March");
        assert_eq!(value["short"], "About 3/15/1990 BC");
    }

    #[test]
    fn test_reserved_range_vocabulary_is_exported() {
        // Range parsing is out of scope; the vocabulary is published so
        // callers can screen for it first
        assert!(RANGE_WORDS.contains(&"Between"));
        assert!(MIDDLE_RANGE_WORDS.contains(&"And"));
    }

    #[test]
    fn test_three_digit_year() {
        let parts = parsed("850-7-24");
        assert_eq!(parts.fields(), (Some(850), Some(7), Some(24)));
        assert_eq!(parts.short, "7/24/850 AD");
    }
}
