//! The ordered format-matching cascade.
//!
//! Each rule is an anchored pattern over the canonicalized `fixed` string
//! and the first rule that matches wins. Several shapes are textual
//! subsets of one another (a bare year is a prefix of year-month, the
//! three-number shape reads two ways), so the order is part of the
//! contract, not an implementation detail.

use std::sync::OnceLock;

use regex::Regex;

use crate::ParseError;
use crate::consts::{MONTH_ABBREVIATIONS, MONTH_NAMES};

/// How the bare `N-N-N` shape is read. No other rule is affected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// `MM-DD-YYYY`, the default.
    #[default]
    MonthFirst,
    /// `DD-MM-YYYY`.
    DayFirst,
}

/// Raw field candidates as matched, prior to calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFields {
    pub(crate) year: Option<u16>,
    pub(crate) month: Option<u8>,
    pub(crate) day: Option<u8>,
}

struct FormatPatterns {
    year_only: Regex,
    year_first: Regex,
    three_numbers: Regex,
    month_year: Regex,
    day_month: Regex,
    month_day_year: Regex,
    month_first: Regex,
}

fn patterns() -> &'static FormatPatterns {
    static PATTERNS: OnceLock<FormatPatterns> = OnceLock::new();
    PATTERNS.get_or_init(FormatPatterns::new)
}

impl FormatPatterns {
    fn new() -> Self {
        let abbrevs = MONTH_ABBREVIATIONS
            .iter()
            .map(|(abbrev, _)| *abbrev)
            .collect::<Vec<_>>()
            .join("|");

        Self {
            // 1850
            year_only: Self::compile(r"^(\d{1,4})$"),
            // 1850-7 and 1850-7-24; the 3-4 digit leading group keeps this
            // from colliding with the day-first three-number shape
            year_first: Self::compile(r"^(\d{3,4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?$"),
            // 7-24-1850 or 24-7-1850, settled by DateOrder
            three_numbers: Self::compile(r"^(\d{1,2})-(\d{1,2})-(\d{1,4})$"),
            // 7-1850
            month_year: Self::compile(r"^(\d{1,2})-(\d{1,4})?$"),
            // 24-Jul, 24-July-1850; anything after the abbreviation is
            // permitted and ignored
            day_month: Self::compile(&format!(
                r"(?i)^(\d{{1,2}})-({abbrevs}).*?(?:-(\d{{1,4}}))?$"
            )),
            // Jul-24-1850
            month_day_year: Self::compile(&format!(r"(?i)^({abbrevs}).*?-(\d{{1,2}})-(\d{{1,4}})$")),
            // Jul and July-1850
            month_first: Self::compile(&format!(r"(?i)^({abbrevs}).*?(?:-(\d{{1,4}}))?$")),
        }
    }

    fn compile(pattern: &str) -> Regex {
        Regex::new(pattern).expect("static date pattern")
    }
}

/// Runs the cascade over `fixed`. The first matching rule supplies the
/// fields; later rules are never consulted.
///
/// # Errors
/// `ParseError::Unparsable` when no rule matches.
pub(crate) fn match_format(fixed: &str, order: DateOrder) -> Result<RawFields, ParseError> {
    let patterns = patterns();

    if let Some(caps) = patterns.year_only.captures(fixed) {
        return Ok(RawFields {
            year: capture_u16(&caps, 1),
            month: None,
            day: None,
        });
    }

    if let Some(caps) = patterns.year_first.captures(fixed) {
        return Ok(RawFields {
            year: capture_u16(&caps, 1),
            month: capture_u8(&caps, 2),
            day: capture_u8(&caps, 3),
        });
    }

    if let Some(caps) = patterns.three_numbers.captures(fixed) {
        let (month_group, day_group) = match order {
            DateOrder::MonthFirst => (1, 2),
            DateOrder::DayFirst => (2, 1),
        };
        return Ok(RawFields {
            year: capture_u16(&caps, 3),
            month: capture_u8(&caps, month_group),
            day: capture_u8(&caps, day_group),
        });
    }

    if let Some(caps) = patterns.month_year.captures(fixed) {
        return Ok(RawFields {
            year: capture_u16(&caps, 2),
            month: capture_u8(&caps, 1),
            day: None,
        });
    }

    if let Some(caps) = patterns.day_month.captures(fixed) {
        let month = capture_month(&caps, 2, fixed)?;
        return Ok(RawFields {
            year: capture_u16(&caps, 3),
            month: Some(month),
            day: capture_u8(&caps, 1),
        });
    }

    if let Some(caps) = patterns.month_day_year.captures(fixed) {
        let month = capture_month(&caps, 1, fixed)?;
        return Ok(RawFields {
            year: capture_u16(&caps, 3),
            month: Some(month),
            day: capture_u8(&caps, 2),
        });
    }

    if let Some(caps) = patterns.month_first.captures(fixed) {
        let month = capture_month(&caps, 1, fixed)?;
        return Ok(RawFields {
            year: capture_u16(&caps, 2),
            month: Some(month),
            day: None,
        });
    }

    Err(ParseError::Unparsable(fixed.to_owned()))
}

fn capture_u16(caps: &regex::Captures<'_>, group: usize) -> Option<u16> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn capture_u8(caps: &regex::Captures<'_>, group: usize) -> Option<u8> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn capture_month(caps: &regex::Captures<'_>, group: usize, fixed: &str) -> Result<u8, ParseError> {
    caps.get(group)
        .and_then(|m| month_from_abbreviation(m.as_str()))
        .ok_or_else(|| ParseError::Unparsable(fixed.to_owned()))
}

/// Resolves a matched month token: the three-letter abbreviation selects
/// the canonical full name, and the full name selects the month number.
fn month_from_abbreviation(token: &str) -> Option<u8> {
    let (_, full_name) = MONTH_ABBREVIATIONS
        .iter()
        .copied()
        .find(|(abbrev, _)| token.eq_ignore_ascii_case(abbrev))?;
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(full_name))
        .map(|index| index as u8)
}
