//! Input sanitation and modifier extraction.
//!
//! The raw text is tokenized on runs of non-alphanumeric characters - the
//! separator class is deliberately broad, so commas, slashes, dots and
//! whitespace all delimit equally. A leading circa token and a trailing
//! era token are stripped, and what remains is rejoined with the canonical
//! `-` separator. Every format pattern downstream matches against that
//! rejoined string only.

use crate::consts::{CIRCA_WORDS, DATE_SEPARATOR};
use crate::types::Era;

/// Canonicalized input with its modifiers split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub(crate) fixed: String,
    pub(crate) circa: bool,
    pub(crate) era: Era,
}

/// Trims and tokenizes `text`. Returns `None` when nothing but whitespace
/// was supplied - the explicit "no date" outcome, not an error.
pub(crate) fn normalize(text: &str) -> Option<Normalized> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut tokens: Vec<&str> = trimmed
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    let mut circa = false;
    if let Some(first) = tokens.first() {
        if is_circa_token(first) {
            circa = true;
            tokens.remove(0);
        }
    }

    let mut era = Era::default();
    if let Some(last) = tokens.last() {
        if let Some(found) = Era::from_token(last) {
            era = found;
            tokens.pop();
        }
    }

    Some(Normalized {
        fixed: tokens.join(DATE_SEPARATOR),
        circa,
        era,
    })
}

/// Case-insensitive substring test against the circa vocabulary. The
/// looseness is intentional: `abt` matches both `abt` and `abt1850`.
fn is_circa_token(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    CIRCA_WORDS
        .iter()
        .any(|word| lower.contains(&word.to_ascii_lowercase()))
}
