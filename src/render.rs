//! Rendering of validated fields into the three textual forms.
//!
//! Decoration is uniform: a `"About "` prefix whenever the date is circa,
//! and a space plus the era code as a suffix on every form, even when the
//! era is the default `AD`.

use crate::consts::WEEKDAY_NAMES;
use crate::types::{Day, Era, Month, Year, weekday_index};

/// The three rendered forms of one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) full: String,
}

/// Renders the validated field combination. `full` carries a weekday name
/// only when the date is complete; otherwise it equals `long`. A month
/// with no other field renders nothing.
pub(crate) fn render(
    year: Option<Year>,
    month: Option<Month>,
    day: Option<Day>,
    circa: bool,
    era: Era,
) -> Rendered {
    let prefix = if circa { "About " } else { "" };

    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => {
            let weekday = WEEKDAY_NAMES[weekday_index(y.get(), m.get(), d.get())];
            Rendered {
                short: format!("{prefix}{}/{}/{y} {era}", m.get(), d.get()),
                long: format!("{prefix}{} {}, {y} {era}", m.name(), d.get()),
                full: format!("{prefix}{weekday}, {} {}, {y} {era}", m.name(), d.get()),
            }
        }
        (Some(y), Some(m), None) => {
            let long = format!("{prefix}{}, {y} {era}", m.name());
            Rendered {
                short: format!("{prefix}{}/{y} {era}", m.get()),
                full: long.clone(),
                long,
            }
        }
        (None, Some(m), Some(d)) => {
            let long = format!("{prefix}{} {} {era}", d.get(), m.name());
            Rendered {
                short: format!("{prefix}{}-{} {era}", d.get(), m.abbreviation()),
                full: long.clone(),
                long,
            }
        }
        (Some(y), None, None) => {
            let short = format!("{prefix}{y} {era}");
            Rendered {
                long: short.clone(),
                full: short.clone(),
                short,
            }
        }
        _ => Rendered::default(),
    }
}
