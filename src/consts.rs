/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
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

/// Canonical full month names (index 0 unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviation to canonical full name
pub const MONTH_ABBREVIATIONS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Weekday names, Sunday first, matching the weekday index computation
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Tokens that mark a date as approximate when they lead the input.
/// Detection is a case-insensitive substring test against the first token.
pub const CIRCA_WORDS: [&str; 5] = ["Circa", "About", "Abt", "Abt.", "~"];

/// Era codes recognized inside the trailing token. `AD` is assumed when
/// none is present.
pub const ERA_WORDS: [&str; 4] = ["AD", "BC", "CE", "BCE"];

/// Reserved vocabulary that opens a date *range* ("Between 1850 and 1860").
/// Range parsing lives outside this crate; callers can screen inputs with
/// these before handing a single date to [`crate::parse`].
pub const RANGE_WORDS: [&str; 4] = ["Between", "Bet", "Bet.", "From"];

/// Reserved connective vocabulary for date ranges.
/// `-` is not listed because it is more commonly used as a delimiter.
pub const MIDDLE_RANGE_WORDS: [&str; 2] = ["To", "And"];

/// Canonical separator the token sequence is rejoined with; every format
/// pattern matches against this, never against the original delimiters
pub const DATE_SEPARATOR: &str = "-";

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
