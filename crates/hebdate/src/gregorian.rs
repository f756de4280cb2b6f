//! Gregorian-side display helpers.

use icu_calendar::types::IsoWeekday;
use icu_calendar::Date;

/// Gregorian month names in Hebrew, January first.
#[rustfmt::skip]
const GREGORIAN_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני",
    "יולי", "אוגוסט", "ספטמבר", "אוקטובר", "נובמבר", "דצמבר",
];

/// Hebrew weekday names, Sunday first.
const WEEKDAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

/// Formats a Gregorian date with its Hebrew month name, e.g. `5 באוגוסט 2026`.
///
/// Returns `None` for an invalid Gregorian date.
pub fn format_gregorian_hebrew(year: i32, month: u8, day: u8) -> Option<String> {
    Date::try_new_iso_date(year, month, day).ok()?;
    let name = GREGORIAN_MONTHS[month as usize - 1];
    Some(format!("{day} ב{name} {year}"))
}

/// Formats a Gregorian date as `DD.MM.YY`.
///
/// Returns `None` for an invalid Gregorian date.
pub fn format_gregorian_short(year: i32, month: u8, day: u8) -> Option<String> {
    Date::try_new_iso_date(year, month, day).ok()?;
    Some(format!("{day:02}.{month:02}.{:02}", year.rem_euclid(100)))
}

/// Returns the Hebrew weekday name for a Gregorian date, Sunday = ראשון.
///
/// Returns `None` for an invalid Gregorian date.
pub fn weekday_name(year: i32, month: u8, day: u8) -> Option<&'static str> {
    let date = Date::try_new_iso_date(year, month, day).ok()?;
    let index = match date.day_of_week() {
        IsoWeekday::Sunday => 0,
        IsoWeekday::Monday => 1,
        IsoWeekday::Tuesday => 2,
        IsoWeekday::Wednesday => 3,
        IsoWeekday::Thursday => 4,
        IsoWeekday::Friday => 5,
        IsoWeekday::Saturday => 6,
    };
    Some(WEEKDAYS[index])
}

/// Approximates the Hebrew year overlapping a Gregorian year.
///
/// Off by one between Rosh Hashanah and the end of the civil year. Used to
/// seed year selection ranges, never for conversion.
pub fn approximate_hebrew_year(gregorian_year: i32) -> i32 {
    gregorian_year + 3760
}
