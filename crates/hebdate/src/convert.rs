//! Gregorian to Hebrew date conversion.

use icu_calendar::hebrew::Hebrew;
use icu_calendar::Date;
use tracing::warn;

use crate::days::day_label;
use crate::error::ConvertError;
use crate::months::from_month_code;

/// A Gregorian date converted to its Hebrew calendar equivalent.
///
/// Constructed fresh per conversion and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDate {
    day: u8,
    month_name: &'static str,
    year: i32,
    formatted: String,
}

impl ConvertedDate {
    /// Returns the Hebrew day of month (1..=30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the Hebrew month display name.
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Returns the Hebrew calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the composed display string:
    /// `<day label> <month name> <prefixed year numeral>`.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

/// Converts a Gregorian date to the Hebrew calendar.
///
/// Calendar arithmetic is delegated to `icu_calendar`; this function owns
/// only the display composition. The day label comes from the fixed table,
/// falling back to the raw number for a day outside 1..=30 rather than
/// failing the conversion. The year is encoded with the ה' millennium
/// prefix.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidGregorian`] if the facility rejects the
/// input date, and [`ConvertError::UnknownMonthCode`] if it reports a month
/// code outside the catalogue.
pub fn try_gregorian_to_hebrew(
    year: i32,
    month: u8,
    day: u8,
) -> Result<ConvertedDate, ConvertError> {
    let iso =
        Date::try_new_iso_date(year, month, day).map_err(|e| ConvertError::InvalidGregorian {
            year,
            month,
            day,
            reason: e.to_string(),
        })?;
    let hebrew = iso.to_calendar(Hebrew::new());

    let hebrew_year = hebrew.year().number;
    let month_code = hebrew.month().code.0;
    let month_entry = from_month_code(month_code.as_str(), hebrew.months_in_year()).ok_or_else(
        || ConvertError::UnknownMonthCode {
            code: month_code.as_str().to_string(),
        },
    )?;

    let raw_day = hebrew.day_of_month().0;
    let hebrew_day = u8::try_from(raw_day).unwrap_or(0);
    let day_text = match day_label(hebrew_day) {
        Some(label) => label.to_string(),
        // A day outside the table means a facility anomaly; show the raw
        // number rather than failing the whole conversion.
        None => raw_day.to_string(),
    };

    let year_text = luach_gematria::year_numeral_with_prefix(hebrew_year);
    let formatted = format!("{day_text} {} {year_text}", month_entry.name());

    Ok(ConvertedDate {
        day: hebrew_day,
        month_name: month_entry.name(),
        year: hebrew_year,
        formatted,
    })
}

/// Converts a Gregorian date, absorbing failures.
///
/// Any conversion error is logged at `warn` level and collapsed to `None`,
/// so callers can degrade the display without handling the reason. Use
/// [`try_gregorian_to_hebrew`] to inspect the failure.
pub fn gregorian_to_hebrew(year: i32, month: u8, day: u8) -> Option<ConvertedDate> {
    match try_gregorian_to_hebrew(year, month, day) {
        Ok(converted) => Some(converted),
        Err(e) => {
            warn!(year, month, day, error = %e, "hebrew date conversion failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosh_hashanah_5785() {
        let converted = try_gregorian_to_hebrew(2024, 10, 3).unwrap();
        assert_eq!(converted.day(), 1);
        assert_eq!(converted.month_name(), "תשרי");
        assert_eq!(converted.year(), 5785);
    }

    #[test]
    fn formatted_composition() {
        let converted = try_gregorian_to_hebrew(2025, 9, 23).unwrap();
        assert_eq!(converted.formatted(), "א׳ תשרי ה'תשפ\"ו");
    }

    #[test]
    fn invalid_month_rejected() {
        let err = try_gregorian_to_hebrew(2024, 13, 1).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidGregorian {
                year: 2024,
                month: 13,
                day: 1,
                ..
            }
        ));
    }

    #[test]
    fn option_facade_absorbs_failure() {
        assert!(gregorian_to_hebrew(2024, 2, 30).is_none());
        assert!(gregorian_to_hebrew(2024, 10, 3).is_some());
    }
}
