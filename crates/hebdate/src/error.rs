//! Error types for the luach-hebdate crate.

/// Error type for fallible conversions in the luach-hebdate crate.
///
/// Conversion never panics: invalid input and calendar-facility anomalies
/// both surface as values of this enum.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Returned when the calendar facility rejects the Gregorian input.
    #[error("invalid gregorian date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidGregorian {
        /// The rejected Gregorian year.
        year: i32,
        /// The rejected Gregorian month.
        month: u8,
        /// The rejected Gregorian day.
        day: u8,
        /// The facility's own description of the rejection.
        reason: String,
    },

    /// Returned when the calendar facility reports a month code that is
    /// not in the month catalogue.
    #[error("unrecognized hebrew month code {code:?}")]
    UnknownMonthCode {
        /// The unrecognized month code.
        code: String,
    },
}
