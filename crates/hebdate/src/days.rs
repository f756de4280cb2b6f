//! Pre-rendered day-of-month labels.

/// Fixed labels for days 1..=30, index 0 = day 1.
///
/// These are the traditional forms, written with the Hebrew geresh (U+05F3)
/// and gershayim (U+05F4) codepoints. They are stored rather than computed:
/// the encoder's ASCII punctuation differs, and the table is what selection
/// controls display.
#[rustfmt::skip]
const DAY_LABELS: [&str; 30] = [
    "א׳", "ב׳", "ג׳", "ד׳", "ה׳", "ו׳", "ז׳", "ח׳", "ט׳", "י׳",
    "י״א", "י״ב", "י״ג", "י״ד", "ט״ו", "ט״ז", "י״ז", "י״ח", "י״ט", "כ׳",
    "כ״א", "כ״ב", "כ״ג", "כ״ד", "כ״ה", "כ״ו", "כ״ז", "כ״ח", "כ״ט", "ל׳",
];

/// Returns the full day-label table in day order.
pub fn day_labels() -> &'static [&'static str; 30] {
    &DAY_LABELS
}

/// Returns the fixed label for a day of month, or `None` outside 1..=30.
pub fn day_label(day: u8) -> Option<&'static str> {
    if (1..=30).contains(&day) {
        Some(DAY_LABELS[day as usize - 1])
    } else {
        None
    }
}
