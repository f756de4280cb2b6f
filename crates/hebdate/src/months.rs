//! Hebrew month catalogue with leap-variant ordering.

/// A month entry: display name plus a sort key in civil-year order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HebrewMonth {
    name: &'static str,
    sort_key: f64,
}

impl HebrewMonth {
    /// Returns the Hebrew display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the ordering key. The two leap-year variants of Adar use
    /// fractional keys (6.1, 6.2) so they sort adjacent to Adar itself.
    pub fn sort_key(&self) -> f64 {
        self.sort_key
    }
}

const fn month(name: &'static str, sort_key: f64) -> HebrewMonth {
    HebrewMonth { name, sort_key }
}

/// The month catalogue: twelve civil months plus the two leap-year forms
/// of the sixth month. Sort keys are strictly increasing in table order.
#[rustfmt::skip]
const HEBREW_MONTHS: [HebrewMonth; 14] = [
    month("תשרי", 1.0),
    month("חשוון", 2.0),
    month("כסלו", 3.0),
    month("טבת", 4.0),
    month("שבט", 5.0),
    month("אדר", 6.0),
    month("אדר א׳", 6.1),
    month("אדר ב׳", 6.2),
    month("ניסן", 7.0),
    month("אייר", 8.0),
    month("סיוון", 9.0),
    month("תמוז", 10.0),
    month("אב", 11.0),
    month("אלול", 12.0),
];

/// Returns the full month catalogue in table order.
pub fn months() -> &'static [HebrewMonth] {
    &HEBREW_MONTHS
}

/// Resolves an ICU month code to a catalogue entry.
///
/// The Hebrew calendar reports stable codes `M01`..`M12` counted from
/// Tishrei, with the leap month Adar I as `M05L`. `M06` is plain Adar in a
/// 12-month year and Adar II in a 13-month year; the `M06L` spelling of
/// Adar II is accepted as well. Unknown codes return `None`.
pub(crate) fn from_month_code(code: &str, months_in_year: u8) -> Option<&'static HebrewMonth> {
    let index = match code {
        "M01" => 0,
        "M02" => 1,
        "M03" => 2,
        "M04" => 3,
        "M05" => 4,
        "M05L" => 6,
        "M06" => {
            if months_in_year == 13 {
                7
            } else {
                5
            }
        }
        "M06L" => 7,
        "M07" => 8,
        "M08" => 9,
        "M09" => 10,
        "M10" => 11,
        "M11" => 12,
        "M12" => 13,
        _ => return None,
    };
    Some(&HEBREW_MONTHS[index])
}
