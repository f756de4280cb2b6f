//! General integer to Hebrew numeral conversion.

use crate::alphabet::{letter, GERESH, GERSHAYIM};

/// Converts a positive integer to Hebrew numeral notation.
///
/// The value is decomposed largest place first: ת is repeated while 400 or
/// more remains, then a single hundreds letter, then tens and units. The
/// remainders 15 and 16 always become טו and טז instead of a tens-units
/// pair, which would spell a contracted divine name.
///
/// With `punctuate` set, a multi-letter result gets a gershayim before its
/// final letter and a single-letter result gets a trailing geresh.
///
/// Non-positive values encode to the empty string. The intended domain is
/// calendar day-of-month and three-digit year values, below 1000.
pub fn encode(value: i32, punctuate: bool) -> String {
    if value <= 0 {
        return String::new();
    }

    let mut remainder = value;
    let mut out = String::new();

    while remainder >= 400 {
        out.push(letter(400).expect("400 is in the numeral alphabet"));
        remainder -= 400;
    }
    if remainder >= 100 {
        let hundreds = (remainder / 100) * 100;
        out.push(letter(hundreds as u16).expect("hundreds multiples are in the numeral alphabet"));
        remainder %= 100;
    }

    if remainder == 15 {
        out.push_str("טו");
    } else if remainder == 16 {
        out.push_str("טז");
    } else {
        if remainder >= 10 {
            let tens = (remainder / 10) * 10;
            out.push(letter(tens as u16).expect("tens multiples are in the numeral alphabet"));
            remainder %= 10;
        }
        if remainder > 0 {
            out.push(letter(remainder as u16).expect("units are in the numeral alphabet"));
        }
    }

    if !punctuate {
        return out;
    }
    if out.chars().nth(1).is_none() {
        out.push(GERESH);
        out
    } else {
        insert_gershayim(&out)
    }
}

/// Inserts a gershayim before the final letter of a multi-letter string.
///
/// Single-letter and empty strings are returned unchanged. Operates on the
/// fully decomposed numeral, not per place-value group.
pub(crate) fn insert_gershayim(s: &str) -> String {
    match s.char_indices().last() {
        Some((idx, last)) if idx > 0 => {
            let mut out = String::with_capacity(s.len() + 1);
            out.push_str(&s[..idx]);
            out.push(GERSHAYIM);
            out.push(last);
            out
        }
        _ => s.to_string(),
    }
}
