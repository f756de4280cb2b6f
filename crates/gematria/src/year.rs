//! Calendar-year numeral encoding.

use crate::encode::{encode, insert_gershayim};

/// Conventional marker for the sixth millennium, prefixed to full years.
pub const MILLENNIUM_PREFIX: &str = "ה'";

/// Encodes a Hebrew calendar year as its short numeral, e.g. 5786 -> תשפ"ו.
///
/// Only the last three digits take part: the year is reduced modulo 1000
/// before encoding. A gershayim is inserted before the final letter of a
/// multi-letter result; unlike [`encode`], a single-letter result carries
/// no geresh.
pub fn year_numeral(year: i32) -> String {
    let short = year % 1000;
    insert_gershayim(&encode(short, false))
}

/// Encodes a Hebrew calendar year with the ה' millennium marker,
/// e.g. 5786 -> ה'תשפ"ו.
pub fn year_numeral_with_prefix(year: i32) -> String {
    format!("{MILLENNIUM_PREFIX}{}", year_numeral(year))
}
