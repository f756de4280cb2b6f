use luach_hebdate::{
    day_label, day_labels, gregorian_to_hebrew, months, try_gregorian_to_hebrew, ConvertError,
};

#[test]
fn rosh_hashanah_anchors() {
    let rh_5785 = try_gregorian_to_hebrew(2024, 10, 3).unwrap();
    assert_eq!(rh_5785.day(), 1);
    assert_eq!(rh_5785.month_name(), "תשרי");
    assert_eq!(rh_5785.year(), 5785);

    let rh_5786 = try_gregorian_to_hebrew(2025, 9, 23).unwrap();
    assert_eq!(rh_5786.day(), 1);
    assert_eq!(rh_5786.month_name(), "תשרי");
    assert_eq!(rh_5786.year(), 5786);
    assert_eq!(rh_5786.formatted(), "א׳ תשרי ה'תשפ\"ו");
}

#[test]
fn passover_5784() {
    let converted = try_gregorian_to_hebrew(2024, 4, 23).unwrap();
    assert_eq!(converted.day(), 15);
    assert_eq!(converted.month_name(), "ניסן");
    assert_eq!(converted.year(), 5784);
    // Day 15 uses the substituted label, consistent with the encoder rule.
    assert!(converted.formatted().starts_with("ט״ו "));
}

#[test]
fn leap_year_adar_variants() {
    // 5784 is a leap year with both forms of Adar.
    let adar_1 = try_gregorian_to_hebrew(2024, 2, 10).unwrap();
    assert_eq!(adar_1.day(), 1);
    assert_eq!(adar_1.month_name(), "אדר א׳");
    assert_eq!(adar_1.year(), 5784);

    let adar_2 = try_gregorian_to_hebrew(2024, 3, 25).unwrap();
    assert_eq!(adar_2.day(), 15);
    assert_eq!(adar_2.month_name(), "אדר ב׳");
    assert_eq!(adar_2.year(), 5784);
}

#[test]
fn regular_year_adar() {
    // Purim 5785, a 12-month year: plain Adar.
    let purim = try_gregorian_to_hebrew(2025, 3, 14).unwrap();
    assert_eq!(purim.day(), 14);
    assert_eq!(purim.month_name(), "אדר");
    assert_eq!(purim.year(), 5785);
    assert_eq!(purim.formatted(), "י״ד אדר ה'תשפ\"ה");
}

#[test]
fn tu_bishvat_day_label() {
    let converted = try_gregorian_to_hebrew(2025, 2, 13).unwrap();
    assert_eq!(converted.day(), 15);
    assert_eq!(converted.month_name(), "שבט");
    assert_eq!(day_label(converted.day()), Some("ט״ו"));
}

#[test]
fn invalid_dates_are_errors_not_panics() {
    for (year, month, day) in [(2024, 13, 1), (2024, 0, 1), (2024, 2, 30), (2023, 2, 29)] {
        let err = try_gregorian_to_hebrew(year, month, day).unwrap_err();
        assert!(
            matches!(err, ConvertError::InvalidGregorian { .. }),
            "unexpected error for {year}-{month}-{day}: {err}"
        );
        assert!(gregorian_to_hebrew(year, month, day).is_none());
    }
}

#[test]
fn conversion_is_deterministic() {
    let first = try_gregorian_to_hebrew(2024, 4, 23).unwrap();
    let second = try_gregorian_to_hebrew(2024, 4, 23).unwrap();
    assert_eq!(first, second);
}

#[test]
fn day_always_within_label_table() {
    // A multi-year sweep: every converted day must hit the fixed table.
    for year in 2023..=2026 {
        for month in 1..=12u8 {
            for day in [1, 15, 28] {
                let converted = try_gregorian_to_hebrew(year, month, day).unwrap();
                assert!(
                    day_label(converted.day()).is_some(),
                    "day {} outside label table for {year}-{month}-{day}",
                    converted.day()
                );
            }
        }
    }
}

#[test]
fn catalogue_exposure() {
    assert_eq!(months().len(), 14);
    assert_eq!(day_labels().len(), 30);
    assert_eq!(months()[0].name(), "תשרי");
    assert_eq!(day_labels()[14], "ט״ו");
}

#[test]
fn formatted_string_shape() {
    let converted = try_gregorian_to_hebrew(2024, 10, 3).unwrap();
    let parts: Vec<&str> = converted.formatted().split(' ').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "א׳");
    assert_eq!(parts[1], "תשרי");
    assert!(parts[2].starts_with("ה'"));
}
