use super::*;

#[test]
fn test_plain_number() {
    assert_eq!(numeric_key("10123456"), Ok(10123456));
}

#[test]
fn test_number_with_country_and_kind_code() {
    assert_eq!(numeric_key("US-10123456-B2"), Ok(10123456));
    assert_eq!(numeric_key("US9999999B1"), Ok(9999999));
}

#[test]
fn test_leading_zeros_are_insignificant() {
    assert_eq!(numeric_key("EP-000123"), Ok(123));
    assert_eq!(numeric_key("000"), Ok(0));
}

#[test]
fn test_only_first_digit_run_is_used() {
    // Later runs (serial after the year, kind code digit) are ignored.
    assert_eq!(numeric_key("WO2019/123456A1"), Ok(2019));
    assert_eq!(numeric_key("US10000001B2"), Ok(10000001));
}

#[test]
fn test_no_digits_is_rejected_with_value() {
    assert_eq!(
        numeric_key("pending"),
        Err(PublicationNumberError::NoDigits {
            value: "pending".to_string()
        })
    );
    assert!(matches!(
        numeric_key(""),
        Err(PublicationNumberError::NoDigits { .. })
    ));
}

#[test]
fn test_unicode_decimal_digits_count() {
    // Arabic-Indic.
    assert_eq!(numeric_key("US-١٢٣"), Ok(123));
    assert_eq!(numeric_key("EP-٠٠١٢٣"), Ok(123));
    // Mixed scripts form one run.
    assert_eq!(numeric_key("US١٢3"), Ok(123));
    // Devanagari and fullwidth.
    assert_eq!(numeric_key("IN-४२"), Ok(42));
    assert_eq!(numeric_key("JP２０１９"), Ok(2019));
    // Mathematical bold and double-struck digits sit in consecutive blocks.
    assert_eq!(numeric_key("𝟏𝟐"), Ok(12));
    assert_eq!(numeric_key("𝟙𝟡"), Ok(19));
}

#[test]
fn test_unicode_digit_run_can_overflow() {
    let digits = "٩".repeat(21);
    let value = format!("US{digits}");

    assert_eq!(
        numeric_key(&value),
        Err(PublicationNumberError::OutOfRange { value: value.clone(), digits })
    );
}

#[test]
fn test_non_digit_numerals_do_not_count() {
    // Roman numerals and superscripts are not decimal digits.
    assert!(matches!(
        numeric_key("Ⅻ-²"),
        Err(PublicationNumberError::NoDigits { .. })
    ));
}

#[test]
fn test_overflowing_run_is_rejected() {
    let err = numeric_key("US99999999999999999999999").unwrap_err();
    assert_eq!(
        err,
        PublicationNumberError::OutOfRange {
            value: "US99999999999999999999999".to_string(),
            digits: "99999999999999999999999".to_string(),
        }
    );
}
