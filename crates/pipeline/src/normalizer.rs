//! Publication-number normalisation.
//!
//! Publication numbers arrive in many shapes (`"US10123456B2"`,
//! `"EP-000123"`, `"10123456"`). The numeric sort key is the first maximal run
//! of decimal digits anywhere in the value. Any Unicode decimal digit
//! (general category `Nd`) counts, so `"US-١٢٣"` sorts as `123`.

use std::sync::LazyLock;

use regex::Regex;

use crate::PublicationNumberError;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern is valid"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Extracts the numeric sort key from a publication number.
///
/// Leading zeros are insignificant (`"EP-000123"` → `123`). A value without
/// any digit run, or whose first run overflows `u64`, is rejected; the value
/// is never silently coerced.
pub fn numeric_key(pub_number: &str) -> Result<u64, PublicationNumberError> {
    let digits = DIGIT_RUN
        .find(pub_number)
        .ok_or_else(|| PublicationNumberError::NoDigits {
            value: pub_number.to_string(),
        })?
        .as_str();

    digits
        .chars()
        .try_fold(0u64, |acc, c| {
            acc.checked_mul(10)?.checked_add(decimal_value(c))
        })
        .ok_or_else(|| PublicationNumberError::OutOfRange {
            value: pub_number.to_string(),
            digits: digits.to_string(),
        })
}

/// Value of a decimal digit character.
///
/// Unicode allocates every `Nd` digit set as a contiguous `0..=9` block, so
/// the value is the distance back to the start of the block, modulo ten for
/// sets laid out back to back (the mathematical alphanumeric digits).
fn decimal_value(c: char) -> u64 {
    if let Some(value) = c.to_digit(10) {
        return u64::from(value);
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    u64::from((c as u32 - start) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod tests;
