//! Check digit arithmetic shared by the identifier schemes
//!
//! Every function here expects input that has already passed the caller's
//! length/format gate. They still never index past the end of a short slice;
//! a wrong length simply fails the check.

/// Convert an ASCII digit to its value, `X`/`x` counts as 10.
fn char_value(c: char) -> Option<u32> {
    match c {
        'X' | 'x' => Some(10),
        _ => c.to_digit(10),
    }
}

/// ISBN-10 Mod-11: weights 10 down to 1, check character `X` = 10.
pub fn isbn10_is_valid(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    let mut sum = 0;
    for (i, &c) in chars.iter().enumerate() {
        // X is only allowed as the check character
        let value = if i < 9 { c.to_digit(10) } else { char_value(c) };
        match value {
            Some(v) => sum += v * (10 - i as u32),
            None => return false,
        }
    }

    sum % 11 == 0
}

/// ISBN-13 Mod-10: weights alternate 1, 3 across all 13 digits.
pub fn isbn13_is_valid(isbn: &str) -> bool {
    let digits: Option<Vec<u32>> = isbn.chars().map(|c| c.to_digit(10)).collect();
    match digits {
        Some(d) if d.len() == 13 => {
            let sum: u32 = d
                .iter()
                .enumerate()
                .map(|(i, v)| if i % 2 == 0 { *v } else { v * 3 })
                .sum();
            sum % 10 == 0
        }
        _ => false,
    }
}

/// EAN check digit over the body digits (everything but the check digit).
///
/// `first_weight` is the weight applied at even indexes; odd indexes get the
/// other of 1 and 3. EAN-13 starts with 1, EAN-8 starts with 3.
pub fn ean_check_digit(body: &[u32], first_weight: u32) -> u32 {
    let other_weight = if first_weight == 1 { 3 } else { 1 };
    let total: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * if i % 2 == 0 { first_weight } else { other_weight })
        .sum();
    (10 - total % 10) % 10
}

/// Expected ISSN check character for the first seven digits.
///
/// Σ digit × (8 − index) mod 11; 0 maps to '0', 1 maps to 'X', otherwise 11 − mod.
pub fn issn_check_char(digits: &[u32]) -> Option<char> {
    if digits.len() != 7 {
        return None;
    }
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (8 - i as u32))
        .sum();
    match sum % 11 {
        0 => Some('0'),
        1 => Some('X'),
        m => char::from_digit(11 - m, 10),
    }
}

/// ISO 7064 Mod 11-2 check character for a 15 digit base (ISNI, ORCID).
pub fn mod11_2_check_char(base: &str) -> Option<char> {
    let digits: Option<Vec<u32>> = base.chars().map(|c| c.to_digit(10)).collect();
    let digits = digits.filter(|d| d.len() == 15)?;

    let mut sum = 0;
    for d in digits {
        sum = (sum + d) * 2 % 11;
    }
    match (12 - sum % 11) % 11 {
        10 => Some('X'),
        check => char::from_digit(check, 10),
    }
}

/// Check a full 16 character ISO 7064 Mod 11-2 identifier.
pub fn mod11_2_is_valid(id: &str) -> bool {
    if id.len() != 16 || !id.is_ascii() {
        return false;
    }
    let (base, check) = id.split_at(15);
    match (mod11_2_check_char(base), check.chars().next()) {
        (Some(expected), Some(actual)) => expected == actual.to_ascii_uppercase(),
        _ => false,
    }
}
