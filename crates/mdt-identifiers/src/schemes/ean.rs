//! International Article Numbers (EAN-8 and EAN-13)

use crate::checksum::ean_check_digit;
use crate::registry::{IdentifierScheme, SchemeKind};

/// Digits only, no separators
pub fn normalize_ean(ean: &str) -> String {
    ean.trim().chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_ean(ean: &str) -> bool {
    let digits: Vec<u32> = normalize_ean(ean)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let (body, check, first_weight) = match digits.len() {
        13 => (&digits[..12], digits[12], 1),
        8 => (&digits[..7], digits[7], 3),
        _ => return false,
    };
    ean_check_digit(body, first_weight) == check
}

pub struct Ean;

impl IdentifierScheme for Ean {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Ean
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_ean(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_ean(raw)
    }
}
