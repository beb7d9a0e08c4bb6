//! Telephone numbers
//!
//! Normalization reformats by digit count into a North American style
//! layout, keeping up to three country-code digits.

use crate::registry::{IdentifierScheme, SchemeKind};
use lazy_static::lazy_static;
use regex::Regex;

pub const TEL_PATTERN: &str =
    r"^\+?(\d{1,3})?[-.\s]?(\(?\d{1,4}\)?)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}$";

lazy_static! {
    static ref TEL_REGEX: Regex = Regex::new(TEL_PATTERN).unwrap();
}

fn subscriber(d: &str) -> String {
    format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..])
}

/// Reformat by digit count; unrecognized lengths come back untouched
pub fn normalize_tel(tel: &str) -> String {
    let d: String = tel.chars().filter(|c| c.is_ascii_digit()).collect();
    match d.len() {
        7 => format!("{}-{}", &d[..3], &d[3..]),
        10 => subscriber(&d),
        11 => format!("+00{} {}", &d[..1], subscriber(&d[1..])),
        12 => format!("+0{} {}", &d[..2], subscriber(&d[2..])),
        13 => format!("+{} {}", &d[..3], subscriber(&d[3..])),
        _ => tel.to_string(),
    }
}

pub fn validate_tel(tel: &str) -> bool {
    TEL_REGEX.is_match(&normalize_tel(tel))
}

pub struct Tel;

impl IdentifierScheme for Tel {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Tel
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_tel(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_tel(raw)
    }
}
