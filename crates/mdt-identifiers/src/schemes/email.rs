//! Email addresses, optionally wrapped as `"Name" <addr>`

use crate::registry::{IdentifierScheme, SchemeKind};
use lazy_static::lazy_static;
use regex::Regex;

pub const EMAIL_PATTERN: &str = r#"^(?:"?([^"]*)"?\s)?(?:<?(.+@[^>]+)>?)$"#;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).unwrap();
}

pub fn normalize_email(email: &str) -> String {
    email.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&normalize_email(email))
}

pub struct Email;

impl IdentifierScheme for Email {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Email
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_email(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_email(raw)
    }
}
