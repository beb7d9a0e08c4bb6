//! RFC 4122 UUIDs

use crate::registry::{IdentifierScheme, SchemeKind};
use lazy_static::lazy_static;
use regex::Regex;

pub const UUID_PATTERN: &str =
    r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

lazy_static! {
    static ref UUID_REGEX: Regex = Regex::new(UUID_PATTERN).unwrap();
}

pub fn normalize_uuid(id: &str) -> String {
    id.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Hyphenated form, version 1, 3, 4 or 5, RFC 4122 variant
pub fn validate_uuid(id: &str) -> bool {
    let normalized = normalize_uuid(id);
    if !UUID_REGEX.is_match(&normalized) {
        return false;
    }
    match ::uuid::Uuid::parse_str(&normalized) {
        Ok(parsed) => {
            matches!(parsed.get_version_num(), 1 | 3 | 4 | 5)
                && parsed.get_variant() == ::uuid::Variant::RFC4122
        }
        Err(_) => false,
    }
}

pub struct Uuid;

impl IdentifierScheme for Uuid {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Uuid
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_uuid(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_uuid(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uuid() {
        assert_eq!(
            normalize_uuid(" 6BA7B810-9DAD-11D1-80B4-00C04FD430C8 "),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
    }

    #[test]
    fn test_valid_uuids() {
        assert!(validate_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
        assert!(validate_uuid("f47ac10b-58cc-4372-a567-0e02b2c3d479"));
        assert!(validate_uuid(&::uuid::Uuid::new_v4().to_string()));
    }

    #[test]
    fn test_invalid_uuids() {
        // version 0
        assert!(!validate_uuid("f47ac10b-58cc-0372-a567-0e02b2c3d479"));
        // NCS variant
        assert!(!validate_uuid("f47ac10b-58cc-4372-0567-0e02b2c3d479"));
        // unhyphenated
        assert!(!validate_uuid("f47ac10b58cc4372a5670e02b2c3d479"));
        assert!(!validate_uuid("not-a-uuid"));
        assert!(!validate_uuid(""));
    }
}
