//! Library of Congress Name Authority File identifiers (e.g. `n79021164`)

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const LCNAF_PATTERN: &str = r"^[a-zA-Z0-9]+$";

lazy_static! {
    static ref LCNAF_REGEX: Regex = Regex::new(LCNAF_PATTERN).unwrap();
}

pub fn normalize_lcnaf(id: &str) -> String {
    id.trim().to_string()
}

pub fn validate_lcnaf(id: &str) -> bool {
    LCNAF_REGEX.is_match(&normalize_lcnaf(id))
}

pub struct Lcnaf;

impl IdentifierScheme for Lcnaf {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Lcnaf
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_lcnaf(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_lcnaf(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(
            &endpoints.loc,
            &format!("authorities/names/{}.json", urlencoding::encode(normalized)),
        ))
    }
}

/// True when id.loc.gov serves the authority record
pub async fn verify_lcnaf(verifier: &Verifier, id: &str) -> bool {
    verifier.verify_or_false(&Lcnaf, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcnaf() {
        assert_eq!(normalize_lcnaf(" n79021164 "), "n79021164");
        assert!(validate_lcnaf("n79021164"));
        assert!(validate_lcnaf("no2014123456"));
        assert!(!validate_lcnaf("n7902-1164"));
        assert!(!validate_lcnaf(""));
    }

    #[test]
    fn test_target() {
        let url = Lcnaf.verify_target("n79021164", &Endpoints::default()).unwrap();
        assert_eq!(url, "https://id.loc.gov/authorities/names/n79021164.json");
    }
}
