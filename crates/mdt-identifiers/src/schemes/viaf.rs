//! Virtual International Authority File identifiers

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const VIAF_PATTERN: &str = r"^\d+$";

lazy_static! {
    static ref VIAF_REGEX: Regex = Regex::new(VIAF_PATTERN).unwrap();
}

pub fn normalize_viaf(id: &str) -> String {
    id.trim().to_string()
}

pub fn validate_viaf(id: &str) -> bool {
    VIAF_REGEX.is_match(&normalize_viaf(id))
}

pub struct Viaf;

impl IdentifierScheme for Viaf {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Viaf
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_viaf(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_viaf(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(
            &endpoints.viaf,
            &format!("viaf/{}", urlencoding::encode(normalized)),
        ))
    }
}

pub async fn verify_viaf(verifier: &Verifier, id: &str) -> bool {
    verifier.verify_or_false(&Viaf, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viaf() {
        assert_eq!(normalize_viaf(" 102333412 "), "102333412");
        assert!(validate_viaf("102333412"));
        assert!(!validate_viaf("viaf102333412"));
        assert!(!validate_viaf(""));
    }
}
