//! SNAC Cooperative ark-less numeric identifiers

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const SNAC_PATTERN: &str = r"^\d+$";

lazy_static! {
    static ref SNAC_REGEX: Regex = Regex::new(SNAC_PATTERN).unwrap();
}

pub fn normalize_snac(id: &str) -> String {
    id.trim().to_string()
}

pub fn validate_snac(id: &str) -> bool {
    SNAC_REGEX.is_match(&normalize_snac(id))
}

pub struct Snac;

impl IdentifierScheme for Snac {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Snac
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_snac(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_snac(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(
            &endpoints.snac,
            &format!("view/{}", urlencoding::encode(normalized)),
        ))
    }
}

pub async fn verify_snac(verifier: &Verifier, id: &str) -> bool {
    verifier.verify_or_false(&Snac, id).await
}
