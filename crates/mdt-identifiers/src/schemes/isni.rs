//! International Standard Name Identifiers

use super::{digits_and_x, group};
use crate::checksum::mod11_2_is_valid;
use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const ISNI_PATTERN: &str = r"^\d{15}[\dX]$";

lazy_static! {
    static ref ISNI_REGEX: Regex = Regex::new(ISNI_PATTERN).unwrap();
}

/// Sixteen characters as four space separated groups: `0000 0001 2096 0218`
pub fn normalize_isni(isni: &str) -> String {
    let compact = digits_and_x(isni);
    if compact.len() == 16 {
        group(&compact, &[4, 4, 4, 4], " ")
    } else {
        compact
    }
}

/// Format check plus ISO 7064 Mod 11-2 checksum
pub fn validate_isni(isni: &str) -> bool {
    let compact = digits_and_x(isni);
    ISNI_REGEX.is_match(&compact) && mod11_2_is_valid(&compact)
}

pub struct Isni;

impl IdentifierScheme for Isni {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Isni
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_isni(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_isni(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        let compact = digits_and_x(normalized);
        Some(join_url(
            &endpoints.isni,
            &format!("isni/{}", urlencoding::encode(&compact)),
        ))
    }
}

/// True when isni.org resolves the identifier
pub async fn verify_isni(verifier: &Verifier, isni: &str) -> bool {
    verifier.verify_or_false(&Isni, isni).await
}
