//! Research Organization Registry identifiers
//!
//! The canonical form is the ROR URL itself, and verification fetches that
//! page: a 2xx from ror.org is taken as "registered".

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const ROR_PREFIX: &str = "https://ror.org/";
pub const ROR_PATTERN: &str = r"(?i)^(https://ror\.org/)?0[0-9a-hj-km-np-tv-z]{6}[0-9]{2}$";

lazy_static! {
    static ref ROR_REGEX: Regex = Regex::new(ROR_PATTERN).unwrap();
}

fn bare_ror_id(ror: &str) -> &str {
    ["https://ror.org/", "http://ror.org/", "ror.org/"]
        .iter()
        .find_map(|prefix| ror.strip_prefix(prefix))
        .unwrap_or(ror)
}

/// Lowercase with the `https://ror.org/` prefix enforced
pub fn normalize_ror(ror: &str) -> String {
    let cleaned = ror.trim().to_lowercase();
    format!("{}{}", ROR_PREFIX, bare_ror_id(&cleaned))
}

pub fn validate_ror(ror: &str) -> bool {
    ROR_REGEX.is_match(&normalize_ror(ror))
}

pub struct Ror;

impl IdentifierScheme for Ror {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Ror
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_ror(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_ror(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(&endpoints.ror, bare_ror_id(normalized)))
    }
}

/// True when ror.org serves the organization page
pub async fn verify_ror(verifier: &Verifier, ror: &str) -> bool {
    verifier.verify_or_false(&Ror, ror).await
}
