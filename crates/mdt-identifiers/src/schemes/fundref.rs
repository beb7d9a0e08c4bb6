//! Crossref Funder Registry identifiers (DOI shaped, `10.13039/...`)

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const FUNDREF_PATTERN: &str = r"(?i)^10\.\d{4,9}/[-._;()/:a-z0-9]+$";

lazy_static! {
    static ref FUNDREF_REGEX: Regex = Regex::new(FUNDREF_PATTERN).unwrap();
}

pub fn normalize_fundref_id(id: &str) -> String {
    id.trim().to_lowercase()
}

pub fn validate_fundref_id(id: &str) -> bool {
    FUNDREF_REGEX.is_match(&normalize_fundref_id(id))
}

pub struct FundRef;

impl IdentifierScheme for FundRef {
    fn kind(&self) -> SchemeKind {
        SchemeKind::FundRef
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_fundref_id(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_fundref_id(raw)
    }

    // Crossref takes the full funder DOI as the path segment
    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(&endpoints.crossref, &format!("funders/{normalized}")))
    }
}

/// True when Crossref knows the funder
pub async fn verify_fundref_id(verifier: &Verifier, id: &str) -> bool {
    verifier.verify_or_false(&FundRef, id).await
}
