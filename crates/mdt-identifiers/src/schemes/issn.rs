//! International Standard Serial Numbers
//!
//! Verified against the Crossref journals API rather than the ISSN Portal.

use super::digits_and_x;
use crate::checksum::issn_check_char;
use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

pub const ISSN_PATTERN: &str = r"^\d{4}-\d{3}[\dX]$";

lazy_static! {
    static ref ISSN_REGEX: Regex = Regex::new(ISSN_PATTERN).unwrap();
}

/// Uppercase, strip to digits and `X`, and hyphenate eight characters as
/// `NNNN-NNNX`. Other lengths come back stripped.
pub fn normalize_issn(issn: &str) -> String {
    let compact = digits_and_x(issn);
    if compact.len() == 8 {
        format!("{}-{}", &compact[..4], &compact[4..])
    } else {
        compact
    }
}

pub fn validate_issn(issn: &str) -> bool {
    let normalized = normalize_issn(issn);
    if !ISSN_REGEX.is_match(&normalized) {
        return false;
    }

    let digits: Vec<u32> = normalized
        .chars()
        .filter(|c| *c != '-')
        .take(7)
        .filter_map(|c| c.to_digit(10))
        .collect();
    match (issn_check_char(&digits), normalized.chars().last()) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

pub struct Issn;

impl Issn {
    fn crossref_url(normalized: &str, endpoints: &Endpoints) -> String {
        join_url(
            &endpoints.crossref,
            &format!("journals/{}", urlencoding::encode(normalized)),
        )
    }
}

impl IdentifierScheme for Issn {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Issn
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_issn(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_issn(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(Self::crossref_url(normalized, endpoints))
    }

    fn object_targets(&self, normalized: &str, endpoints: &Endpoints) -> Vec<String> {
        vec![Self::crossref_url(normalized, endpoints)]
    }
}

/// True when Crossref lists a journal under the ISSN
pub async fn verify_issn(verifier: &Verifier, issn: &str) -> bool {
    verifier.verify_or_false(&Issn, issn).await
}

/// Crossref journal record
pub async fn get_object_issn(verifier: &Verifier, issn: &str) -> Option<Value> {
    verifier.object_or_none(&Issn, issn).await
}
