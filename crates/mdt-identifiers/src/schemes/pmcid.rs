//! PubMed Central identifiers

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const PMCID_PATTERN: &str = r"^PMC\d+$";

lazy_static! {
    static ref PMCID_REGEX: Regex = Regex::new(PMCID_PATTERN).unwrap();
}

/// Uppercase and make sure the `PMC` prefix is present
pub fn normalize_pmcid(pmcid: &str) -> String {
    let cleaned = pmcid.trim().to_uppercase();
    if cleaned.starts_with("PMC") {
        cleaned
    } else {
        format!("PMC{cleaned}")
    }
}

pub fn validate_pmcid(pmcid: &str) -> bool {
    PMCID_REGEX.is_match(&normalize_pmcid(pmcid))
}

pub struct Pmcid;

impl IdentifierScheme for Pmcid {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Pmcid
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_pmcid(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_pmcid(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(
            &endpoints.pmc,
            &format!("pmc/articles/{}/", urlencoding::encode(normalized)),
        ))
    }
}

/// True when PubMed Central serves the article page
pub async fn verify_pmcid(verifier: &Verifier, pmcid: &str) -> bool {
    verifier.verify_or_false(&Pmcid, pmcid).await
}
