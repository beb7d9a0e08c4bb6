//! PubMed identifiers

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const PMID_PATTERN: &str = r"^[0-9]+$";

lazy_static! {
    static ref PMID_REGEX: Regex = Regex::new(PMID_PATTERN).unwrap();
    static ref PMID_PREFIX_REGEX: Regex = Regex::new(r"(?i)^(pmid:\s*)+").unwrap();
}

/// Drop a leading `pmid:` label and surrounding whitespace
pub fn normalize_pmid(pmid: &str) -> String {
    PMID_PREFIX_REGEX
        .replace(pmid.trim(), "")
        .trim()
        .to_string()
}

pub fn validate_pmid(pmid: &str) -> bool {
    PMID_REGEX.is_match(&normalize_pmid(pmid))
}

pub struct Pmid;

impl IdentifierScheme for Pmid {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Pmid
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_pmid(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_pmid(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(
            &endpoints.pubmed,
            &format!("{}/", urlencoding::encode(normalized)),
        ))
    }
}

/// True when PubMed serves the article page
pub async fn verify_pmid(verifier: &Verifier, pmid: &str) -> bool {
    verifier.verify_or_false(&Pmid, pmid).await
}
