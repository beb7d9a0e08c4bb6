//! Digital Object Identifiers
//!
//! Existence is checked against the doi.org handle API. Records come from
//! Crossref, falling back to DataCite for DOIs Crossref does not hold.

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use url::Url;

pub const DOI_PATTERN: &str = r"^10\.\d{4,9}/\S+$";

lazy_static! {
    static ref DOI_REGEX: Regex = Regex::new(DOI_PATTERN).unwrap();
}

/// Lowercase and trim; for URL input (`https://doi.org/...`, `doi:...`)
/// keep only the path without its leading slash.
pub fn normalize_doi(doi: &str) -> String {
    let mut current = doi.trim().to_lowercase();
    // `doi:https://doi.org/...` needs more than one pass
    while let Ok(url) = Url::parse(&current) {
        let path = url.path().trim_start_matches('/').trim();
        if path.is_empty() || path == current {
            break;
        }
        current = path.to_string();
    }
    // percent-encoding from the URL parser is uppercase hex
    current.to_lowercase()
}

pub fn validate_doi(doi: &str) -> bool {
    DOI_REGEX.is_match(&normalize_doi(doi))
}

pub struct Doi;

impl IdentifierScheme for Doi {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Doi
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_doi(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_doi(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        let path = format!("api/handles/{}", urlencoding::encode(normalized));
        Some(join_url(&endpoints.doi, &path))
    }

    fn object_targets(&self, normalized: &str, endpoints: &Endpoints) -> Vec<String> {
        let encoded = urlencoding::encode(normalized);
        vec![
            join_url(&endpoints.crossref, &format!("works/{encoded}")),
            join_url(&endpoints.datacite, &format!("dois/{encoded}")),
        ]
    }
}

/// True when doi.org knows the handle
pub async fn verify_doi(verifier: &Verifier, doi: &str) -> bool {
    verifier.verify_or_false(&Doi, doi).await
}

/// Crossref record, or the DataCite record if Crossref has none
pub async fn get_object_doi(verifier: &Verifier, doi: &str) -> Option<Value> {
    verifier.object_or_none(&Doi, doi).await
}
