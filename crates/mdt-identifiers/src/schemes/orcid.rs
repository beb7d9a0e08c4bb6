//! ORCID iDs
//!
//! Same Mod 11-2 checksum as ISNI; canonical form is hyphenated and bare
//! (no `https://orcid.org/` prefix).

use super::group;
use crate::checksum::mod11_2_is_valid;
use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

pub const ORCID_PATTERN: &str = r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$";

lazy_static! {
    static ref ORCID_REGEX: Regex = Regex::new(ORCID_PATTERN).unwrap();
}

/// Strip whitespace, hyphens and any URL prefix, uppercase, and regroup
/// sixteen characters as `NNNN-NNNN-NNNN-NNNX`.
pub fn normalize_orcid(orcid: &str) -> String {
    let mut compact: String = orcid
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    while let Ok(url) = Url::parse(&compact) {
        if !url.has_host() {
            break;
        }
        compact = url.path().trim_matches('/').replace('-', "");
    }

    if compact.len() == 16 && compact.is_ascii() {
        group(&compact, &[4, 4, 4, 4], "-")
    } else {
        compact
    }
}

/// Format check plus ISO 7064 Mod 11-2 checksum
pub fn validate_orcid(orcid: &str) -> bool {
    let normalized = normalize_orcid(orcid);
    ORCID_REGEX.is_match(&normalized) && mod11_2_is_valid(&normalized.replace('-', ""))
}

pub struct Orcid;

impl IdentifierScheme for Orcid {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Orcid
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_orcid(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_orcid(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(join_url(&endpoints.orcid, &urlencoding::encode(normalized)))
    }
}

/// True when orcid.org serves a profile for the iD
pub async fn verify_orcid(verifier: &Verifier, orcid: &str) -> bool {
    verifier.verify_or_false(&Orcid, orcid).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orcid() {
        assert_eq!(
            normalize_orcid("https://orcid.org/0000-0003-0900-6903"),
            "0000-0003-0900-6903"
        );
        assert_eq!(normalize_orcid("000000026539638x"), "0000-0002-6539-638X");
        assert_eq!(normalize_orcid(" 0000 0001 9266 5146 "), "0000-0001-9266-5146");
        assert_eq!(normalize_orcid("0000-0001"), "00000001");
    }

    #[test]
    fn test_valid_orcids() {
        assert!(validate_orcid("0000-0002-6539-638X"));
        assert!(validate_orcid("https://orcid.org/0000-0003-0900-6903"));
        assert!(validate_orcid("0000-0001-9266-5146"));
        assert!(validate_orcid("0000-0002-0026-2516"));
    }

    #[test]
    fn test_invalid_orcids() {
        // right shape, wrong check character
        assert!(!validate_orcid("0000-0002-6539-6380"));
        assert!(!validate_orcid("0000-0002-6539"));
        assert!(!validate_orcid(""));
        assert!(!validate_orcid("abcd-efgh-ijkl-mnop"));
    }

    #[test]
    fn test_target() {
        let url = Orcid
            .verify_target("0000-0002-6539-638X", &Endpoints::default())
            .unwrap();
        assert_eq!(url, "https://orcid.org/0000-0002-6539-638X");
    }
}
