//! arXiv identifiers, written with their `arxiv:` prefix
//!
//! New style: `arxiv:YYMM.NNNN(N)` with an optional version suffix.
//! Old style: `arxiv:archive(.subject)/YYMMNNN`.

use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const ARXIV_NEW_PATTERN: &str = r"(?i)^arxiv:\d{4}\.\d{4,5}(v\d+)?$";
pub const ARXIV_OLD_PATTERN: &str = r"(?i)^arxiv:[a-z-]+(\.[a-z-]+)?/\d{7}(v\d+)?$";

lazy_static! {
    static ref ARXIV_NEW_REGEX: Regex = Regex::new(ARXIV_NEW_PATTERN).unwrap();
    static ref ARXIV_OLD_REGEX: Regex = Regex::new(ARXIV_OLD_PATTERN).unwrap();
}

pub fn normalize_arxiv_id(arxiv_id: &str) -> String {
    arxiv_id.trim().to_lowercase()
}

pub fn validate_arxiv_id(arxiv_id: &str) -> bool {
    let normalized = normalize_arxiv_id(arxiv_id);
    ARXIV_NEW_REGEX.is_match(&normalized) || ARXIV_OLD_REGEX.is_match(&normalized)
}

pub struct ArXiv;

impl IdentifierScheme for ArXiv {
    fn kind(&self) -> SchemeKind {
        SchemeKind::ArXiv
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_arxiv_id(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_arxiv_id(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        let bare = normalized.strip_prefix("arxiv:").unwrap_or(normalized).trim();
        Some(join_url(
            &endpoints.arxiv,
            &format!("api/query?id_list={}", urlencoding::encode(bare)),
        ))
    }
}

/// Query the arXiv export API for the identifier.
///
/// The export API answers 200 with an Atom feed even for unknown ids, so a
/// 2xx here confirms the id is well formed for arXiv rather than that a
/// paper exists.
pub async fn verify_arxiv_id(verifier: &Verifier, arxiv_id: &str) -> bool {
    verifier.verify_or_false(&ArXiv, arxiv_id).await
}
