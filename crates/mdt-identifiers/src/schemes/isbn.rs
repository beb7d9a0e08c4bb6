//! International Standard Book Numbers
//!
//! Records and existence checks both go through Open Library, which wants
//! the compact (unhyphenated) form in the URL.

use super::{digits_and_x, group};
use crate::checksum::{isbn10_is_valid, isbn13_is_valid};
use crate::config::{join_url, Endpoints};
use crate::registry::{IdentifierScheme, SchemeKind};
use crate::verifier::Verifier;
use serde_json::Value;

/// Strip everything but digits and `X`, then hyphenate.
///
/// 10 characters group as 1-3-5-1, 13 as 3-1-2-6-1. Any other length is
/// returned stripped but ungrouped.
pub fn normalize_isbn(isbn: &str) -> String {
    let compact = digits_and_x(isbn);
    match compact.len() {
        10 => group(&compact, &[1, 3, 5, 1], "-"),
        13 => group(&compact, &[3, 1, 2, 6, 1], "-"),
        _ => compact,
    }
}

/// Validate an ISBN-10 or ISBN-13 checksum
pub fn validate_isbn(isbn: &str) -> bool {
    let compact = digits_and_x(isbn);
    match compact.len() {
        10 => isbn10_is_valid(&compact),
        13 => isbn13_is_valid(&compact),
        _ => false,
    }
}

pub struct Isbn;

impl Isbn {
    fn open_library_url(normalized: &str, endpoints: &Endpoints) -> String {
        let compact = digits_and_x(normalized);
        join_url(
            &endpoints.open_library,
            &format!("isbn/{}.json", urlencoding::encode(&compact)),
        )
    }
}

impl IdentifierScheme for Isbn {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Isbn
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_isbn(raw)
    }

    fn validate(&self, raw: &str) -> bool {
        validate_isbn(raw)
    }

    fn verify_target(&self, normalized: &str, endpoints: &Endpoints) -> Option<String> {
        Some(Self::open_library_url(normalized, endpoints))
    }

    fn object_targets(&self, normalized: &str, endpoints: &Endpoints) -> Vec<String> {
        vec![Self::open_library_url(normalized, endpoints)]
    }
}

/// True when Open Library has an edition for the ISBN
pub async fn verify_isbn(verifier: &Verifier, isbn: &str) -> bool {
    verifier.verify_or_false(&Isbn, isbn).await
}

/// Open Library edition record
pub async fn get_object_isbn(verifier: &Verifier, isbn: &str) -> Option<Value> {
    verifier.object_or_none(&Isbn, isbn).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(normalize_isbn("0306406152"), "0-306-40615-2");
        assert_eq!(normalize_isbn(" 0 306 40615 2 "), "0-306-40615-2");
        assert_eq!(normalize_isbn("9783161484100"), "978-3-16-148410-0");
        assert_eq!(normalize_isbn("080442957x"), "0-804-42957-X");
        assert_eq!(normalize_isbn("12345"), "12345");
    }

    #[test]
    fn test_valid_isbns() {
        assert!(validate_isbn("0-306-40615-2"));
        assert!(validate_isbn("978-3-16-148410-0"));
        assert!(validate_isbn("978-0-321-12521-7"));
        assert!(validate_isbn("080442957X"));
        assert!(validate_isbn("ISBN 978-3-16-148410-0"));
    }

    #[test]
    fn test_invalid_isbns() {
        assert!(!validate_isbn("0-306-40615-1"));
        assert!(!validate_isbn("978-3-16-148410-1"));
        assert!(!validate_isbn("12345"));
        assert!(!validate_isbn(""));
        // X only allowed as the ISBN-10 check character
        assert!(!validate_isbn("97831614841X0"));
    }

    #[test]
    fn test_open_library_target_is_compact() {
        let url = Isbn
            .verify_target("978-3-16-148410-0", &Endpoints::default())
            .unwrap();
        assert_eq!(url, "https://openlibrary.org/isbn/9783161484100.json");
    }
}
