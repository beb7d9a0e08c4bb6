//! Normalization and validation across every scheme
//!
//! Table-driven cases plus property-based checks that normalization is
//! stable and validation agrees with it.

use mdt_identifiers::*;
use proptest::prelude::*;
use rstest::rstest;

// === Normalization ===

#[rstest]
#[case("doi", "https://doi.org/10.22002/bv2pv-2b295", "10.22002/bv2pv-2b295")]
#[case("doi", "doi:10.1038/NATURE12373", "10.1038/nature12373")]
#[case("doi", "https://dx.doi.org/10.1000/182", "10.1000/182")]
#[case("isbn", "0306406152", "0-306-40615-2")]
#[case("isbn", "9783161484100", "978-3-16-148410-0")]
#[case("issn", "10586180", "1058-6180")]
#[case("issn", "0378-595x", "0378-595X")]
#[case("isni", "0000000120960218", "0000 0001 2096 0218")]
#[case("orcid", "https://orcid.org/0000-0002-6539-638x", "0000-0002-6539-638X")]
#[case("ror", "05dxps055", "https://ror.org/05dxps055")]
#[case("arxiv", "arXiv:2412.03631", "arxiv:2412.03631")]
#[case("pmid", "PMID: 39696567", "39696567")]
#[case("pmcid", "11620307", "PMC11620307")]
#[case("fundref", "10.13039/100000001", "10.13039/100000001")]
#[case("ean", "978-0-201-54428-2", "9780201544282")]
#[case("email", " a.b @localhost ", "a.b@localhost")]
#[case("tel", "1-222-333-4444", "+001 (222) 333-4444")]
#[case("uuid", "F47AC10B-58CC-4372-A567-0E02B2C3D479", "f47ac10b-58cc-4372-a567-0e02b2c3d479")]
fn test_normalize_by_type(#[case] kind: &str, #[case] raw: &str, #[case] expected: &str) {
    let scheme = lookup(kind).unwrap();
    assert_eq!(scheme.normalize(raw), expected);
}

// === Validation ===

#[rstest]
#[case("isbn", "0-306-40615-2", true)]
#[case("isbn", "0-306-40615-1", false)] // last digit changed
#[case("isbn", "978-3-16-148410-0", true)]
#[case("isbn", "080442957X", true)]
#[case("isbn", "12345", false)]
#[case("issn", "1058-6180", true)]
#[case("issn", "1934-1547", true)]
#[case("issn", "1058-6181", false)]
#[case("orcid", "0000-0002-6539-638X", true)]
#[case("orcid", "0000-0002-6539-6381", false)]
#[case("isni", "0000 0001 2096 0218", true)]
#[case("isni", "0000 0001 2096 0219", false)]
#[case("ean", "9780201544282", true)]
#[case("ean", "96385074", true)]
#[case("ean", "96385075", false)] // corrupted EAN-8
#[case("doi", "10.22002/bv2pv-2b295", true)]
#[case("doi", "11.1038/nature12373", false)]
#[case("ror", "https://ror.org/05dxps055", true)]
#[case("arxiv", "arXiv:2412.03631", true)]
#[case("arxiv", "arXiv:241.03631", false)] // 3-digit year segment
#[case("pmid", "39696567", true)]
#[case("pmcid", "PMC11620307", true)]
#[case("lcnaf", "n79021164", true)]
#[case("viaf", "102333412", true)]
#[case("snac", "8523405", true)]
#[case("fundref", "10.13039/100000001", true)]
#[case("email", "b_2@example.edu", true)]
#[case("email", "example.edu", false)]
#[case("tel", "111-222-3333", true)]
#[case("uuid", "6ba7b810-9dad-11d1-80b4-00c04fd430c8", true)]
#[case("uuid", "6ba7b810-9dad-61d1-80b4-00c04fd430c8", false)] // version 6
fn test_validate_by_type(#[case] kind: &str, #[case] raw: &str, #[case] expected: bool) {
    let scheme = lookup(kind).unwrap();
    assert_eq!(scheme.validate(raw), expected, "{kind} {raw}");
}

#[test]
fn test_blank_input_never_validates() {
    for kind in SchemeKind::all() {
        let scheme = kind.scheme();
        assert!(!scheme.validate(""), "{kind} accepted empty input");
        assert!(!scheme.validate("   "), "{kind} accepted blank input");
    }
}

#[test]
fn test_free_functions_match_trait() {
    assert_eq!(normalize_doi("DOI:10.1000/182"), Doi.normalize("DOI:10.1000/182"));
    assert_eq!(validate_isbn("0306406152"), Isbn.validate("0306406152"));
    assert_eq!(normalize_ror("05dxps055"), Ror.normalize("05dxps055"));
}

#[test]
fn test_unknown_type() {
    assert!(lookup("handle").is_none());
    assert!("".parse::<SchemeKind>().is_err());
}

// === Property-Based Tests ===

fn any_scheme() -> impl Strategy<Value = SchemeKind> {
    proptest::sample::select(SchemeKind::all().to_vec())
}

proptest! {
    #[test]
    fn test_normalize_idempotent(kind in any_scheme(), raw in "[0-9A-Za-z:/.@ -]{0,32}") {
        let scheme = kind.scheme();
        let once = scheme.normalize(&raw);
        prop_assert_eq!(scheme.normalize(&once), once.clone(), "{} not stable on {:?}", kind, raw);
    }

    #[test]
    fn test_validate_agrees_with_normalize(kind in any_scheme(), raw in "[0-9A-Za-z:/.@ -]{0,32}") {
        let scheme = kind.scheme();
        prop_assert_eq!(scheme.validate(&raw), scheme.validate(&scheme.normalize(&raw)));
    }

    #[test]
    fn test_isbn10_single_digit_change_invalidates(pos in 0usize..9, bump in 1u32..10) {
        let good = "0306406152";
        let mut digits: Vec<u32> = good.chars().filter_map(|c| c.to_digit(10)).collect();
        digits[pos] = (digits[pos] + bump) % 10;
        let bad: String = digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect();
        prop_assert!(!validate_isbn(&bad), "{} should fail", bad);
    }

    #[test]
    fn test_valid_dois_survive_url_wrapping(suffix in "[a-z0-9]{1,12}") {
        let doi = format!("10.1234/{suffix}");
        let wrapped = format!("https://doi.org/{doi}");
        prop_assert_eq!(normalize_doi(&wrapped), doi.clone());
        prop_assert!(validate_doi(&wrapped));
    }
}
