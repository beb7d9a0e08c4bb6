//! One module per identifier scheme
//!
//! Each module exposes `normalize_*` and `validate_*` free functions, a unit
//! struct implementing [`IdentifierScheme`](crate::IdentifierScheme), and
//! where a registry exists, async `verify_*` / `get_object_*` helpers.

pub mod arxiv;
pub mod doi;
pub mod ean;
pub mod email;
pub mod fundref;
pub mod isbn;
pub mod isni;
pub mod issn;
pub mod lcnaf;
pub mod orcid;
pub mod pmcid;
pub mod pmid;
pub mod ror;
pub mod snac;
pub mod tel;
pub mod uuid;
pub mod viaf;

pub use arxiv::*;
pub use doi::*;
pub use ean::*;
pub use email::*;
pub use fundref::*;
pub use isbn::*;
pub use isni::*;
pub use issn::*;
pub use lcnaf::*;
pub use orcid::*;
pub use pmcid::*;
pub use pmid::*;
pub use ror::*;
pub use snac::*;
pub use tel::*;
pub use self::uuid::*;
pub use viaf::*;

/// Keep only ASCII digits and `X`, uppercased.
pub(crate) fn digits_and_x(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .collect::<String>()
        .to_uppercase()
}

/// Split `s` at the given group lengths and join with `sep`.
///
/// Callers guarantee the lengths sum to `s.len()` and `s` is ASCII.
pub(crate) fn group(s: &str, lengths: &[usize], sep: &str) -> String {
    let mut parts = Vec::with_capacity(lengths.len());
    let mut start = 0;
    for len in lengths {
        let end = (start + len).min(s.len());
        parts.push(&s[start..end]);
        start = end;
    }
    parts.join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_x() {
        assert_eq!(digits_and_x(" 0-8044-2957-x "), "080442957X");
        assert_eq!(digits_and_x("ISSN 1058-6180"), "10586180");
    }

    #[test]
    fn test_group() {
        assert_eq!(group("0306406152", &[1, 3, 5, 1], "-"), "0-306-40615-2");
        assert_eq!(group("0000000120960218", &[4, 4, 4, 4], " "), "0000 0001 2096 0218");
    }
}
