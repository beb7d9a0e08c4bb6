//! Scheme registry
//!
//! Maps identifier type names to their implementations. Every scheme is a
//! unit struct implementing [`IdentifierScheme`]; verification and object
//! retrieval are optional capabilities expressed by the trait's default
//! methods returning nothing.

use crate::config::Endpoints;
use crate::schemes::{
    ArXiv, Doi, Ean, Email, FundRef, Isbn, Isni, Issn, Lcnaf, Orcid, Pmcid, Pmid, Ror, Snac, Tel,
    Uuid, Viaf,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier families handled by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// arXiv preprint identifier
    ArXiv,
    /// Digital Object Identifier
    Doi,
    /// International Article Number
    Ean,
    /// Email address
    Email,
    /// Crossref Funder Registry identifier
    FundRef,
    /// International Standard Book Number
    Isbn,
    /// International Standard Name Identifier
    Isni,
    /// International Standard Serial Number
    Issn,
    /// Library of Congress Name Authority File
    Lcnaf,
    /// Open Researcher and Contributor ID
    Orcid,
    /// PubMed Central identifier
    Pmcid,
    /// PubMed identifier
    Pmid,
    /// Research Organization Registry
    Ror,
    /// Social Networks and Archival Context
    Snac,
    /// Telephone number
    Tel,
    /// RFC 4122 UUID
    Uuid,
    /// Virtual International Authority File
    Viaf,
}

impl SchemeKind {
    /// Get all scheme kinds
    pub fn all() -> &'static [SchemeKind] {
        &[
            SchemeKind::ArXiv,
            SchemeKind::Doi,
            SchemeKind::Ean,
            SchemeKind::Email,
            SchemeKind::FundRef,
            SchemeKind::Isbn,
            SchemeKind::Isni,
            SchemeKind::Issn,
            SchemeKind::Lcnaf,
            SchemeKind::Orcid,
            SchemeKind::Pmcid,
            SchemeKind::Pmid,
            SchemeKind::Ror,
            SchemeKind::Snac,
            SchemeKind::Tel,
            SchemeKind::Uuid,
            SchemeKind::Viaf,
        ]
    }

    /// Lowercase name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::ArXiv => "arxiv",
            SchemeKind::Doi => "doi",
            SchemeKind::Ean => "ean",
            SchemeKind::Email => "email",
            SchemeKind::FundRef => "fundref",
            SchemeKind::Isbn => "isbn",
            SchemeKind::Isni => "isni",
            SchemeKind::Issn => "issn",
            SchemeKind::Lcnaf => "lcnaf",
            SchemeKind::Orcid => "orcid",
            SchemeKind::Pmcid => "pmcid",
            SchemeKind::Pmid => "pmid",
            SchemeKind::Ror => "ror",
            SchemeKind::Snac => "snac",
            SchemeKind::Tel => "tel",
            SchemeKind::Uuid => "uuid",
            SchemeKind::Viaf => "viaf",
        }
    }

    /// Get the display name for a scheme
    pub fn display_name(self) -> &'static str {
        match self {
            SchemeKind::ArXiv => "arXiv",
            SchemeKind::Doi => "DOI",
            SchemeKind::Ean => "EAN",
            SchemeKind::Email => "Email",
            SchemeKind::FundRef => "FundRef",
            SchemeKind::Isbn => "ISBN",
            SchemeKind::Isni => "ISNI",
            SchemeKind::Issn => "ISSN",
            SchemeKind::Lcnaf => "LCNAF",
            SchemeKind::Orcid => "ORCID",
            SchemeKind::Pmcid => "PMCID",
            SchemeKind::Pmid => "PMID",
            SchemeKind::Ror => "ROR",
            SchemeKind::Snac => "SNAC",
            SchemeKind::Tel => "Telephone",
            SchemeKind::Uuid => "UUID",
            SchemeKind::Viaf => "VIAF",
        }
    }

    /// The implementation for this kind
    pub fn scheme(self) -> &'static dyn IdentifierScheme {
        match self {
            SchemeKind::ArXiv => &ArXiv,
            SchemeKind::Doi => &Doi,
            SchemeKind::Ean => &Ean,
            SchemeKind::Email => &Email,
            SchemeKind::FundRef => &FundRef,
            SchemeKind::Isbn => &Isbn,
            SchemeKind::Isni => &Isni,
            SchemeKind::Issn => &Issn,
            SchemeKind::Lcnaf => &Lcnaf,
            SchemeKind::Orcid => &Orcid,
            SchemeKind::Pmcid => &Pmcid,
            SchemeKind::Pmid => &Pmid,
            SchemeKind::Ror => &Ror,
            SchemeKind::Snac => &Snac,
            SchemeKind::Tel => &Tel,
            SchemeKind::Uuid => &Uuid,
            SchemeKind::Viaf => &Viaf,
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a type name matches no scheme
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} type is not supported")]
pub struct UnknownScheme(pub String);

impl FromStr for SchemeKind {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = match wanted.as_str() {
            // aliases accepted by the command line tool
            "fundrefid" => "fundref",
            "telephone" | "phone" => "tel",
            other => other,
        };
        SchemeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}

/// Look up a scheme implementation by case-insensitive name
pub fn lookup(name: &str) -> Option<&'static dyn IdentifierScheme> {
    name.parse::<SchemeKind>().ok().map(SchemeKind::scheme)
}

/// Normalize / validate / verify contract shared by every scheme.
///
/// `normalize` and `validate` are pure and never touch the network.
/// The target methods only build URLs; the [`Verifier`](crate::Verifier)
/// performs the request.
pub trait IdentifierScheme: Send + Sync {
    fn kind(&self) -> SchemeKind;

    /// Canonical form; total over all inputs
    fn normalize(&self, raw: &str) -> String;

    /// Format and checksum check; normalizes internally
    fn validate(&self, raw: &str) -> bool;

    /// URL whose 2xx response confirms the identifier exists.
    ///
    /// `None` means the scheme has no registry to verify against.
    fn verify_target(&self, _normalized: &str, _endpoints: &Endpoints) -> Option<String> {
        None
    }

    /// URLs to try, in order, when retrieving the identifier's JSON record.
    ///
    /// Empty means object retrieval is unsupported.
    fn object_targets(&self, _normalized: &str, _endpoints: &Endpoints) -> Vec<String> {
        Vec::new()
    }

    fn supports_verify(&self) -> bool {
        self.verify_target("", &Endpoints::default()).is_some()
    }

    fn supports_object(&self) -> bool {
        !self.object_targets("", &Endpoints::default()).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("DOI".parse::<SchemeKind>().unwrap(), SchemeKind::Doi);
        assert_eq!("ArXiv".parse::<SchemeKind>().unwrap(), SchemeKind::ArXiv);
        assert_eq!(" orcid ".parse::<SchemeKind>().unwrap(), SchemeKind::Orcid);
        assert_eq!("FundRefID".parse::<SchemeKind>().unwrap(), SchemeKind::FundRef);
        assert_eq!("telephone".parse::<SchemeKind>().unwrap(), SchemeKind::Tel);
    }

    #[test]
    fn test_unknown_scheme() {
        let err = "handle".parse::<SchemeKind>().unwrap_err();
        assert_eq!(err.to_string(), "handle type is not supported");
        assert!(lookup("handle").is_none());
    }

    #[test]
    fn test_every_kind_round_trips_through_its_scheme() {
        for kind in SchemeKind::all() {
            assert_eq!(kind.scheme().kind(), *kind);
            assert_eq!(kind.name().parse::<SchemeKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_verify_capability() {
        let unverifiable = [
            SchemeKind::Ean,
            SchemeKind::Email,
            SchemeKind::Tel,
            SchemeKind::Uuid,
        ];
        for kind in SchemeKind::all() {
            assert_eq!(
                kind.scheme().supports_verify(),
                !unverifiable.contains(kind),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_object_capability() {
        let with_objects: Vec<SchemeKind> = SchemeKind::all()
            .iter()
            .copied()
            .filter(|k| k.scheme().supports_object())
            .collect();
        assert_eq!(
            with_objects,
            vec![SchemeKind::Doi, SchemeKind::Isbn, SchemeKind::Issn]
        );
    }

    #[test]
    fn test_lookup_dispatches() {
        let scheme = lookup("ror").unwrap();
        assert_eq!(scheme.normalize("05dxps055"), "https://ror.org/05dxps055");
        assert!(scheme.validate("05dxps055"));
    }
}
