//! Normalization, validation and registry verification for scholarly identifiers
//!
//! Each identifier type gets three operations:
//! - `normalize_*`: canonical string form, total over all inputs
//! - `validate_*`: format and checksum check, never touches the network
//! - `verify_*`: confirms the identifier with its registry (where one exists)
//!
//! DOIs, ISBNs and ISSNs additionally support `get_object_*`, which fetches
//! the registry's JSON record.
//!
//! ```no_run
//! use mdt_identifiers::{normalize_doi, validate_doi, verify_doi, MdtConfig, Verifier};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let doi = normalize_doi("https://doi.org/10.1109/5.771073");
//! assert!(validate_doi(&doi));
//!
//! let verifier = Verifier::new(&MdtConfig::load_standard()?)?;
//! let registered = verify_doi(&verifier, &doi).await;
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod config;
pub mod gateway;
pub mod registry;
pub mod schemes;
pub mod verifier;

pub use config::{join_url, ConfigError, Endpoints, MdtConfig};
pub use gateway::{HttpClient, HttpError};
pub use registry::{lookup, IdentifierScheme, SchemeKind, UnknownScheme};
pub use schemes::*;
pub use verifier::{Verifier, VerifyError};
