//! Configuration for registry lookups
//!
//! Holds the base URL of every registry the verifiers talk to plus the
//! User-Agent sent with each request. Defaults point at the public
//! production services.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MDT_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdtConfig {
    /// User-Agent header for outbound requests
    pub user_agent: String,
    /// Registry base URLs
    pub endpoints: Endpoints,
}

impl Default for MdtConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("mdt/{}", env!("CARGO_PKG_VERSION")),
            endpoints: Endpoints::default(),
        }
    }
}

/// Base URLs for each registry, without trailing path.
///
/// Scheme modules append their own path, so `crossref` serves works,
/// journals and funders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// arXiv export API (`/api/query`)
    pub arxiv: String,
    /// doi.org handle API (`/api/handles/`)
    pub doi: String,
    /// Crossref REST API (`/works`, `/journals`, `/funders`)
    pub crossref: String,
    /// DataCite REST API (`/dois`)
    pub datacite: String,
    /// Open Library (`/isbn/{isbn}.json`)
    pub open_library: String,
    /// ISNI resolver (`/isni/`)
    pub isni: String,
    /// Library of Congress linked data (`/authorities/names/`)
    pub loc: String,
    /// ORCID public site
    pub orcid: String,
    /// PubMed
    pub pubmed: String,
    /// NCBI host serving PubMed Central (`/pmc/articles/`)
    pub pmc: String,
    /// ROR
    pub ror: String,
    /// SNAC Cooperative (`/view/`)
    pub snac: String,
    /// VIAF (`/viaf/`)
    pub viaf: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            arxiv: "https://export.arxiv.org".to_string(),
            doi: "https://doi.org".to_string(),
            crossref: "https://api.crossref.org".to_string(),
            datacite: "https://api.datacite.org".to_string(),
            open_library: "https://openlibrary.org".to_string(),
            isni: "https://isni.org".to_string(),
            loc: "https://id.loc.gov".to_string(),
            orcid: "https://orcid.org".to_string(),
            pubmed: "https://pubmed.ncbi.nlm.nih.gov".to_string(),
            pmc: "https://www.ncbi.nlm.nih.gov".to_string(),
            ror: "https://ror.org".to_string(),
            snac: "https://snaccooperative.org".to_string(),
            viaf: "https://viaf.org".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every registry at the same host.
    pub fn single_host(base: &str) -> Self {
        let base = base.to_string();
        Self {
            arxiv: base.clone(),
            doi: base.clone(),
            crossref: base.clone(),
            datacite: base.clone(),
            open_library: base.clone(),
            isni: base.clone(),
            loc: base.clone(),
            orcid: base.clone(),
            pubmed: base.clone(),
            pmc: base.clone(),
            ror: base.clone(),
            snac: base.clone(),
            viaf: base,
        }
    }

    fn named(&self) -> [(&'static str, &str); 13] {
        [
            ("arxiv", self.arxiv.as_str()),
            ("doi", self.doi.as_str()),
            ("crossref", self.crossref.as_str()),
            ("datacite", self.datacite.as_str()),
            ("open_library", self.open_library.as_str()),
            ("isni", self.isni.as_str()),
            ("loc", self.loc.as_str()),
            ("orcid", self.orcid.as_str()),
            ("pubmed", self.pubmed.as_str()),
            ("pmc", self.pmc.as_str()),
            ("ror", self.ror.as_str()),
            ("snac", self.snac.as_str()),
            ("viaf", self.viaf.as_str()),
        ]
    }
}

/// Join a base URL and a path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl MdtConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from standard locations
    ///
    /// Checks `$MDT_CONFIG` first, then `~/.mdt/config.toml`. Falls back to
    /// defaults when neither exists.
    pub fn load_standard() -> Result<Self, ConfigError> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&explicit));
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `~/.mdt/config.toml`, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".mdt").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField("user_agent".to_string()));
        }

        for (name, value) in self.endpoints.named() {
            let parsed = Url::parse(value).map_err(|_| ConfigError::InvalidEndpoint {
                name: name.to_string(),
                value: value.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
                return Err(ConfigError::InvalidEndpoint {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration load/validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Endpoint {name} is not an absolute http(s) URL: {value}")]
    InvalidEndpoint { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MdtConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.user_agent.starts_with("mdt/"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MdtConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = MdtConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MdtConfig::from_toml(
            r#"
            [endpoints]
            crossref = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoints.crossref, "http://localhost:9000");
        assert_eq!(config.endpoints.orcid, "https://orcid.org");
        assert_eq!(config.user_agent, MdtConfig::default().user_agent);
    }

    #[test]
    fn test_json_overrides_user_agent() {
        let config = MdtConfig::from_json(r#"{"user_agent": "library-bot/2.0"}"#).unwrap();
        assert_eq!(config.user_agent, "library-bot/2.0");
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = MdtConfig::default();
        config.endpoints.viaf = "viaf.org".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint { ref name, .. }) if name == "viaf"
        ));

        config.endpoints.viaf = "ftp://viaf.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = MdtConfig::default();
        config.user_agent = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://orcid.org/", "/0000"), "https://orcid.org/0000");
        assert_eq!(join_url("https://orcid.org", "0000"), "https://orcid.org/0000");
    }

    #[test]
    fn test_single_host() {
        let endpoints = Endpoints::single_host("http://127.0.0.1:8080");
        assert!(endpoints
            .named()
            .iter()
            .all(|(_, v)| *v == "http://127.0.0.1:8080"));
    }
}
