//! Ontology client configuration.
//!
//! Resolved once at startup. [`OntologyConfig::from_lookup`] takes a key lookup function so the
//! binaries can pass `std::env::var` while tests pass a map.

use crate::{ClientError, ClientResult};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_OBJECT_TYPE: &str = "BedData";
pub const DEFAULT_QUEUE_QUERY: &str = "smartPriorityQueue";
pub const DEFAULT_QUEUE_PARAMETER: &str = "bedDataSet";
pub const DEFAULT_EDIT_ACTION: &str = "edit-bed-data";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct OntologyConfig {
    hostname: Url,
    token: String,
    ontology: String,
    object_type: String,
    queue_query: String,
    queue_parameter: String,
    edit_action: String,
    page_size: u32,
    timeout: Duration,
}

// Omits the bearer token.
impl std::fmt::Debug for OntologyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyConfig")
            .field("hostname", &self.hostname.as_str())
            .field("ontology", &self.ontology)
            .field("object_type", &self.object_type)
            .field("queue_query", &self.queue_query)
            .field("edit_action", &self.edit_action)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OntologyConfig {
    /// Create a config with default object type, query, action, paging and timeout.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the hostname is not an absolute http(s) URL, or the
    /// token or ontology name is blank.
    pub fn new(hostname: &str, token: String, ontology: String) -> ClientResult<Self> {
        let hostname = Url::parse(hostname.trim())
            .map_err(|e| ClientError::Config(format!("invalid hostname '{hostname}': {e}")))?;
        if !matches!(hostname.scheme(), "http" | "https") {
            return Err(ClientError::Config(
                "hostname must use http or https".into(),
            ));
        }
        if token.trim().is_empty() {
            return Err(ClientError::Config("token cannot be empty".into()));
        }
        if ontology.trim().is_empty() {
            return Err(ClientError::Config("ontology cannot be empty".into()));
        }

        Ok(Self {
            hostname,
            token,
            ontology,
            object_type: DEFAULT_OBJECT_TYPE.into(),
            queue_query: DEFAULT_QUEUE_QUERY.into(),
            queue_parameter: DEFAULT_QUEUE_PARAMETER.into(),
            edit_action: DEFAULT_EDIT_ACTION.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build from `ONTOLOGY_*` keys.
    ///
    /// `ONTOLOGY_HOSTNAME`, `ONTOLOGY_API_NAME` and a token are required; the token is read
    /// from `ONTOLOGY_TOKEN`, then `FOUNDRY_TOKEN`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| ClientError::Config(format!("{key} must be set")))
        };

        let hostname = require("ONTOLOGY_HOSTNAME")?;
        let token = get("ONTOLOGY_TOKEN")
            .or_else(|| get("FOUNDRY_TOKEN"))
            .ok_or_else(|| ClientError::Config("ONTOLOGY_TOKEN must be set".into()))?;
        let ontology = require("ONTOLOGY_API_NAME")?;

        let mut cfg = Self::new(&hostname, token, ontology)?;
        if let Some(v) = get("ONTOLOGY_OBJECT_TYPE") {
            cfg.object_type = v;
        }
        if let Some(v) = get("ONTOLOGY_QUEUE_QUERY") {
            cfg.queue_query = v;
        }
        if let Some(v) = get("ONTOLOGY_QUEUE_PARAMETER") {
            cfg.queue_parameter = v;
        }
        if let Some(v) = get("ONTOLOGY_EDIT_ACTION") {
            cfg.edit_action = v;
        }
        if let Some(v) = get("ONTOLOGY_PAGE_SIZE") {
            cfg.page_size = parse_number("ONTOLOGY_PAGE_SIZE", &v)?;
            if cfg.page_size == 0 {
                return Err(ClientError::Config(
                    "ONTOLOGY_PAGE_SIZE must be positive".into(),
                ));
            }
        }
        if let Some(v) = get("ONTOLOGY_TIMEOUT_SECS") {
            cfg.timeout = Duration::from_secs(parse_number("ONTOLOGY_TIMEOUT_SECS", &v)?);
        }

        Ok(cfg)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn queue_parameter(&self) -> &str {
        &self.queue_parameter
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{hostname}/api/v2/ontologies/{ontology}/objects/{objectType}`
    pub fn objects_url(&self) -> Url {
        self.ontology_url(&["objects", self.object_type.as_str()])
    }

    /// `{hostname}/api/v2/ontologies/{ontology}/objects/{objectType}/{primaryKey}`
    pub fn object_url(&self, primary_key: &str) -> Url {
        self.ontology_url(&["objects", self.object_type.as_str(), primary_key])
    }

    /// `{hostname}/api/v2/ontologies/{ontology}/queries/{query}/execute`
    pub fn queue_query_url(&self) -> Url {
        self.ontology_url(&["queries", self.queue_query.as_str(), "execute"])
    }

    /// `{hostname}/api/v2/ontologies/{ontology}/actions/{action}/apply`
    pub fn edit_action_url(&self) -> Url {
        self.ontology_url(&["actions", self.edit_action.as_str(), "apply"])
    }

    fn ontology_url(&self, tail: &[&str]) -> Url {
        let mut url = self.hostname.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v2", "ontologies", self.ontology.as_str()])
                .extend(tail);
        }
        url
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> ClientResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{key} must be a number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("ONTOLOGY_HOSTNAME", "https://ward.example.com"),
        ("ONTOLOGY_TOKEN", "secret"),
        ("ONTOLOGY_API_NAME", "hospital-operations"),
    ];

    #[test]
    fn defaults_apply_when_only_required_keys_set() {
        let cfg = OntologyConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(cfg.object_type(), "BedData");
        assert_eq!(cfg.page_size(), 100);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
        assert_eq!(
            cfg.queue_query_url().as_str(),
            "https://ward.example.com/api/v2/ontologies/hospital-operations/queries/smartPriorityQueue/execute"
        );
    }

    #[test]
    fn token_falls_back_to_foundry_token() {
        let cfg = OntologyConfig::from_lookup(lookup(&[
            ("ONTOLOGY_HOSTNAME", "https://ward.example.com"),
            ("FOUNDRY_TOKEN", "legacy"),
            ("ONTOLOGY_API_NAME", "hospital-operations"),
        ]))
        .unwrap();
        assert_eq!(cfg.token(), "legacy");
    }

    #[test]
    fn missing_hostname_is_config_error() {
        let err = OntologyConfig::from_lookup(lookup(&REQUIRED[1..])).expect_err("should fail");
        assert!(err.to_string().contains("ONTOLOGY_HOSTNAME"));
    }

    #[test]
    fn overrides_are_applied() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("ONTOLOGY_OBJECT_TYPE", "Bed"),
            ("ONTOLOGY_EDIT_ACTION", "update-bed"),
            ("ONTOLOGY_PAGE_SIZE", "25"),
            ("ONTOLOGY_TIMEOUT_SECS", "5"),
        ]);
        let cfg = OntologyConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(cfg.page_size(), 25);
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
        assert_eq!(
            cfg.edit_action_url().as_str(),
            "https://ward.example.com/api/v2/ontologies/hospital-operations/actions/update-bed/apply"
        );
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("ONTOLOGY_PAGE_SIZE", "lots"));
        assert!(OntologyConfig::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn object_url_escapes_primary_key() {
        let cfg = OntologyConfig::new(
            "https://ward.example.com/",
            "secret".into(),
            "hospital-operations".into(),
        )
        .unwrap();
        assert_eq!(
            cfg.object_url("bed 1/a").as_str(),
            "https://ward.example.com/api/v2/ontologies/hospital-operations/objects/BedData/bed%201%2Fa"
        );
    }

    #[test]
    fn non_http_hostname_is_rejected() {
        assert!(OntologyConfig::new("ftp://ward", "t".into(), "o".into()).is_err());
    }

    #[test]
    fn debug_output_hides_token() {
        let cfg = OntologyConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(!format!("{cfg:?}").contains("secret"));
    }
}
