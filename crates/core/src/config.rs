//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into services. Request
//! handling never reads environment variables.

use crate::{WardError, WardResult};
use std::str::FromStr;

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5001";

/// Which [`crate::OntologyGateway`] implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayKind {
    /// The ontology platform REST API.
    #[default]
    Ontology,
    /// Seeded in-memory ward, for demos and local development.
    Memory,
}

impl FromStr for GatewayKind {
    type Err = WardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ontology" | "foundry" => Ok(GatewayKind::Ontology),
            "memory" | "demo" => Ok(GatewayKind::Memory),
            other => Err(WardError::Config(format!(
                "unknown gateway kind '{other}' (expected 'ontology' or 'memory')"
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: String,
    gateway_kind: GatewayKind,
}

impl CoreConfig {
    pub fn new(rest_addr: String, gateway_kind: GatewayKind) -> WardResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(WardError::Config("rest_addr cannot be empty".into()));
        }

        Ok(Self {
            rest_addr,
            gateway_kind,
        })
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn gateway_kind(&self) -> GatewayKind {
        self.gateway_kind
    }
}

/// Parse the gateway kind from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`GatewayKind::Ontology`].
pub fn gateway_kind_from_env_value(value: Option<String>) -> WardResult<GatewayKind> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse::<GatewayKind>())
        .transpose()
        .map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_kind_defaults_to_ontology() {
        assert_eq!(
            gateway_kind_from_env_value(None).unwrap(),
            GatewayKind::Ontology
        );
        assert_eq!(
            gateway_kind_from_env_value(Some("  ".into())).unwrap(),
            GatewayKind::Ontology
        );
    }

    #[test]
    fn gateway_kind_parses_memory() {
        assert_eq!(
            gateway_kind_from_env_value(Some("Memory".into())).unwrap(),
            GatewayKind::Memory
        );
    }

    #[test]
    fn gateway_kind_rejects_unknown_values() {
        let err = gateway_kind_from_env_value(Some("sqlite".into())).expect_err("should fail");
        assert!(matches!(err, WardError::Config(_)));
    }

    #[test]
    fn core_config_rejects_blank_address() {
        assert!(CoreConfig::new(" ".into(), GatewayKind::Memory).is_err());
        let cfg = CoreConfig::new(DEFAULT_REST_ADDR.into(), GatewayKind::Memory).unwrap();
        assert_eq!(cfg.rest_addr(), "0.0.0.0:5001");
    }
}
