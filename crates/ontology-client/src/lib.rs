//! # Ontology Client
//!
//! HTTP implementation of [`ward_core::OntologyGateway`] against the ontology platform's v2 REST
//! API.
//!
//! Handles:
//! - bearer-token authentication and request timeouts
//! - paging through bed objects
//! - executing the priority queue query
//! - applying the bed edit action in validate-and-execute mode

pub mod client;
pub mod config;
pub mod error;
mod wire;

pub use client::OntologyClient;
pub use config::OntologyConfig;
pub use error::{ClientError, ClientResult};

use std::sync::Arc;
use ward_core::{GatewayKind, InMemoryGateway, OntologyGateway};

/// Build the gateway selected by `kind`.
///
/// `lookup` resolves configuration keys (normally `std::env::var`); it is only consulted for
/// [`GatewayKind::Ontology`].
///
/// # Errors
/// Returns `ClientError::Config` if the ontology settings are missing or invalid, or
/// `ClientError::ClientBuild` if the HTTP client cannot be created.
pub fn build_gateway(
    kind: GatewayKind,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientResult<Arc<dyn OntologyGateway>> {
    match kind {
        GatewayKind::Ontology => {
            let cfg = OntologyConfig::from_lookup(lookup)?;
            tracing::info!("using ontology gateway: {:?}", cfg);
            Ok(Arc::new(OntologyClient::new(cfg)?))
        }
        GatewayKind::Memory => {
            tracing::info!("using seeded in-memory gateway");
            Ok(Arc::new(InMemoryGateway::seeded()))
        }
    }
}
