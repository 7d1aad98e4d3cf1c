use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use ward_core::{
    CoreConfig, WardService,
    config::{DEFAULT_REST_ADDR, gateway_kind_from_env_value},
};

/// Main entry point for the Wardboard service
///
/// Resolves configuration from the environment (and `.env`), connects the selected ontology
/// gateway, records the starting doctor position and serves the REST API.
///
/// # Environment Variables
/// - `WARD_REST_ADDR`: REST server address (default: "0.0.0.0:5001")
/// - `WARD_GATEWAY`: `ontology` (default) or `memory` for a seeded demo ward
/// - `ONTOLOGY_HOSTNAME`, `ONTOLOGY_API_NAME`, `ONTOLOGY_TOKEN` (or `FOUNDRY_TOKEN`): platform
///   connection, required for the `ontology` gateway
/// - `ONTOLOGY_OBJECT_TYPE`, `ONTOLOGY_QUEUE_QUERY`, `ONTOLOGY_QUEUE_PARAMETER`,
///   `ONTOLOGY_EDIT_ACTION`, `ONTOLOGY_PAGE_SIZE`, `ONTOLOGY_TIMEOUT_SECS`: optional overrides
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in default_log_directives() {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gateway_kind = gateway_kind_from_env_value(std::env::var("WARD_GATEWAY").ok())?;
    let rest_addr = std::env::var("WARD_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let cfg = CoreConfig::new(rest_addr, gateway_kind)?;

    let gateway = ontology_client::build_gateway(cfg.gateway_kind(), |key| {
        std::env::var(key).ok()
    })?;
    let service = WardService::start(gateway).await;

    let app = router(AppState {
        service: Arc::new(service),
    });

    tracing::info!("++ Starting Wardboard REST on {}", cfg.rest_addr());
    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `info` for this binary and the workspace crates, unless `RUST_LOG` says otherwise.
fn default_log_directives() -> Vec<String> {
    [module_path!(), "api_rest", "ward_core", "ontology_client"]
        .iter()
        .map(|target| format!("{target}=info"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_name_the_runner_target() {
        let directives = default_log_directives();
        assert_eq!(directives[0], "wardboard_run=info");
        for directive in directives {
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
    }
}
