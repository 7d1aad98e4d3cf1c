use clap::{Parser, Subcommand};
use serde_json::json;
use ward_core::{
    config::gateway_kind_from_env_value, BedId, GatewayKind, WardError, WardService,
};

#[derive(Parser)]
#[command(name = "wardboard")]
#[command(about = "Wardboard bed status CLI")]
struct Cli {
    /// Gateway to use: `ontology` or `memory` (defaults to WARD_GATEWAY, then `ontology`)
    #[arg(long, global = true)]
    gateway: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List beds with status, band and queue rank
    Beds,
    /// Show the priority queue and the starting doctor position
    Queue,
    /// Equipment mentioned in one bed's note
    Equipment {
        /// Bed identifier
        bed_id: String,
    },
    /// Equipment mention counts across all beds
    Summary,
    /// Replace a bed's note
    Note {
        /// Bed identifier
        bed_id: String,
        /// New note content
        content: String,
    },
    /// Mark the priority patient in a bed as seen
    Done {
        /// Bed identifier
        bed_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let kind: GatewayKind =
        gateway_kind_from_env_value(cli.gateway.or_else(|| std::env::var("WARD_GATEWAY").ok()))?;
    let gateway = ontology_client::build_gateway(kind, |key| std::env::var(key).ok())?;
    let service = WardService::start(gateway).await;

    let output = match cli.command {
        Commands::Beds => serde_json::to_value(service.bed_views().await?)?,
        Commands::Queue => json!({
            "queue": service.queue().await.into_vec(),
            "doctor_position": service.doctor_position().bed_id(),
        }),
        Commands::Equipment { bed_id } => {
            serde_json::to_value(service.equipment_for_bed(&bed_id).await?)?
        }
        Commands::Summary => serde_json::to_value(service.equipment_summary().await?)?,
        Commands::Note { bed_id, content } => {
            let bed_id = BedId::parse(bed_id).map_err(WardError::from)?;
            service.update_note(&bed_id, &content).await?;
            json!({"status": "success", "message": "Note updated successfully"})
        }
        Commands::Done { bed_id } => {
            let bed_id = BedId::parse(bed_id).map_err(WardError::from)?;
            service.mark_priority_done(&bed_id).await?;
            json!({"status": "success", "message": "Patient marked as done"})
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
