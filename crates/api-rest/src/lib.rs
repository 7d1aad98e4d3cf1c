//! # API REST
//!
//! REST API for the Wardboard bed status service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! All gateway access goes through [`ward_core::WardService`].

#![warn(rust_2018_idioms)]

use api_shared::{
    BedStatus, BedView, HealthRes, HealthService, OutcomeRes, OutcomeStatus, PatientDoneReq,
    QueueRes, VoiceNoteReq,
};
use axum::{
    extract::{rejection::JsonRejection, Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use ward_core::{BedId, WardError, WardService};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WardService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_beds,
        get_queue,
        voice_note,
        bed_equipment,
        equipment_summary,
        priority_patient_done,
    ),
    components(schemas(
        HealthRes,
        BedView,
        BedStatus,
        QueueRes,
        VoiceNoteReq,
        PatientDoneReq,
        OutcomeRes,
        OutcomeStatus,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with permissive CORS and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/beds", get(list_beds))
        .route("/api/queue", get(get_queue))
        .route("/api/voice-note", post(voice_note))
        .route("/api/equipment/:bed_id", get(bed_equipment))
        .route("/api/equipment-summary", get(equipment_summary))
        .route("/api/priority-patient-done", post(priority_patient_done))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/beds",
    responses(
        (status = 200, description = "All beds with status, band and queue rank", body = [BedView]),
        (status = 500, description = "Internal server error")
    )
)]
/// List every bed projected against the current priority queue
///
/// # Errors
/// Returns `500 Internal Server Error` if the bed listing fails. A failing queue query does
/// not fail the request; the default queue is used instead.
#[axum::debug_handler]
async fn list_beds(
    State(state): State<AppState>,
) -> Result<Json<Vec<BedView>>, (StatusCode, &'static str)> {
    match state.service.bed_views().await {
        Ok(views) => Ok(Json(views)),
        Err(e) => {
            tracing::error!("List beds error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/queue",
    responses(
        (status = 200, description = "Bed identifiers in priority order", body = QueueRes)
    )
)]
#[axum::debug_handler]
async fn get_queue(State(state): State<AppState>) -> Json<QueueRes> {
    let queue = state.service.queue().await;
    Json(QueueRes {
        queue: queue.into_vec(),
    })
}

#[utoipa::path(
    post,
    path = "/api/voice-note",
    request_body = VoiceNoteReq,
    responses(
        (status = 200, description = "Note updated", body = OutcomeRes),
        (status = 500, description = "Note could not be updated", body = OutcomeRes)
    )
)]
/// Replace a bed's note with transcribed voice content
///
/// A malformed body, a missing bed, a missing field, or a rejected edit all report the same
/// failure; the detail is only logged.
#[axum::debug_handler]
async fn voice_note(
    State(state): State<AppState>,
    body: Result<Json<VoiceNoteReq>, JsonRejection>,
) -> (StatusCode, Json<OutcomeRes>) {
    let failure = || {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(OutcomeRes::error("Failed to update note")),
        )
    };

    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("voice note body rejected: {}", rejection.body_text());
            return failure();
        }
    };
    let (Some(bed_id), Some(content)) = (req.bed_id, req.content) else {
        tracing::warn!("voice note missing bed_id or content");
        return failure();
    };
    let Ok(bed_id) = BedId::parse(&bed_id) else {
        tracing::warn!("voice note with blank bed_id");
        return failure();
    };

    match state.service.update_note(&bed_id, &content).await {
        Ok(()) => (
            StatusCode::OK,
            Json(OutcomeRes::success("Note updated successfully")),
        ),
        Err(e) => {
            log_edit_failure("Voice note", &e);
            failure()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/equipment/{bed_id}",
    params(("bed_id" = String, Path, description = "Bed identifier")),
    responses(
        (status = 200, description = "Equipment mentioned in the bed's note; empty if the bed is unknown", body = [String]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn bed_equipment(
    State(state): State<AppState>,
    AxumPath(bed_id): AxumPath<String>,
) -> Result<Json<Vec<&'static str>>, (StatusCode, &'static str)> {
    match state.service.equipment_for_bed(&bed_id).await {
        Ok(equipment) => Ok(Json(equipment)),
        Err(e) => {
            tracing::error!("Equipment lookup error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/equipment-summary",
    responses(
        (status = 200, description = "Number of beds mentioning each equipment item", body = BTreeMap<String, u32>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn equipment_summary(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, u32>>, (StatusCode, &'static str)> {
    match state.service.equipment_summary().await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Equipment summary error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/priority-patient-done",
    request_body = PatientDoneReq,
    responses(
        (status = 200, description = "Patient marked as done", body = OutcomeRes),
        (status = 400, description = "Missing or malformed bed identifier", body = OutcomeRes),
        (status = 500, description = "Patient could not be updated", body = OutcomeRes)
    )
)]
/// Mark the priority patient as seen
///
/// Writes the fixed resolution note to the bed. Requests without a usable bed identifier,
/// including bodies that do not decode, are rejected before the gateway is contacted.
#[axum::debug_handler]
async fn priority_patient_done(
    State(state): State<AppState>,
    body: Result<Json<PatientDoneReq>, JsonRejection>,
) -> (StatusCode, Json<OutcomeRes>) {
    let bed_id = match body {
        Ok(Json(req)) => req.bed_id.map(BedId::parse),
        Err(rejection) => {
            tracing::warn!("priority done body rejected: {}", rejection.body_text());
            None
        }
    };
    let Some(Ok(bed_id)) = bed_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(OutcomeRes::error("Invalid bed ID")),
        );
    };

    match state.service.mark_priority_done(&bed_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(OutcomeRes::success("Patient marked as done")),
        ),
        Err(e) => {
            log_edit_failure("Priority done", &e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(OutcomeRes::error("Failed to update patient status")),
            )
        }
    }
}

fn log_edit_failure(operation: &str, err: &WardError) {
    match err {
        WardError::NotFound(_) | WardError::ValidationFailed(_) => {
            tracing::warn!("{} rejected: {}", operation, err)
        }
        _ => tracing::error!("{} error: {:?}", operation, err),
    }
}
