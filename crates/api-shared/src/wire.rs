//! JSON request and response bodies.
//!
//! Field names are part of the public HTTP contract consumed by the ward dashboard, so they are
//! kept in `snake_case` exactly as serialized.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Presentation of one bed, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BedView {
    pub bed_id: String,
    pub patient_name: String,
    pub procedure_type: String,
    pub current_note: String,
    /// RFC 1123 style, e.g. `Wed, 02 Oct 2024 13:45:00 GMT`; empty when never updated.
    pub last_updated: String,
    pub status: BedStatus,
    /// CSS classes for the priority band.
    pub priority_color: String,
    /// 1-based rank in the queue, or 999 when the bed is not queued.
    pub queue_position: u32,
}

/// Coarse patient status inferred from the bedside note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BedStatus {
    ReadyDischarge,
    NeedsAttention,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueueRes {
    pub queue: Vec<String>,
}

/// Body of `POST /api/voice-note`.
///
/// Both fields are optional on the wire; a missing field is reported as a failed update rather
/// than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VoiceNoteReq {
    #[serde(default)]
    pub bed_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `POST /api/priority-patient-done`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatientDoneReq {
    #[serde(default)]
    pub bed_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

/// `{"status", "message"}` envelope returned by the write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OutcomeRes {
    pub status: OutcomeStatus,
    pub message: String,
}

impl OutcomeRes {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
        }
    }
}
