//! The ontology gateway seam.
//!
//! Everything the ward board knows about beds comes through [`OntologyGateway`]. The platform
//! owns persistence, priority computation and edit validation; this crate only reads snapshots
//! and submits edits.

use crate::constants::{UNKNOWN_PATIENT, UNKNOWN_PROCEDURE};
use crate::WardResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ward_types::BedId;

/// Read-only snapshot of a bed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRecord {
    pub bed_id: BedId,
    pub patient_name: String,
    pub procedure_type: String,
    pub current_note: String,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Bed object properties exactly as the platform returns them.
///
/// Any property may be missing or null. [`BedProperties::into_record`] is the only place the
/// defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedProperties {
    #[serde(default)]
    pub bed_data: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub procedure_type: Option<String>,
    #[serde(default)]
    pub current_note: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl BedProperties {
    /// Resolve into a [`BedRecord`].
    ///
    /// Returns `None` when the primary key is missing or blank; such objects cannot be
    /// addressed by any route and are skipped.
    pub fn into_record(self) -> Option<BedRecord> {
        let bed_id = BedId::parse(self.bed_data?).ok()?;
        Some(BedRecord {
            bed_id,
            patient_name: self
                .patient_name
                .unwrap_or_else(|| UNKNOWN_PATIENT.to_string()),
            procedure_type: self
                .procedure_type
                .unwrap_or_else(|| UNKNOWN_PROCEDURE.to_string()),
            current_note: self.current_note.unwrap_or_default(),
            last_updated: self.last_updated,
        })
    }
}

/// Edit action payload for a single bed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedEdit {
    pub bed_id: BedId,
    pub patient_name: String,
    pub procedure_type: String,
    pub current_note: String,
    pub last_updated: DateTime<Utc>,
}

/// Validation verdict the platform attaches to an applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid,
    /// Any verdict this crate does not know about; treated as a rejection.
    Other(String),
}

impl ValidationResult {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "VALID" => ValidationResult::Valid,
            "INVALID" => ValidationResult::Invalid,
            other => ValidationResult::Other(other.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationResult::Valid => write!(f, "VALID"),
            ValidationResult::Invalid => write!(f, "INVALID"),
            ValidationResult::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Access to bed objects, the priority queue query and the bed edit action.
#[async_trait::async_trait]
pub trait OntologyGateway: Send + Sync + 'static {
    /// All bed objects, in the platform's iteration order.
    async fn list_beds(&self) -> WardResult<Vec<BedRecord>>;

    /// Raw result of the priority queue query over all beds.
    ///
    /// The shape is not guaranteed; see [`crate::queue::resolve_queue`].
    async fn queue_order(&self) -> WardResult<serde_json::Value>;

    /// Point lookup. `Ok(None)` means the bed does not exist.
    async fn get_bed(&self, bed_id: &BedId) -> WardResult<Option<BedRecord>>;

    /// Validate and execute an edit in one round trip.
    async fn edit_bed(&self, edit: BedEdit) -> WardResult<ValidationResult>;
}
