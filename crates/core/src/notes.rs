//! Status inference from bedside notes.

use crate::constants::{DISCHARGE_PHRASES, URGENCY_PHRASES};
use api_shared::BedStatus;

/// Classify a free-text note.
///
/// Discharge phrases are checked before urgency phrases: a note mentioning both is
/// `ReadyDischarge`.
pub fn classify_note(note: &str) -> BedStatus {
    if note.is_empty() {
        return BedStatus::Stable;
    }

    let lowered = note.to_lowercase();
    let mentions = |phrases: &[&str]| phrases.iter().any(|phrase| lowered.contains(phrase));

    if mentions(DISCHARGE_PHRASES) {
        BedStatus::ReadyDischarge
    } else if mentions(URGENCY_PHRASES) {
        BedStatus::NeedsAttention
    } else {
        BedStatus::Stable
    }
}
