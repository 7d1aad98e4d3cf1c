//! In-memory ontology gateway.
//!
//! Backs the `memory` gateway mode (a seeded demo ward that needs no platform credentials) and
//! the handler tests. Edits are accepted unless the gateway was built with
//! [`InMemoryGateway::rejecting_edits`], and every trait call is counted.

use crate::gateway::{BedEdit, BedRecord, OntologyGateway, ValidationResult};
use crate::{WardError, WardResult};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use ward_types::BedId;

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    beds: Mutex<Vec<BedRecord>>,
    queue: Mutex<Value>,
    reject_edits: AtomicBool,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryGateway {
    pub fn new(beds: Vec<BedRecord>, queue: Value) -> Self {
        Self {
            beds: Mutex::new(beds),
            queue: Mutex::new(queue),
            ..Default::default()
        }
    }

    /// Six occupied beds with a textual queue, matching what the platform serves a fresh ward.
    pub fn seeded() -> Self {
        let updated = Utc.with_ymd_and_hms(2024, 10, 2, 13, 45, 0).single();
        let seed = [
            ("bed_1", "Maria Lopez", "Hip Replacement", "Severe pain, requesting pain medication"),
            ("bed_2", "James Chen", "Appendectomy", "Needs oxygen and IV pump check"),
            ("bed_3", "Aisha Khan", "Knee Arthroscopy", "Family here, ready for discharge"),
            ("bed_4", "Tom Becker", "Cholecystectomy", "Resting, bandages changed"),
            ("bed_5", "Lena Novak", "Hernia Repair", "Walker requested for first walk"),
            ("bed_6", "Omar Haddad", "Tonsillectomy", ""),
        ];

        let beds = seed
            .into_iter()
            .filter_map(|(id, name, procedure, note)| {
                Some(BedRecord {
                    bed_id: BedId::parse(id).ok()?,
                    patient_name: name.to_string(),
                    procedure_type: procedure.to_string(),
                    current_note: note.to_string(),
                    last_updated: updated,
                })
            })
            .collect();

        Self::new(
            beds,
            Value::String(r#"["bed_1","bed_2","bed_5","bed_4","bed_3","bed_6"]"#.into()),
        )
    }

    /// Answer every edit with an `INVALID` verdict.
    pub fn rejecting_edits(self) -> Self {
        self.reject_edits.store(true, Ordering::SeqCst);
        self
    }

    /// Fail every call with [`WardError::Unavailable`].
    pub fn unavailable(self) -> Self {
        self.unavailable.store(true, Ordering::SeqCst);
        self
    }

    /// Number of trait calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bed(&self, bed_id: &str) -> Option<BedRecord> {
        self.beds
            .lock()
            .ok()?
            .iter()
            .find(|bed| bed.bed_id.as_str() == bed_id)
            .cloned()
    }

    fn enter(&self) -> WardResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(WardError::Unavailable("in-memory gateway offline".into()));
        }
        Ok(())
    }

    fn lock_beds(&self) -> WardResult<std::sync::MutexGuard<'_, Vec<BedRecord>>> {
        self.beds
            .lock()
            .map_err(|_| WardError::Unavailable("bed store lock poisoned".into()))
    }
}

#[async_trait::async_trait]
impl OntologyGateway for InMemoryGateway {
    async fn list_beds(&self) -> WardResult<Vec<BedRecord>> {
        self.enter()?;
        Ok(self.lock_beds()?.clone())
    }

    async fn queue_order(&self) -> WardResult<Value> {
        self.enter()?;
        self.queue
            .lock()
            .map(|queue| queue.clone())
            .map_err(|_| WardError::Unavailable("queue lock poisoned".into()))
    }

    async fn get_bed(&self, bed_id: &BedId) -> WardResult<Option<BedRecord>> {
        self.enter()?;
        Ok(self.lock_beds()?.iter().find(|bed| &bed.bed_id == bed_id).cloned())
    }

    async fn edit_bed(&self, edit: BedEdit) -> WardResult<ValidationResult> {
        self.enter()?;
        if self.reject_edits.load(Ordering::SeqCst) {
            return Ok(ValidationResult::Invalid);
        }

        let mut beds = self.lock_beds()?;
        let Some(bed) = beds.iter_mut().find(|bed| bed.bed_id == edit.bed_id) else {
            return Ok(ValidationResult::Invalid);
        };
        bed.patient_name = edit.patient_name;
        bed.procedure_type = edit.procedure_type;
        bed.current_note = edit.current_note;
        bed.last_updated = Some(edit.last_updated);
        Ok(ValidationResult::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::resolve_queue;

    #[tokio::test]
    async fn seeded_ward_has_six_queued_beds() {
        let gateway = InMemoryGateway::seeded();
        let beds = gateway.list_beds().await.unwrap();
        assert_eq!(beds.len(), 6);

        let queue = resolve_queue(&gateway.queue_order().await.unwrap());
        assert_eq!(queue.head(), Some("bed_1"));
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn valid_edit_is_applied() {
        let gateway = InMemoryGateway::seeded();
        let edit = BedEdit {
            bed_id: BedId::parse("bed_4").unwrap(),
            patient_name: "Tom Becker".into(),
            procedure_type: "Cholecystectomy".into(),
            current_note: "going home".into(),
            last_updated: Utc::now(),
        };

        let verdict = gateway.edit_bed(edit).await.unwrap();
        assert!(verdict.is_valid());
        assert_eq!(gateway.bed("bed_4").unwrap().current_note, "going home");
    }

    #[tokio::test]
    async fn offline_gateway_reports_unavailable() {
        let gateway = InMemoryGateway::seeded().unavailable();
        let err = gateway.list_beds().await.expect_err("should fail");
        assert!(matches!(err, WardError::Unavailable(_)));
    }
}
