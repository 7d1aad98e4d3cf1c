//! Ward service.
//!
//! Orchestrates the gateway calls behind every route: bed projections, the resolved queue,
//! equipment lookups and note edits. Handlers hold an `Arc<WardService>` and never talk to the
//! gateway directly.

use crate::constants::RESOLVED_NOTE;
use crate::equipment::{extract_equipment, tally_equipment};
use crate::gateway::{BedEdit, OntologyGateway};
use crate::projection::project_bed;
use crate::queue::{resolve_queue, QueueOrder};
use crate::{WardError, WardResult};
use api_shared::BedView;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use ward_types::BedId;

/// Bed the doctor was at when the service started.
///
/// Captured once from the head of the queue and never updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorPosition(Option<String>);

impl DoctorPosition {
    pub fn from_queue(queue: &QueueOrder) -> Self {
        Self(queue.head().map(str::to_string))
    }

    pub fn bed_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[derive(Clone)]
pub struct WardService {
    gateway: Arc<dyn OntologyGateway>,
    doctor_position: DoctorPosition,
}

impl WardService {
    /// Create the service and record the starting doctor position from the current queue.
    pub async fn start(gateway: Arc<dyn OntologyGateway>) -> Self {
        let queue = fetch_queue(gateway.as_ref()).await;
        let doctor_position = DoctorPosition::from_queue(&queue);
        match doctor_position.bed_id() {
            Some(bed_id) => tracing::info!("doctor starting at {}", bed_id),
            None => tracing::info!("queue empty at startup; no doctor position"),
        }

        Self {
            gateway,
            doctor_position,
        }
    }

    pub fn doctor_position(&self) -> &DoctorPosition {
        &self.doctor_position
    }

    /// Resolve the current priority queue. Never fails; see [`resolve_queue`].
    pub async fn queue(&self) -> QueueOrder {
        fetch_queue(self.gateway.as_ref()).await
    }

    /// Project every bed against the current queue, in the gateway's iteration order.
    ///
    /// # Errors
    /// Returns the gateway error if the bed listing fails. A failing queue query degrades to
    /// the default queue instead.
    pub async fn bed_views(&self) -> WardResult<Vec<BedView>> {
        let beds = self.gateway.list_beds().await?;
        let queue = self.queue().await;
        Ok(beds
            .into_iter()
            .map(|bed| project_bed(bed, &queue))
            .collect())
    }

    /// Equipment mentioned in one bed's note.
    ///
    /// Unknown (or blank) bed identifiers yield an empty list.
    ///
    /// # Errors
    /// Returns the gateway error if the lookup itself fails.
    pub async fn equipment_for_bed(&self, bed_id: &str) -> WardResult<Vec<&'static str>> {
        let Ok(bed_id) = BedId::parse(bed_id) else {
            return Ok(Vec::new());
        };
        let bed = self.gateway.get_bed(&bed_id).await?;
        Ok(bed
            .map(|bed| extract_equipment(&bed.current_note))
            .unwrap_or_default())
    }

    /// Number of beds mentioning each equipment item.
    ///
    /// # Errors
    /// Returns the gateway error if the bed listing fails.
    pub async fn equipment_summary(&self) -> WardResult<BTreeMap<String, u32>> {
        let beds = self.gateway.list_beds().await?;
        Ok(tally_equipment(beds.iter().map(|bed| bed.current_note.as_str())))
    }

    /// Replace a bed's note, keeping its patient and procedure.
    ///
    /// # Errors
    /// - `NotFound` if the bed does not exist,
    /// - `ValidationFailed` if the platform's verdict is anything but valid,
    /// - `Unavailable` if the platform cannot be reached.
    pub async fn update_note(&self, bed_id: &BedId, content: &str) -> WardResult<()> {
        let bed = self
            .gateway
            .get_bed(bed_id)
            .await?
            .ok_or_else(|| WardError::NotFound(bed_id.to_string()))?;

        let verdict = self
            .gateway
            .edit_bed(BedEdit {
                bed_id: bed.bed_id,
                patient_name: bed.patient_name,
                procedure_type: bed.procedure_type,
                current_note: content.to_string(),
                last_updated: Utc::now(),
            })
            .await?;

        if verdict.is_valid() {
            tracing::info!("note updated for {}", bed_id);
            Ok(())
        } else {
            Err(WardError::ValidationFailed(verdict.to_string()))
        }
    }

    /// Close out the priority patient by writing the resolution note.
    ///
    /// # Errors
    /// As for [`WardService::update_note`].
    pub async fn mark_priority_done(&self, bed_id: &BedId) -> WardResult<()> {
        self.update_note(bed_id, RESOLVED_NOTE).await
    }
}

async fn fetch_queue(gateway: &dyn OntologyGateway) -> QueueOrder {
    match gateway.queue_order().await {
        Ok(raw) => resolve_queue(&raw),
        Err(e) => {
            tracing::warn!("queue query failed, using default queue: {}", e);
            QueueOrder::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryGateway;
    use api_shared::BedStatus;

    async fn service_with(gateway: InMemoryGateway) -> (WardService, Arc<InMemoryGateway>) {
        let gateway = Arc::new(gateway);
        let service = WardService::start(gateway.clone()).await;
        (service, gateway)
    }

    fn bed_id(id: &str) -> BedId {
        BedId::parse(id).unwrap()
    }

    #[tokio::test]
    async fn start_records_queue_head() {
        let (service, _) = service_with(InMemoryGateway::seeded()).await;
        assert_eq!(service.doctor_position().bed_id(), Some("bed_1"));
    }

    #[tokio::test]
    async fn bed_views_carry_rank_band_and_status() {
        let (service, _) = service_with(InMemoryGateway::seeded()).await;
        let views = service.bed_views().await.unwrap();

        let bed_3 = views.iter().find(|v| v.bed_id == "bed_3").unwrap();
        assert_eq!(bed_3.queue_position, 5);
        assert_eq!(bed_3.priority_color, "border-green-500 bg-green-50");
        assert_eq!(bed_3.status, BedStatus::ReadyDischarge);

        let bed_5 = views.iter().find(|v| v.bed_id == "bed_5").unwrap();
        assert_eq!(bed_5.queue_position, 3);
        assert_eq!(bed_5.priority_color, "border-orange-500 bg-orange-50");
    }

    #[tokio::test]
    async fn queue_failure_degrades_to_default() {
        let gateway = InMemoryGateway::new(Vec::new(), serde_json::json!({"unexpected": true}));
        let (service, _) = service_with(gateway).await;
        assert_eq!(service.queue().await, QueueOrder::fallback());
    }

    #[tokio::test]
    async fn unavailable_gateway_still_resolves_a_queue() {
        let (service, _) = service_with(InMemoryGateway::seeded().unavailable()).await;
        assert_eq!(service.queue().await, QueueOrder::fallback());
        assert!(matches!(
            service.bed_views().await,
            Err(WardError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn equipment_for_unknown_bed_is_empty() {
        let (service, _) = service_with(InMemoryGateway::seeded()).await;
        assert!(service.equipment_for_bed("bed_42").await.unwrap().is_empty());
        assert!(service.equipment_for_bed("  ").await.unwrap().is_empty());
        assert_eq!(
            service.equipment_for_bed("bed_2").await.unwrap(),
            vec!["IV pump", "oxygen"]
        );
    }

    #[tokio::test]
    async fn padded_bed_id_does_not_match_stored_bed() {
        let (service, gateway) = service_with(InMemoryGateway::seeded()).await;
        assert!(service.equipment_for_bed(" bed_2 ").await.unwrap().is_empty());

        let err = service
            .update_note(&bed_id(" bed_4 "), "x")
            .await
            .expect_err("should fail");
        assert!(matches!(err, WardError::NotFound(_)));
        assert_eq!(
            gateway.bed("bed_4").unwrap().current_note,
            "Resting, bandages changed"
        );
    }

    #[tokio::test]
    async fn summary_counts_mentions_across_beds() {
        let (service, _) = service_with(InMemoryGateway::seeded()).await;
        service
            .update_note(&bed_id("bed_6"), "switch to oxygen mask")
            .await
            .unwrap();

        let summary = service.equipment_summary().await.unwrap();
        assert_eq!(summary.get("oxygen"), Some(&2));
        assert_eq!(summary.get("pain medication"), Some(&1));
    }

    #[tokio::test]
    async fn update_note_keeps_patient_details() {
        let (service, gateway) = service_with(InMemoryGateway::seeded()).await;
        service
            .update_note(&bed_id("bed_2"), "going home today")
            .await
            .unwrap();

        let bed = gateway.bed("bed_2").unwrap();
        assert_eq!(bed.current_note, "going home today");
        assert_eq!(bed.patient_name, "James Chen");
        assert_eq!(bed.procedure_type, "Appendectomy");
    }

    #[tokio::test]
    async fn update_note_for_missing_bed_is_not_found() {
        let (service, _) = service_with(InMemoryGateway::seeded()).await;
        let err = service
            .update_note(&bed_id("bed_42"), "hello")
            .await
            .expect_err("should fail");
        assert!(matches!(err, WardError::NotFound(_)));
    }

    #[tokio::test]
    async fn rejected_edit_is_validation_failure() {
        let (service, gateway) = service_with(InMemoryGateway::seeded().rejecting_edits()).await;
        let err = service
            .mark_priority_done(&bed_id("bed_1"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, WardError::ValidationFailed(ref v) if v == "INVALID"));
        assert_ne!(
            gateway.bed("bed_1").unwrap().current_note,
            "Patient met with doctor and resolved."
        );
    }

    #[tokio::test]
    async fn priority_done_writes_resolution_note() {
        let (service, gateway) = service_with(InMemoryGateway::seeded()).await;
        service.mark_priority_done(&bed_id("bed_1")).await.unwrap();
        assert_eq!(
            gateway.bed("bed_1").unwrap().current_note,
            "Patient met with doctor and resolved."
        );
    }
}
