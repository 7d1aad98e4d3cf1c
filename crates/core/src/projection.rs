//! Projection of bed records into dashboard views.

use crate::constants::LAST_UPDATED_FORMAT;
use crate::gateway::BedRecord;
use crate::notes::classify_note;
use crate::queue::QueueOrder;
use api_shared::BedView;
use chrono::{DateTime, Utc};

pub fn project_bed(record: BedRecord, queue: &QueueOrder) -> BedView {
    let bed_id = record.bed_id.as_str();
    BedView {
        status: classify_note(&record.current_note),
        priority_color: queue.band(bed_id).css_classes().to_string(),
        queue_position: queue.position(bed_id),
        last_updated: format_last_updated(record.last_updated),
        bed_id: bed_id.to_string(),
        patient_name: record.patient_name,
        procedure_type: record.procedure_type,
        current_note: record.current_note,
    }
}

/// `Wed, 02 Oct 2024 13:45:00 GMT`, or an empty string when absent.
pub fn format_last_updated(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format(LAST_UPDATED_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::BedStatus;
    use chrono::TimeZone;
    use ward_types::BedId;

    fn record(id: &str, note: &str) -> BedRecord {
        BedRecord {
            bed_id: BedId::parse(id).unwrap(),
            patient_name: "Grace Hopper".into(),
            procedure_type: "Appendectomy".into(),
            current_note: note.into(),
            last_updated: Some(Utc.with_ymd_and_hms(2024, 10, 2, 13, 45, 0).unwrap()),
        }
    }

    #[test]
    fn projects_ranked_bed() {
        let queue = QueueOrder::new(vec!["bed_3".into(), "bed_1".into()]);
        let view = project_bed(record("bed_1", "severe pain overnight"), &queue);

        assert_eq!(view.bed_id, "bed_1");
        assert_eq!(view.queue_position, 2);
        assert_eq!(view.priority_color, "border-red-500 bg-red-50");
        assert_eq!(view.status, BedStatus::NeedsAttention);
        assert_eq!(view.last_updated, "Wed, 02 Oct 2024 13:45:00 GMT");
    }

    #[test]
    fn projects_unranked_bed_into_normal_band() {
        let queue = QueueOrder::new(vec!["bed_3".into()]);
        let view = project_bed(record("bed_8", ""), &queue);

        assert_eq!(view.queue_position, 999);
        assert_eq!(view.priority_color, "border-green-500 bg-green-50");
        assert_eq!(view.status, BedStatus::Stable);
    }

    #[test]
    fn missing_timestamp_renders_empty() {
        assert_eq!(format_last_updated(None), "");
    }
}
