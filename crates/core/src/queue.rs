//! Queue resolution and priority bands.
//!
//! The priority queue is computed by the platform. Its query result has historically come back
//! as JSON text, as a comma separated list, or as something else entirely; [`resolve_queue`]
//! accepts all of them and never fails.

use crate::constants::{
    CRITICAL_BAND, CRITICAL_MAX_RANK, DEFAULT_QUEUE, ELEVATED_BAND, ELEVATED_MAX_RANK,
    NORMAL_BAND, UNRANKED_POSITION,
};
use serde_json::Value;

/// Ordered bed identifiers, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueOrder(Vec<String>);

impl QueueOrder {
    pub fn new(bed_ids: Vec<String>) -> Self {
        Self(bed_ids)
    }

    /// The fixed six-bed queue used when the query result has an unexpected shape.
    pub fn fallback() -> Self {
        Self(DEFAULT_QUEUE.iter().map(|id| id.to_string()).collect())
    }

    /// 1-based rank of `bed_id`, if queued. Duplicates resolve to the first occurrence.
    pub fn rank(&self, bed_id: &str) -> Option<u32> {
        self.0
            .iter()
            .position(|id| id == bed_id)
            .map(|index| u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    /// Rank as reported to clients, with [`UNRANKED_POSITION`] for beds not in the queue.
    pub fn position(&self, bed_id: &str) -> u32 {
        self.rank(bed_id).unwrap_or(UNRANKED_POSITION)
    }

    pub fn band(&self, bed_id: &str) -> PriorityBand {
        PriorityBand::for_rank(self.rank(bed_id))
    }

    pub fn head(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Priority color band derived from queue rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    Critical,
    Elevated,
    Normal,
}

impl PriorityBand {
    pub fn for_rank(rank: Option<u32>) -> Self {
        match rank {
            Some(r) if r <= CRITICAL_MAX_RANK => PriorityBand::Critical,
            Some(r) if r <= ELEVATED_MAX_RANK => PriorityBand::Elevated,
            _ => PriorityBand::Normal,
        }
    }

    /// CSS classes the dashboard renders for the band.
    pub fn css_classes(&self) -> &'static str {
        match self {
            PriorityBand::Critical => CRITICAL_BAND,
            PriorityBand::Elevated => ELEVATED_BAND,
            PriorityBand::Normal => NORMAL_BAND,
        }
    }
}

/// Normalise a raw queue query result.
///
/// - JSON string holding a JSON array: the array's entries, in order.
/// - Any other JSON string: comma separated tokens, trimmed, empties dropped.
/// - Anything that is not a string: [`QueueOrder::fallback`].
pub fn resolve_queue(raw: &Value) -> QueueOrder {
    match raw {
        Value::String(text) => resolve_text(text),
        other => {
            tracing::warn!(
                "queue query returned non-text result ({}); using default queue",
                value_kind(other)
            );
            QueueOrder::fallback()
        }
    }
}

fn resolve_text(text: &str) -> QueueOrder {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        return QueueOrder::new(items.into_iter().filter_map(array_entry).collect());
    }

    QueueOrder::new(
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn array_entry(item: Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_text_is_parsed_in_order() {
        let queue = resolve_queue(&json!(r#"["bed_4", "bed_2", "bed_9"]"#));
        assert_eq!(queue.as_slice(), ["bed_4", "bed_2", "bed_9"]);
    }

    #[test]
    fn delimited_text_is_split_and_trimmed() {
        let queue = resolve_queue(&json!(" bed_3 ,bed_1,, ,bed_5 "));
        assert_eq!(queue.as_slice(), ["bed_3", "bed_1", "bed_5"]);
    }

    #[test]
    fn malformed_json_text_falls_back_to_splitting() {
        let queue = resolve_queue(&json!(r#"["bed_1", "bed_2""#));
        assert_eq!(queue.as_slice(), [r#"["bed_1""#, r#""bed_2""#]);
    }

    #[test]
    fn empty_text_gives_empty_queue() {
        assert!(resolve_queue(&json!("")).as_slice().is_empty());
    }

    #[test]
    fn non_text_results_use_default_queue() {
        for raw in [json!(null), json!(7), json!(["bed_1"]), json!({"queue": []})] {
            assert_eq!(
                resolve_queue(&raw).as_slice(),
                ["bed_1", "bed_2", "bed_3", "bed_4", "bed_5", "bed_6"]
            );
        }
    }

    #[test]
    fn bands_follow_rank_thresholds() {
        let queue = QueueOrder::new((1..=6).map(|i| format!("bed_{i}")).collect());
        assert_eq!(queue.band("bed_1"), PriorityBand::Critical);
        assert_eq!(queue.band("bed_2"), PriorityBand::Critical);
        assert_eq!(queue.band("bed_3"), PriorityBand::Elevated);
        assert_eq!(queue.band("bed_4"), PriorityBand::Elevated);
        assert_eq!(queue.band("bed_5"), PriorityBand::Normal);
        assert_eq!(queue.band("bed_99"), PriorityBand::Normal);
    }

    #[test]
    fn rank_is_one_based_with_sentinel() {
        let queue = QueueOrder::new(vec!["bed_3".into(), "bed_1".into()]);
        assert_eq!(queue.position("bed_1"), 2);
        assert_eq!(queue.band("bed_1").css_classes(), "border-red-500 bg-red-50");
        assert_eq!(queue.position("bed_2"), 999);
        assert_eq!(queue.head(), Some("bed_3"));
    }
}
