//! Equipment mentions in bedside notes.

use crate::constants::EQUIPMENT_KEYWORDS;
use std::collections::BTreeMap;

/// Vocabulary entries mentioned in `note`, in vocabulary order.
///
/// Matching is a case-insensitive substring test; there is no stemming.
pub fn extract_equipment(note: &str) -> Vec<&'static str> {
    let lowered = note.to_lowercase();
    EQUIPMENT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
        .collect()
}

/// Count, per equipment item, how many notes mention it.
pub fn tally_equipment<'a>(notes: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, u32> {
    let mut tally = BTreeMap::new();
    for note in notes {
        for item in extract_equipment(note) {
            *tally.entry(item.to_string()).or_insert(0) += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_preserves_vocabulary_order() {
        assert_eq!(
            extract_equipment("Patient needs oxygen and an IV pump now"),
            vec!["IV pump", "oxygen"]
        );
    }

    #[test]
    fn extraction_is_case_insensitive() {
        assert_eq!(
            extract_equipment("bring CRUTCHES and a Wheelchair"),
            vec!["wheelchair", "crutches"]
        );
    }

    #[test]
    fn empty_note_mentions_nothing() {
        assert!(extract_equipment("").is_empty());
    }

    #[test]
    fn tally_counts_each_note_once_per_item() {
        let tally = tally_equipment(["oxygen, more oxygen", "Oxygen mask", "walker"]);
        assert_eq!(tally.get("oxygen"), Some(&2));
        assert_eq!(tally.get("walker"), Some(&1));
        assert_eq!(tally.len(), 2);
    }
}
