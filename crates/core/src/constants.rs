//! Constants used throughout the ward core crate.
//!
//! Phrase lists and the equipment vocabulary are matched case-insensitively; their order is
//! significant.

/// Queue returned when the ontology gives back something that is not text.
pub const DEFAULT_QUEUE: [&str; 6] = ["bed_1", "bed_2", "bed_3", "bed_4", "bed_5", "bed_6"];

/// Rank reported for beds that do not appear in the queue.
pub const UNRANKED_POSITION: u32 = 999;

/// Highest rank still in the critical band.
pub const CRITICAL_MAX_RANK: u32 = 2;

/// Highest rank still in the elevated band.
pub const ELEVATED_MAX_RANK: u32 = 4;

pub const CRITICAL_BAND: &str = "border-red-500 bg-red-50";
pub const ELEVATED_BAND: &str = "border-orange-500 bg-orange-50";
pub const NORMAL_BAND: &str = "border-green-500 bg-green-50";

/// Phrases signalling a patient is ready to leave. Checked before [`URGENCY_PHRASES`].
pub const DISCHARGE_PHRASES: &[&str] = &[
    "ready for discharge",
    "discharge papers",
    "family here",
    "going home",
];

pub const URGENCY_PHRASES: &[&str] = &[
    "severe pain",
    "urgently",
    "complications",
    "needs attention",
    "bleeding",
];

/// Equipment vocabulary, in reporting order.
pub const EQUIPMENT_KEYWORDS: &[&str] = &[
    "pain medication",
    "IV pump",
    "wheelchair",
    "blood pressure monitor",
    "oxygen",
    "catheter",
    "IV bag",
    "bandages",
    "anti-nausea medication",
    "discharge papers",
    "prescription",
    "walker",
    "crutches",
];

/// Note written when the doctor closes out the priority patient.
pub const RESOLVED_NOTE: &str = "Patient met with doctor and resolved.";

pub const UNKNOWN_PATIENT: &str = "Unknown Patient";
pub const UNKNOWN_PROCEDURE: &str = "Unknown Procedure";

/// `strftime` pattern for `BedView::last_updated`.
pub const LAST_UPDATED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
