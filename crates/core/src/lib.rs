//! # Ward Core
//!
//! Core logic for the Wardboard bed status service.
//!
//! This crate contains the bed-state heuristics and the orchestration around the ontology
//! gateway:
//! - Queue resolution and priority bands (`queue`)
//! - Note classification (`notes`) and equipment extraction (`equipment`)
//! - Bed projection into dashboard views (`projection`)
//! - The `OntologyGateway` seam and an in-memory implementation (`gateway`, `memory`)
//!
//! **No API concerns**: HTTP servers and the platform REST client belong in `api-rest` and
//! `ontology-client`.

pub mod config;
pub mod constants;
pub mod equipment;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod notes;
pub mod projection;
pub mod queue;
pub mod service;

pub use config::{CoreConfig, GatewayKind};
pub use error::{WardError, WardResult};
pub use gateway::{BedEdit, BedProperties, BedRecord, OntologyGateway, ValidationResult};
pub use memory::InMemoryGateway;
pub use queue::{PriorityBand, QueueOrder};
pub use service::{DoctorPosition, WardService};
pub use ward_types::{BedId, TextError};
