//! # API Shared
//!
//! Shared wire types for the Wardboard APIs.
//!
//! Contains:
//! - Request and response bodies (`wire` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `ward-core` to shape projections and by `api-rest` to serve them.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
