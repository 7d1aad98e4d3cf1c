use crate::wire::HealthRes;

/// Health service backing the REST `/health` endpoint.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static health check; the service holds no state that could make it unhealthy.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is alive.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Wardboard is alive".into(),
        }
    }
}
