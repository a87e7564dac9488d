//! Health report returned by the model runner's /health endpoint.
//!
//! The runner reports the overall status alongside the condition of its
//! dependencies (the container engine and GPU support), and answers with 503
//! while still including the report body when unhealthy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status: "healthy" or "unhealthy".
    pub status: String,
    /// Condition of the container engine backing the runner.
    pub docker: ComponentHealth,
    /// Whether GPU support was detected.
    pub gpu: ComponentHealth,
    pub api_version: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Condition of a single dependency, as reported by the runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: String,
    pub message: String,
}
