//! Academic-integrity violations on the course backend.

use serde::{Deserialize, Serialize};
use store::models::NewViolation;
use store::{KeyValueStore, Violation};

use crate::backend::{query_string, Backend};
use crate::error::ApiError;
use crate::transport::Transport;

/// Which violations to list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViolationFilter {
    #[default]
    All,
    Pending,
    Verified,
}

impl ViolationFilter {
    fn status(self) -> Option<bool> {
        match self {
            ViolationFilter::All => None,
            ViolationFilter::Pending => Some(false),
            ViolationFilter::Verified => Some(true),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub verified: bool,
}

impl<T: Transport, S: KeyValueStore> Backend<T, S> {
    pub async fn violations(&self, filter: ViolationFilter) -> Result<Vec<Violation>, ApiError> {
        let query = query_string(&[("status", filter.status().map(|s| s.to_string()))]);
        self.course
            .get(&format!("/api/violations{query}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch violations: {}", e))
    }

    pub async fn report_violation(&self, violation: &NewViolation) -> Result<Violation, ApiError> {
        self.course
            .post("/api/violations", violation)
            .await
            .inspect_err(|e| tracing::error!("Failed to create violation: {}", e))
    }

    pub async fn verify_violation(
        &self,
        violation_id: i64,
        verified: bool,
    ) -> Result<Violation, ApiError> {
        self.course
            .patch(
                &format!("/api/violations/{violation_id}/verify"),
                &VerifyRequest { verified },
            )
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to verify violation {}: {}", violation_id, e)
            })
    }
}
