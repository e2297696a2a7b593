//! Admission lifecycle events
//!
//! Side-effect-free descriptions of one admission attempt, correlated by
//! an attempt id. Event names are stable strings for log pipelines and
//! metrics; the explanation artifact answers "why was this configuration
//! accepted or rejected" without re-running the checks.

use uuid::Uuid;

use crate::validator::ValidationError;

/// Admission lifecycle event types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionEvent {
    /// replicate.admission.requested
    /// Emitted when a candidate configuration is accepted for checking.
    Requested {
        attempt_id: Uuid,
        local_cluster_id: String,
        cluster_count: usize,
        edge_count: usize,
    },

    /// replicate.admission.accepted
    /// Emitted when every admission check passed.
    Accepted {
        attempt_id: Uuid,
        pchannels_expanding: bool,
    },

    /// replicate.admission.rejected
    /// Emitted when a check reported a violation.
    Rejected { attempt_id: Uuid, reason: String },
}

impl AdmissionEvent {
    /// Event name for logging and metrics.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Requested { .. } => "replicate.admission.requested",
            Self::Accepted { .. } => "replicate.admission.accepted",
            Self::Rejected { .. } => "replicate.admission.rejected",
        }
    }

    /// Attempt id this event belongs to.
    pub fn attempt_id(&self) -> Uuid {
        match self {
            Self::Requested { attempt_id, .. }
            | Self::Accepted { attempt_id, .. }
            | Self::Rejected { attempt_id, .. } => *attempt_id,
        }
    }
}

/// Outcome of one admission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// Configuration admitted; `pchannels_expanding` tells the caller
    /// whether to branch to the slot-expansion workflow.
    Accepted { pchannels_expanding: bool },

    /// Configuration rejected with the first violation encountered.
    Rejected { reason: String },
}

/// Explanation artifact for one admission decision.
#[derive(Debug, Clone)]
pub struct AdmissionExplanation {
    /// The attempt this explains.
    pub attempt_id: Uuid,

    /// The decision.
    pub outcome: AdmissionOutcome,

    /// Human-readable explanation.
    pub explanation: String,
}

impl AdmissionExplanation {
    /// Build the explanation for an accepted configuration.
    pub fn accepted(attempt_id: Uuid, pchannels_expanding: bool) -> Self {
        let explanation = if pchannels_expanding {
            "configuration admitted: all checks passed, pchannel expansion detected".to_string()
        } else {
            "configuration admitted: all checks passed".to_string()
        };
        Self {
            attempt_id,
            outcome: AdmissionOutcome::Accepted {
                pchannels_expanding,
            },
            explanation,
        }
    }

    /// Build the explanation for a rejected configuration.
    pub fn rejected(attempt_id: Uuid, error: &ValidationError) -> Self {
        let reason = error.to_string();
        Self {
            attempt_id,
            outcome: AdmissionOutcome::Rejected {
                reason: reason.clone(),
            },
            explanation: format!("configuration rejected: {}", reason),
        }
    }

    /// Whether the attempt was admitted.
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, AdmissionOutcome::Accepted { .. })
    }
}
