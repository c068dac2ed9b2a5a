//! Result of validating a single token.

use chrono::{DateTime, Utc};

use crate::domain::entities::token::Claims;

/// Validation never fails; a rejected token is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid {
        claims: Claims,
        expires_at: DateTime<Utc>,
    },
    Invalid {
        reason: &'static str,
    },
}

impl ValidationOutcome {
    pub fn invalid(reason: &'static str) -> Self {
        ValidationOutcome::Invalid { reason }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            ValidationOutcome::Valid { claims, .. } => Some(claims),
            ValidationOutcome::Invalid { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::Valid { .. } => None,
            ValidationOutcome::Invalid { reason } => Some(*reason),
        }
    }
}
