//! Mutation intents
//!
//! The booking core exposes exactly three mutations. Each is an intent the
//! caller dispatches; the outcome is either an applied partial-field patch
//! (for the external store to persist) or a rejection with a reason string.
//! The core never persists anything itself.
//!
//! JSON shape follows the tagged-enum dispatch convention:
//!
//! ```json
//! { "type": "CancelEnrollment", "data": { "id": 1021 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{EnrollmentStatus, MembershipStatus, PaymentStatus};

/// The three mutation intents of the booking core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StudioIntent {
    /// Cancel an enrollment; auto-refunds when the 48h policy allows.
    CancelEnrollment { id: i64 },
    /// Later manual refund of an already-cancelled, paid enrollment.
    SetRefunded { id: i64 },
    /// Flip a membership between active and blocked.
    ToggleBlocked { membership_id: i64 },
}

/// Partial-field update on a `CohortEnrollment`. Only populated fields are
/// written by the applying store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_status: Option<EnrollmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

/// Partial-field update on a `UserMembership`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MembershipStatus>,
}

/// The patch an applied intent produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", content = "fields")]
pub enum IntentPatch {
    Enrollment(EnrollmentPatch),
    Membership(MembershipPatch),
}

/// Outcome of one intent dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub success: bool,
    pub message: String,
    /// The applied partial-field update; None when rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<IntentPatch>,
    /// Id of the affected record; None when rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl IntentResult {
    /// An applied intent with its patch.
    pub fn applied(message: impl Into<String>, id: i64, patch: IntentPatch) -> Self {
        Self {
            success: true,
            message: message.into(),
            patch: Some(patch),
            id: Some(id),
        }
    }

    /// A locally-recovered rejection. The reason string is the only thing
    /// the caller gets; nothing was written.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            patch: None,
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serialization_shape() {
        let intent = StudioIntent::CancelEnrollment { id: 1021 };

        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"type\":\"CancelEnrollment\""));
        assert!(json.contains("\"id\":1021"));

        let parsed: StudioIntent = serde_json::from_str(&json).unwrap();
        match parsed {
            StudioIntent::CancelEnrollment { id } => assert_eq!(id, 1021),
            _ => panic!("Unexpected variant"),
        }
    }

    #[test]
    fn test_rejected_result_has_no_patch() {
        let result = IntentResult::rejected("outside refund window");
        assert!(!result.success);
        assert!(result.patch.is_none());
        assert!(result.id.is_none());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = IntentPatch::Enrollment(EnrollmentPatch {
            payment_status: Some(PaymentStatus::Refunded),
            ..Default::default()
        });

        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("\"payment_status\":\"refunded\""));
        assert!(!json.contains("enrollment_status"));
        assert!(!json.contains("cancelled_at"));
    }
}
