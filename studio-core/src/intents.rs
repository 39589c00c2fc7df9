//! Intent dispatch
//!
//! Unified entry point for the three mutations the booking core exposes.
//! Policy and validation failures are recovered here into a rejected
//! [`IntentResult`] carrying the reason string; only a missing id escapes
//! as an error, and it is fatal to that single operation alone.

use shared::error::{DomainError, DomainResult};
use shared::intent::{IntentPatch, IntentResult, StudioIntent};

use crate::memberships;
use crate::cohorts::actions;
use crate::store::StudioStore;

/// Apply one mutation intent against the store.
///
/// `now` is sampled once by the caller; the whole operation (eligibility
/// check and write) sees that single instant.
pub fn apply_intent(
    store: &StudioStore,
    intent: StudioIntent,
    now: i64,
) -> DomainResult<IntentResult> {
    let outcome = match intent {
        StudioIntent::CancelEnrollment { id } => actions::cancel_enrollment(store, id, now)
            .map(|patch| {
                IntentResult::applied("enrollment cancelled", id, IntentPatch::Enrollment(patch))
            }),
        StudioIntent::SetRefunded { id } => actions::set_refunded(store, id).map(|patch| {
            IntentResult::applied("payment refunded", id, IntentPatch::Enrollment(patch))
        }),
        StudioIntent::ToggleBlocked { membership_id } => {
            memberships::toggle_blocked(store, membership_id).map(|patch| {
                IntentResult::applied(
                    "membership block toggled",
                    membership_id,
                    IntentPatch::Membership(patch),
                )
            })
        }
    };

    match outcome {
        Ok(result) => Ok(result),
        Err(err) if err.is_recoverable() => {
            tracing::warn!(%err, "intent rejected");
            Ok(IntentResult::rejected(err.to_string()))
        }
        Err(err) => Err(err),
    }
}
