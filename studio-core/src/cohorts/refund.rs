//! Refund eligibility
//!
//! Fixed-window policy: a cancellation is refundable iff it happened at
//! least 48 hours before the cohort starts.

use shared::util::HOUR_MS;

/// 48 hours in epoch milliseconds.
pub const REFUND_WINDOW_MS: i64 = 48 * HOUR_MS;

/// Whether a cancellation decided at `decision_time` is refundable for a
/// cohort starting at `cohort_start_ts`.
///
/// `decision_time` is "now" when cancelling, or the stored `cancelled_at`
/// when an operator triggers a later manual refund — eligibility never
/// changes after the fact.
pub fn is_refund_eligible(cohort_start_ts: i64, decision_time: i64) -> bool {
    cohort_start_ts - decision_time >= REFUND_WINDOW_MS
}
