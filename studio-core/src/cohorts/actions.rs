//! Enrollment lifecycle actions
//!
//! Cancel, later manual refund, and payment confirmation. Each action
//! loads one record, checks policy against a single consistent `now`, and
//! applies its partial-field patch as one atomic replace-by-id. The
//! enforced machine is:
//!
//! `{active,pending} → {active,paid} → {cancelled,paid} → {cancelled,refunded}`
//!
//! Cancelled is terminal for the enrollment status; paid→refunded happens
//! only after cancellation and only inside the 48h eligibility window.

use shared::error::{DomainError, DomainResult};
use shared::intent::EnrollmentPatch;
use shared::models::{EnrollmentStatus, PaymentStatus};

use crate::store::{Repository, StudioStore};

use super::refund::is_refund_eligible;

/// Cancel an enrollment.
///
/// Stamps `cancelled_at = now` and, when the payment already settled and
/// the 48h window still holds at this same `now`, flips the payment to
/// refunded in the same patch — eligibility check and write share one
/// instant.
pub fn cancel_enrollment(
    store: &StudioStore,
    id: i64,
    now: i64,
) -> DomainResult<EnrollmentPatch> {
    let Some(enrollment) = store.enrollments.get(id) else {
        return Err(DomainError::NotFound(format!("enrollment {id}")));
    };
    if enrollment.enrollment_status == EnrollmentStatus::Cancelled {
        return Err(DomainError::PolicyViolation(format!(
            "enrollment {id} is already cancelled"
        )));
    }

    let auto_refund = enrollment.payment_status == PaymentStatus::Paid
        && is_refund_eligible(enrollment.cohort_start_ts, now);

    store.enrollments.update(id, |e| {
        e.enrollment_status = EnrollmentStatus::Cancelled;
        e.cancelled_at = Some(now);
        if auto_refund {
            e.payment_status = PaymentStatus::Refunded;
        }
    });
    tracing::info!(enrollment_id = id, auto_refund, "enrollment cancelled");

    Ok(EnrollmentPatch {
        enrollment_status: Some(EnrollmentStatus::Cancelled),
        cancelled_at: Some(now),
        payment_status: auto_refund.then_some(PaymentStatus::Refunded),
    })
}

/// Later manual refund of a cancelled, paid enrollment.
///
/// Eligibility is judged at the stored `cancelled_at`, never at the moment
/// the operator clicks — a cancellation that missed the window stays
/// non-refundable forever.
pub fn set_refunded(store: &StudioStore, id: i64) -> DomainResult<EnrollmentPatch> {
    let Some(enrollment) = store.enrollments.get(id) else {
        return Err(DomainError::NotFound(format!("enrollment {id}")));
    };
    if enrollment.enrollment_status != EnrollmentStatus::Cancelled {
        return Err(DomainError::PolicyViolation(format!(
            "enrollment {id} is not cancelled, refund applies after cancellation only"
        )));
    }
    match enrollment.payment_status {
        PaymentStatus::Refunded => {
            return Err(DomainError::PolicyViolation(format!(
                "enrollment {id} is already refunded"
            )));
        }
        PaymentStatus::Pending => {
            return Err(DomainError::PolicyViolation(format!(
                "enrollment {id} was never paid, nothing to refund"
            )));
        }
        PaymentStatus::Paid => {}
    }
    let Some(cancelled_at) = enrollment.cancelled_at else {
        return Err(DomainError::Validation(format!(
            "cancelled enrollment {id} is missing its cancellation timestamp"
        )));
    };
    if !is_refund_eligible(enrollment.cohort_start_ts, cancelled_at) {
        return Err(DomainError::PolicyViolation(format!(
            "enrollment {id} was cancelled inside the 48h window, not refundable"
        )));
    }

    store.enrollments.update(id, |e| {
        e.payment_status = PaymentStatus::Refunded;
    });
    tracing::info!(enrollment_id = id, "enrollment refunded");

    Ok(EnrollmentPatch {
        payment_status: Some(PaymentStatus::Refunded),
        ..Default::default()
    })
}

/// External payment confirmation hook: pending → paid only.
pub fn mark_paid(store: &StudioStore, id: i64) -> DomainResult<EnrollmentPatch> {
    let Some(enrollment) = store.enrollments.get(id) else {
        return Err(DomainError::NotFound(format!("enrollment {id}")));
    };
    if enrollment.payment_status != PaymentStatus::Pending {
        return Err(DomainError::PolicyViolation(format!(
            "enrollment {id} payment is not pending"
        )));
    }

    store.enrollments.update(id, |e| {
        e.payment_status = PaymentStatus::Paid;
    });
    tracing::info!(enrollment_id = id, "enrollment payment confirmed");

    Ok(EnrollmentPatch {
        payment_status: Some(PaymentStatus::Paid),
        ..Default::default()
    })
}
