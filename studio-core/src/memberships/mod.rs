//! Membership State Machine
//!
//! Stored status is active/blocked/cancelled. "Expired" is a derived view
//! computed from `end_date` on every read and only shown while the stored
//! status is active. No transition ever extends `end_date` — renewal
//! creates a new instance.
//!
//! Transitions: active ⇄ blocked (reversible operator toggle);
//! active/blocked → cancelled (terminal).

use shared::error::{DomainError, DomainResult};
use shared::intent::MembershipPatch;
use shared::models::{MembershipDisplayStatus, MembershipStatus, UserMembership};
use shared::util::{snowflake_id, DAY_MS};

use crate::store::{Repository, StudioStore};

/// Buy a plan instance starting at `start_date`.
pub fn purchase_membership(
    store: &StudioStore,
    plan_id: i64,
    member_id: i64,
    start_date: i64,
) -> DomainResult<UserMembership> {
    let Some(plan) = store.membership_plans.get(plan_id) else {
        return Err(DomainError::NotFound(format!("membership plan {plan_id}")));
    };
    if !plan.is_active {
        return Err(DomainError::Validation(format!(
            "membership plan {plan_id} is not on sale"
        )));
    }
    if plan.duration_days <= 0 {
        return Err(DomainError::Validation(format!(
            "membership plan {plan_id} has a malformed duration of {} day(s)",
            plan.duration_days
        )));
    }

    let membership = UserMembership {
        id: snowflake_id(),
        plan_id,
        member_id,
        start_date,
        end_date: start_date + plan.duration_days * DAY_MS,
        status: MembershipStatus::Active,
        purchased_at: start_date,
    };
    store.memberships.insert(membership.clone());
    tracing::info!(
        membership_id = membership.id,
        plan_id,
        member_id,
        "membership purchased"
    );
    Ok(membership)
}

/// What the operator sees, recomputed on every read.
///
/// Expired overrides only a stored `Active`: a blocked or cancelled
/// membership displays as stored even when `end_date` is long past, and a
/// cancelled one displays cancelled even when `end_date` is still future.
pub fn display_status(membership: &UserMembership, now: i64) -> MembershipDisplayStatus {
    match membership.status {
        MembershipStatus::Active if membership.end_date < now => MembershipDisplayStatus::Expired,
        MembershipStatus::Active => MembershipDisplayStatus::Active,
        MembershipStatus::Blocked => MembershipDisplayStatus::Blocked,
        MembershipStatus::Cancelled => MembershipDisplayStatus::Cancelled,
    }
}

/// Operator toggle between active and blocked. Reversible; disabled for a
/// cancelled membership.
pub fn toggle_blocked(store: &StudioStore, id: i64) -> DomainResult<MembershipPatch> {
    let Some(membership) = store.memberships.get(id) else {
        return Err(DomainError::NotFound(format!("membership {id}")));
    };
    let next = match membership.status {
        MembershipStatus::Active => MembershipStatus::Blocked,
        MembershipStatus::Blocked => MembershipStatus::Active,
        MembershipStatus::Cancelled => {
            return Err(DomainError::PolicyViolation(format!(
                "membership {id} is cancelled, block toggle is disabled"
            )));
        }
    };

    store.memberships.update(id, |m| m.status = next);
    tracing::info!(membership_id = id, status = ?next, "membership block toggled");

    Ok(MembershipPatch { status: Some(next) })
}

/// Terminal cancellation from active or blocked.
pub fn cancel_membership(store: &StudioStore, id: i64) -> DomainResult<MembershipPatch> {
    let Some(membership) = store.memberships.get(id) else {
        return Err(DomainError::NotFound(format!("membership {id}")));
    };
    if membership.status == MembershipStatus::Cancelled {
        return Err(DomainError::PolicyViolation(format!(
            "membership {id} is already cancelled"
        )));
    }

    store
        .memberships
        .update(id, |m| m.status = MembershipStatus::Cancelled);
    tracing::info!(membership_id = id, "membership cancelled");

    Ok(MembershipPatch {
        status: Some(MembershipStatus::Cancelled),
    })
}
