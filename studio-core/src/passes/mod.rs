//! Credit Pass Ledger
//!
//! Prepaid session-credit pools. Purchase snapshots the catalog credit
//! count; consumption decrements `remaining_credits` at the moment of use.
//! The pass balance is authoritative — the consumption log exists for
//! audit display only and is never re-summed into a balance.

use shared::error::{DomainError, DomainResult};
use shared::models::{ConsumptionEvent, PassDisplayStatus, PurchasedPass};
use shared::util::{snowflake_id, DAY_MS};

use crate::store::{Repository, StudioStore};

/// Buy one instance of a catalog pass.
///
/// Snapshots `total_credits` so later catalog edits never touch sold
/// passes, and decrements the catalog stock in the same call.
pub fn purchase_pass(
    store: &StudioStore,
    credit_pass_id: i64,
    member_id: i64,
    now: i64,
) -> DomainResult<PurchasedPass> {
    let Some(catalog) = store.credit_passes.get(credit_pass_id) else {
        return Err(DomainError::NotFound(format!("credit pass {credit_pass_id}")));
    };
    if !catalog.is_active {
        return Err(DomainError::Validation(format!(
            "credit pass {credit_pass_id} is not on sale"
        )));
    }
    if catalog.stock <= 0 {
        return Err(DomainError::Validation(format!(
            "credit pass {credit_pass_id} is out of stock"
        )));
    }

    let pass = PurchasedPass {
        id: snowflake_id(),
        credit_pass_id,
        member_id,
        total_credits: catalog.total_credits,
        remaining_credits: catalog.total_credits,
        validity_until: catalog.validity_days.map(|days| now + days * DAY_MS),
        purchased_at: now,
    };
    store.credit_passes.update(credit_pass_id, |c| c.stock -= 1);
    store.purchased_passes.insert(pass.clone());
    tracing::info!(
        purchased_pass_id = pass.id,
        credit_pass_id,
        member_id,
        "credit pass purchased"
    );
    Ok(pass)
}

/// Consume credits from a pass to pay for a booking.
///
/// One atomic operation: the status, expiry and balance checks and the
/// decrement all use the same `now`, and the audit event lands in the same
/// call. A failed check writes nothing, so the balance can never go
/// negative no matter what sequence of consumptions arrives.
pub fn consume_credits(
    store: &StudioStore,
    pass_id: i64,
    cost: i32,
    booking_ref: i64,
    now: i64,
) -> DomainResult<ConsumptionEvent> {
    if cost <= 0 {
        return Err(DomainError::Validation(format!(
            "consumption cost must be positive, got {cost}"
        )));
    }
    let Some(pass) = store.purchased_passes.get(pass_id) else {
        return Err(DomainError::NotFound(format!("purchased pass {pass_id}")));
    };
    match display_status(&pass, now) {
        PassDisplayStatus::Expired => {
            return Err(DomainError::PolicyViolation(format!(
                "pass {pass_id} validity has ended"
            )));
        }
        PassDisplayStatus::Exhausted => {
            return Err(DomainError::PolicyViolation(format!(
                "pass {pass_id} has no remaining credits"
            )));
        }
        PassDisplayStatus::Active => {}
    }
    if pass.remaining_credits < cost {
        return Err(DomainError::PolicyViolation(format!(
            "pass {pass_id} has {} credit(s) left, booking needs {cost}",
            pass.remaining_credits
        )));
    }

    let event = ConsumptionEvent {
        id: snowflake_id(),
        purchased_pass_id: pass_id,
        credits: cost,
        booking_ref,
        at: now,
    };
    store.purchased_passes.update(pass_id, |p| {
        p.remaining_credits -= cost;
    });
    store.consumptions.insert(event.clone());
    tracing::info!(
        purchased_pass_id = pass_id,
        cost,
        booking_ref,
        "credits consumed"
    );
    Ok(event)
}

/// Display classification, recomputed on every read.
///
/// Validity beats balance: a pass past `validity_until` shows expired even
/// with credits left.
pub fn display_status(pass: &PurchasedPass, now: i64) -> PassDisplayStatus {
    if let Some(until) = pass.validity_until
        && until < now
    {
        return PassDisplayStatus::Expired;
    }
    if pass.remaining_credits == 0 {
        PassDisplayStatus::Exhausted
    } else {
        PassDisplayStatus::Active
    }
}

/// Audit view of a pass's consumption history, newest first.
pub fn consumption_history(store: &StudioStore, pass_id: i64) -> Vec<ConsumptionEvent> {
    let mut events: Vec<ConsumptionEvent> = store
        .consumptions
        .list()
        .into_iter()
        .filter(|e| e.purchased_pass_id == pass_id)
        .collect();
    events.sort_by_key(|e| std::cmp::Reverse(e.at));
    events
}
