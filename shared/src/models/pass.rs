//! Credit Pass Models

use serde::{Deserialize, Serialize};

/// Catalog entry for a prepaid bundle of session credits.
///
/// Cannot be deleted while any `PurchasedPass` references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditPass {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub total_credits: i32,
    /// How many people one booking admits.
    pub persons_per_booking: i32,
    /// Class ids this pass can book; empty = any class.
    pub eligible_class_ids: Vec<i64>,
    pub stock: i32,
    pub is_active: bool,
    /// Days of validity from purchase; None = no expiry.
    pub validity_days: Option<i64>,
    pub created_at: i64,
}

/// A purchased instance of a [`CreditPass`].
///
/// `total_credits` is a snapshot taken at purchase; later catalog edits do
/// not touch sold passes. `remaining_credits` is the authoritative balance,
/// decremented only by consumption events, with
/// `0 <= remaining_credits <= total_credits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasedPass {
    pub id: i64,
    pub credit_pass_id: i64,
    pub member_id: i64,
    pub total_credits: i32,
    pub remaining_credits: i32,
    pub validity_until: Option<i64>,
    pub purchased_at: i64,
}

/// Display classification of a purchased pass.
///
/// Validity beats balance: a pass past `validity_until` shows expired even
/// with credits left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassDisplayStatus {
    Active,
    Expired,
    Exhausted,
}

/// Audit record of one credit decrement.
///
/// Display only; the pass's `remaining_credits` is authoritative and is
/// never re-derived by summing these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionEvent {
    pub id: i64,
    pub purchased_pass_id: i64,
    pub credits: i32,
    /// The booking this consumption paid for.
    pub booking_ref: i64,
    pub at: i64,
}
