//! Membership Models

use serde::{Deserialize, Serialize};

/// Time-boxed access grant template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub duration_days: i64,
    /// Daily access window, "HH:MM".
    pub access_start: String,
    pub access_end: String,
    /// Weekday encoding: 0 = Sunday .. 6 = Saturday.
    pub access_weekdays: Vec<u8>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Stored membership status. "Expired" is deliberately absent here: it is
/// a derived view computed from `end_date` on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Blocked,
    Cancelled,
}

/// What the operator sees. Expired overrides only a stored `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipDisplayStatus {
    Active,
    Blocked,
    Cancelled,
    Expired,
}

/// A purchased instance of a [`MembershipPlan`].
///
/// `end_date = start_date + duration`; no transition ever extends it.
/// Renewal creates a new instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMembership {
    pub id: i64,
    pub plan_id: i64,
    pub member_id: i64,
    pub start_date: i64,
    pub end_date: i64,
    pub status: MembershipStatus,
    pub purchased_at: i64,
}
