//! Reward Ledger Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Earned,
    Used,
}

/// One immutable entry of the loyalty points ledger.
///
/// Entries are append-only; a member's balance is always an aggregation
/// (Σ earned − Σ used), never a stored counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardTransaction {
    pub id: i64,
    pub member_id: i64,
    pub kind: RewardKind,
    pub points: i64,
    /// What produced the entry, e.g. "booking:1021" or "order:583".
    pub source: String,
    pub date: i64,
}
