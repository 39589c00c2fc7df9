//! Program Definition Model

use serde::{Deserialize, Serialize};

/// Weekly recurrence of a multi-week program.
///
/// Weekday encoding: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub weekdays: Vec<u8>,
    /// Session start wall-clock time, "HH:MM".
    pub start_time: String,
    pub duration_minutes: i64,
    /// Length of one delivered run ("cohort") in weeks.
    pub num_weeks: i64,
}

/// How enrollment is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Full price collected at enrollment.
    Flat,
    /// Deposit collected at enrollment, remainder settled on site.
    ReservedDeposit,
}

/// Reusable template for a recurring multi-week program ("block design").
///
/// Deletion is rejected while any enrollment references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDefinition {
    pub id: i64,
    pub name: String,
    pub facility_id: i64,
    pub trainer_id: i64,
    pub recurrence: Recurrence,
    pub capacity: i32,
    pub pricing_mode: PricingMode,
    /// Full price in `Flat` mode, deposit amount in `ReservedDeposit` mode.
    pub amount: f64,
    pub is_published: bool,
    pub created_at: i64,
}
