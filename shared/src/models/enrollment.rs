//! Cohort Enrollment Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active,
    Cancelled,
}

/// One member's booking into one cohort run of a program.
///
/// Append-mostly; never physically deleted. Cancellation flips
/// `enrollment_status` and stamps `cancelled_at` in the same write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortEnrollment {
    pub id: i64,
    pub program_id: i64,
    /// Start of the specific run (epoch millis). Together with
    /// `program_id` this identifies the cohort.
    pub cohort_start_ts: i64,
    pub member_id: i64,
    pub amount: f64,
    pub payment_status: PaymentStatus,
    pub enrollment_status: EnrollmentStatus,
    /// Set iff `enrollment_status == Cancelled`.
    pub cancelled_at: Option<i64>,
    pub created_at: i64,
}
