//! Cohort key resolution

use serde::{Deserialize, Serialize};
use shared::models::CohortEnrollment;

/// Physical cohort identity: one delivered run of one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortKey {
    pub program_id: i64,
    pub cohort_start_ts: i64,
}

/// Pure mapping from an enrollment to the cohort it belongs to.
pub fn cohort_key(enrollment: &CohortEnrollment) -> CohortKey {
    CohortKey {
        program_id: enrollment.program_id,
        cohort_start_ts: enrollment.cohort_start_ts,
    }
}
