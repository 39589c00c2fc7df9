//! Cohorts
//!
//! One "cohort" is one delivered run of a recurring program: every
//! enrollment sharing `(program_id, cohort_start_ts)`. The aggregator
//! classifies cohorts into operational buckets against a caller-supplied
//! `now`; the actions implement the cancellation/refund lifecycle.

pub mod actions;
pub mod aggregator;
pub mod key;
pub mod refund;

pub use actions::{cancel_enrollment, mark_paid, set_refunded};
pub use aggregator::{aggregate_cohorts, aggregate_store, CohortBucket, CohortFilter, CohortView};
pub use key::{cohort_key, CohortKey};
pub use refund::{is_refund_eligible, REFUND_WINDOW_MS};
