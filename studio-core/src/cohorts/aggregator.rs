//! Booking Cohort Aggregator
//!
//! Groups enrollments into cohorts and classifies each cohort's
//! operational bucket relative to a caller-supplied `now`.
//!
//! Bucketing is over enrollment *subsets*, not whole cohorts: a cohort
//! holding both cancelled and active enrollments shows up in the cancelled
//! bucket (its cancelled subset) and in its timeframe bucket (the active
//! remainder). This is intentional. A fully-cancelled cohort has no active
//! members and therefore vanishes from timeframe buckets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rust_decimal::prelude::*;
use shared::models::{CohortEnrollment, EnrollmentStatus, PaymentStatus, ProgramDefinition};
use shared::util::WEEK_MS;

use crate::store::{Repository, StudioStore};

use super::key::{cohort_key, CohortKey};

/// Operational bucket of a cohort, relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortBucket {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// Display filters applied before bucketing.
#[derive(Debug, Clone, Default)]
pub struct CohortFilter {
    pub facility_id: Option<i64>,
    /// Case-insensitive substring match on the program name.
    pub name_query: Option<String>,
}

/// One cohort as displayed inside one bucket.
#[derive(Debug, Clone, Serialize)]
pub struct CohortView {
    pub key: CohortKey,
    pub program_name: String,
    pub facility_id: i64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub bucket: CohortBucket,
    /// The enrollment subset this bucket displays: cancelled enrollments
    /// for the cancelled bucket, active ones everywhere else.
    pub enrollments: Vec<CohortEnrollment>,
    /// Σ amount over displayed paid enrollments, rounded to 2 places.
    pub revenue: f64,
}

/// Timeframe classification for a cohort with at least one active member.
///
/// Both boundaries are inclusive on the ongoing side: a cohort starting or
/// ending exactly at `now` is ongoing.
pub fn classify_timeframe(start_ts: i64, end_ts: i64, now: i64) -> CohortBucket {
    if start_ts > now {
        CohortBucket::Upcoming
    } else if end_ts < now {
        CohortBucket::Completed
    } else {
        CohortBucket::Ongoing
    }
}

/// Group `enrollments` into cohorts and return the ones that belong to
/// `bucket`, sorted ascending by start.
///
/// Groups whose program no longer exists are skipped (with a warning);
/// the enrollments themselves stay untouched.
pub fn aggregate_cohorts(
    enrollments: &[CohortEnrollment],
    programs: &[ProgramDefinition],
    filter: &CohortFilter,
    bucket: CohortBucket,
    now: i64,
) -> Vec<CohortView> {
    let program_index: HashMap<i64, &ProgramDefinition> =
        programs.iter().map(|p| (p.id, p)).collect();

    let mut groups: HashMap<CohortKey, Vec<&CohortEnrollment>> = HashMap::new();
    for enrollment in enrollments {
        groups.entry(cohort_key(enrollment)).or_default().push(enrollment);
    }

    let mut views = Vec::new();
    for (key, members) in groups {
        let Some(program) = program_index.get(&key.program_id) else {
            tracing::warn!(
                program_id = key.program_id,
                "enrollments reference a missing program, skipping cohort"
            );
            continue;
        };
        if !matches_filter(program, filter) {
            continue;
        }

        let end_ts = key.cohort_start_ts + program.recurrence.num_weeks * WEEK_MS;

        let displayed: Vec<CohortEnrollment> = match bucket {
            CohortBucket::Cancelled => {
                let cancelled = subset(&members, EnrollmentStatus::Cancelled);
                if cancelled.is_empty() {
                    continue;
                }
                cancelled
            }
            timeframe => {
                let active = subset(&members, EnrollmentStatus::Active);
                if active.is_empty() {
                    continue;
                }
                if classify_timeframe(key.cohort_start_ts, end_ts, now) != timeframe {
                    continue;
                }
                active
            }
        };

        let revenue = revenue_of(&displayed);
        views.push(CohortView {
            key,
            program_name: program.name.clone(),
            facility_id: program.facility_id,
            start_ts: key.cohort_start_ts,
            end_ts,
            bucket,
            enrollments: displayed,
            revenue,
        });
    }

    // HashMap iteration order is arbitrary; pin the output order.
    views.sort_by_key(|v| (v.start_ts, v.key.program_id));
    views
}

/// Same aggregation, reading enrollments and programs out of the store.
pub fn aggregate_store(
    store: &StudioStore,
    filter: &CohortFilter,
    bucket: CohortBucket,
    now: i64,
) -> Vec<CohortView> {
    aggregate_cohorts(
        &store.enrollments.list(),
        &store.programs.list(),
        filter,
        bucket,
        now,
    )
}

fn subset(members: &[&CohortEnrollment], status: EnrollmentStatus) -> Vec<CohortEnrollment> {
    members
        .iter()
        .filter(|e| e.enrollment_status == status)
        .map(|e| (*e).clone())
        .collect()
}

fn matches_filter(program: &ProgramDefinition, filter: &CohortFilter) -> bool {
    if let Some(facility_id) = filter.facility_id
        && program.facility_id != facility_id
    {
        return false;
    }
    if let Some(query) = &filter.name_query
        && !program
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
    {
        return false;
    }
    true
}

/// Paid money in the displayed subset, summed in `Decimal` and rounded
/// half-up to 2 places.
fn revenue_of(displayed: &[CohortEnrollment]) -> f64 {
    let total: Decimal = displayed
        .iter()
        .filter(|e| e.payment_status == PaymentStatus::Paid)
        .filter_map(|e| Decimal::from_f64(e.amount))
        .sum();
    total.round_dp(2).to_f64().unwrap_or(0.0)
}
