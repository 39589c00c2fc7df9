//! Repository Module
//!
//! Per-entity repository contracts over in-memory keyed collections.
//! Domain logic depends only on the [`Repository`] contract, never on a
//! concrete collection type, so callers can supply their own backing
//! store later without touching the engine.

mod memory;

pub use memory::MemoryRepository;

use shared::error::{DomainError, DomainResult};
use shared::models::{
    CohortEnrollment, ConsumptionEvent, CreditPass, MembershipPlan, ProgramDefinition,
    PurchasedPass, RewardTransaction, UserMembership,
};

/// Anything stored under an i64 id.
pub trait Entity: Clone {
    fn id(&self) -> i64;
}

impl Entity for ProgramDefinition {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for CohortEnrollment {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for CreditPass {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for PurchasedPass {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for MembershipPlan {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for UserMembership {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for RewardTransaction {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for ConsumptionEvent {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Keyed-collection contract (single-writer, synchronous).
pub trait Repository<T: Entity> {
    fn get(&self, id: i64) -> Option<T>;
    /// All entries, ordered ascending by id. Snowflake ids are
    /// time-ordered, so this is creation order.
    fn list(&self) -> Vec<T>;
    fn insert(&self, entity: T);
    /// Atomic replace-by-id: readers never observe a partially-applied
    /// record. Returns false when the id is missing.
    fn update(&self, id: i64, apply: impl FnOnce(&mut T)) -> bool;
    fn delete(&self, id: i64) -> bool;
}

/// All collections the booking core operates over.
///
/// `rewards` and `consumptions` are append-only logs by convention: the
/// engine only ever inserts into them.
#[derive(Debug, Default)]
pub struct StudioStore {
    pub programs: MemoryRepository<ProgramDefinition>,
    pub enrollments: MemoryRepository<CohortEnrollment>,
    pub credit_passes: MemoryRepository<CreditPass>,
    pub purchased_passes: MemoryRepository<PurchasedPass>,
    pub membership_plans: MemoryRepository<MembershipPlan>,
    pub memberships: MemoryRepository<UserMembership>,
    pub rewards: MemoryRepository<RewardTransaction>,
    pub consumptions: MemoryRepository<ConsumptionEvent>,
}

impl StudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete a program template.
    ///
    /// Rejected while any enrollment references it, cancelled ones
    /// included — enrollments are never physically deleted, so the
    /// reference stays live forever.
    pub fn delete_program(&self, id: i64) -> DomainResult<()> {
        if self.programs.get(id).is_none() {
            return Err(DomainError::NotFound(format!("program {id}")));
        }
        let referencing = self
            .enrollments
            .list()
            .iter()
            .filter(|e| e.program_id == id)
            .count();
        if referencing > 0 {
            return Err(DomainError::Validation(format!(
                "program {id} is referenced by {referencing} enrollment(s)"
            )));
        }
        self.programs.delete(id);
        tracing::info!(program_id = id, "program deleted");
        Ok(())
    }

    /// Delete a credit-pass catalog entry. Rejected while any purchased
    /// instance references it.
    pub fn delete_credit_pass(&self, id: i64) -> DomainResult<()> {
        if self.credit_passes.get(id).is_none() {
            return Err(DomainError::NotFound(format!("credit pass {id}")));
        }
        let referencing = self
            .purchased_passes
            .list()
            .iter()
            .filter(|p| p.credit_pass_id == id)
            .count();
        if referencing > 0 {
            return Err(DomainError::Validation(format!(
                "credit pass {id} is referenced by {referencing} purchased pass(es)"
            )));
        }
        self.credit_passes.delete(id);
        tracing::info!(credit_pass_id = id, "credit pass deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EnrollmentStatus, PaymentStatus, PricingMode, Recurrence};

    fn make_program(id: i64) -> ProgramDefinition {
        ProgramDefinition {
            id,
            name: format!("Program {id}"),
            facility_id: 1,
            trainer_id: 1,
            recurrence: Recurrence {
                weekdays: vec![1, 3],
                start_time: "18:00".to_string(),
                duration_minutes: 60,
                num_weeks: 4,
            },
            capacity: 12,
            pricing_mode: PricingMode::Flat,
            amount: 80.0,
            is_published: true,
            created_at: 0,
        }
    }

    fn make_enrollment(id: i64, program_id: i64) -> CohortEnrollment {
        CohortEnrollment {
            id,
            program_id,
            cohort_start_ts: 1_000_000,
            member_id: 7,
            amount: 80.0,
            payment_status: PaymentStatus::Paid,
            enrollment_status: EnrollmentStatus::Active,
            cancelled_at: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_delete_program_rejected_while_referenced() {
        let store = StudioStore::new();
        store.programs.insert(make_program(1));
        store.enrollments.insert(make_enrollment(10, 1));

        let err = store.delete_program(1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.programs.get(1).is_some());
    }

    #[test]
    fn test_delete_program_rejected_even_for_cancelled_references() {
        let store = StudioStore::new();
        store.programs.insert(make_program(1));
        let mut e = make_enrollment(10, 1);
        e.enrollment_status = EnrollmentStatus::Cancelled;
        e.cancelled_at = Some(500_000);
        store.enrollments.insert(e);

        assert!(store.delete_program(1).is_err());
    }

    #[test]
    fn test_delete_program_ok_when_unreferenced() {
        let store = StudioStore::new();
        store.programs.insert(make_program(1));
        store.programs.insert(make_program(2));
        store.enrollments.insert(make_enrollment(10, 2));

        assert!(store.delete_program(1).is_ok());
        assert!(store.programs.get(1).is_none());
        // Sibling untouched
        assert!(store.programs.get(2).is_some());
    }

    #[test]
    fn test_delete_program_missing_is_not_found() {
        let store = StudioStore::new();
        let err = store.delete_program(99).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_delete_credit_pass_rejected_while_referenced() {
        let store = StudioStore::new();
        store.credit_passes.insert(CreditPass {
            id: 5,
            name: "10-pack".to_string(),
            price: 120.0,
            total_credits: 10,
            persons_per_booking: 1,
            eligible_class_ids: vec![],
            stock: 20,
            is_active: true,
            validity_days: None,
            created_at: 0,
        });
        store.purchased_passes.insert(PurchasedPass {
            id: 50,
            credit_pass_id: 5,
            member_id: 7,
            total_credits: 10,
            remaining_credits: 10,
            validity_until: None,
            purchased_at: 0,
        });

        let err = store.delete_credit_pass(5).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
