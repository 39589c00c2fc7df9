//! Domain models
//!
//! One file per entity, serde-derived. Stored instants are i64 epoch
//! milliseconds; money fields are f64 with all arithmetic done in
//! `rust_decimal` inside the engine.

// Programs and bookings
pub mod enrollment;
pub mod program;

// Prepaid products
pub mod membership;
pub mod pass;

// Loyalty
pub mod rewards;

// Re-exports
pub use enrollment::{CohortEnrollment, EnrollmentStatus, PaymentStatus};
pub use membership::{
    MembershipDisplayStatus, MembershipPlan, MembershipStatus, UserMembership,
};
pub use pass::{ConsumptionEvent, CreditPass, PassDisplayStatus, PurchasedPass};
pub use program::{PricingMode, ProgramDefinition, Recurrence};
pub use rewards::{RewardKind, RewardTransaction};
