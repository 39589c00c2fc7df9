//! Studio booking & ledger core
//!
//! Booking-lifecycle and financial-ledger logic for recurring program
//! cohorts, consumable credit passes, time-boxed memberships and the
//! loyalty points ledger.
//!
//! Everything is single-writer, synchronous and in-memory. Query functions
//! are pure and take an explicit `now` in epoch milliseconds, never a
//! global clock; the three mutation intents ([`intents::apply_intent`])
//! each touch one record by id and return the partial-field patch they
//! applied.

pub mod cohorts;
pub mod intents;
pub mod memberships;
pub mod passes;
pub mod rewards;
pub mod store;

pub use intents::apply_intent;
pub use store::StudioStore;
