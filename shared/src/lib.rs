//! Shared types for the studio booking core
//!
//! Model types, mutation-intent DTOs, the error taxonomy and small
//! time/id utilities used across the workspace.

pub mod error;
pub mod intent;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{DomainError, DomainResult};
pub use intent::{IntentPatch, IntentResult, StudioIntent};
