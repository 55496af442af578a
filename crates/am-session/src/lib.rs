//! am-session
//!
//! The client-resident synchronization core: one persisted identity
//! scalar, one cached current-user record, per-field-group edit
//! lifecycles, and the two relationship list projections. Everything here
//! assumes a single authoritative remote source of truth and a
//! short-lived, single-device cache.

pub mod error;
pub mod field_group;
pub mod hydrator;
pub mod identity;
pub mod logger;
pub mod relationships;
pub mod session;
pub mod user_cache;

pub use error::{Result, SessionError};
pub use field_group::{FieldGroup, FieldGroupController, GroupStatus, ReconcileMode};
pub use hydrator::{EntityHydrator, HydrationOutcome};
pub use identity::IdentityStore;
pub use identity::error::IdentityError;
pub use relationships::RelationshipSync;
pub use session::Session;
pub use user_cache::UserCache;

#[cfg(test)]
mod tests;
