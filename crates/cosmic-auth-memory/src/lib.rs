//! In-memory identity provider.
//!
//! HashMap-backed backend implementing the `IdentityProvider` trait. All
//! state lives in an `Arc<RwLock<...>>` and is lost on drop. Used by the
//! coordinator's test suites and for local development; it enforces the same
//! account policies the managed backend would (duplicate emails, the
//! 6-character password minimum, unknown accounts, bad passwords) and emits
//! one session-changed notification per successful sign-in/up/out.

mod provider;

pub use provider::{MemoryProvider, PopupOutcome};
