//! # Cosmic Auth
//!
//! The session coordinator: the single source of truth for "who is signed
//! in". It wraps a managed identity provider (phone/OTP, email/password,
//! Google popup) behind the [`IdentityProvider`] trait, translates the
//! provider's error codes into the typed [`AuthError`] taxonomy, and exposes
//! the current [`SessionState`] through a `tokio::sync::watch` channel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cosmic_auth::{SessionCoordinator, NoopChallengeFactory};
//! use cosmic_auth_core::AuthOptions;
//! use cosmic_auth_memory::MemoryProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(MemoryProvider::new());
//!     let coordinator = SessionCoordinator::new(
//!         provider,
//!         Arc::new(NoopChallengeFactory),
//!         AuthOptions::default(),
//!     );
//!
//!     coordinator.sign_up_with_email("alice@example.com", "hunter22").await?;
//!     assert!(coordinator.current_identity().is_some());
//!
//!     coordinator.sign_out().await?;
//!     Ok(())
//! }
//! ```

mod challenge;
mod coordinator;
mod phone;
mod provider;

pub use challenge::{
    ChallengeFactory, ChallengeSlot, ChallengeToken, ChallengeVerifier, NoopChallengeFactory,
    NoopChallengeVerifier,
};
pub use coordinator::SessionCoordinator;
pub use phone::normalize_phone_number;
pub use provider::{IdentityProvider, PendingPhoneVerification};

pub use cosmic_auth_core::{
    AuthError, AuthOptions, Identity, ProviderError, ProviderErrorCode, SessionNotification,
    SessionState,
};
