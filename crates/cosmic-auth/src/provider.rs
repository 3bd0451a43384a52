//! The identity provider seam.
//!
//! Everything the managed backend does (OTP delivery, account storage,
//! popup federation, session bookkeeping) lives behind this trait. The
//! coordinator never sees credentials or tokens beyond what these methods
//! return.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use cosmic_auth_core::{Identity, ProviderError, SessionNotification};

use crate::challenge::ChallengeToken;

/// Ephemeral handle linking an issued OTP challenge to its confirmation.
///
/// Owned by the coordinator for the duration of one verification attempt.
/// Issuing a new challenge replaces (and invalidates) any prior handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPhoneVerification {
    /// Provider-assigned id tying the confirm call to the issued challenge.
    pub verification_id: String,
    /// The normalized number the code was sent to.
    pub phone_number: String,
}

/// A managed identity backend.
///
/// All operations are asynchronous and resolve with either a value or a
/// [`ProviderError`] carrying the provider's machine-readable code. Every
/// successful sign-in, sign-up, or sign-out causes exactly one
/// session-changed notification on the stream returned by [`subscribe`].
///
/// [`subscribe`]: IdentityProvider::subscribe
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Issue a phone challenge: send an OTP to `phone_number`, gated on a
    /// solved anti-bot challenge.
    async fn begin_phone_verification(
        &self,
        phone_number: &str,
        challenge: &ChallengeToken,
    ) -> Result<PendingPhoneVerification, ProviderError>;

    /// Confirm a submitted OTP against a pending verification.
    async fn confirm_phone_code(
        &self,
        pending: &PendingPhoneVerification,
        code: &str,
    ) -> Result<Identity, ProviderError>;

    /// Run the federated Google sign-in popup to completion.
    async fn sign_in_google_popup(&self) -> Result<Identity, ProviderError>;

    /// Create a new email/password account and sign it in.
    async fn create_email_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError>;

    /// Authenticate an existing email/password account.
    async fn sign_in_email_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError>;

    /// Terminate the current session. Succeeds even when no session exists.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Subscribe to session-changed notifications.
    ///
    /// The receiver starts at [`SessionNotification::initial`] (`seq == 0`);
    /// real emissions carry strictly increasing `seq` values in the order
    /// the provider produced them.
    fn subscribe(&self) -> watch::Receiver<SessionNotification>;
}
