//! The session coordinator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use cosmic_auth_core::{
    AuthError, AuthLogger, AuthOptions, Identity, ProviderError, ProviderErrorCode,
    SessionNotification, SessionState,
};

use crate::challenge::{ChallengeFactory, ChallengeSlot};
use crate::phone::normalize_phone_number;
use crate::provider::{IdentityProvider, PendingPhoneVerification};

/// Single source of truth for "who is signed in".
///
/// Subscribes to the provider's session-changed notifications on
/// construction and mirrors them into a `watch` channel of [`SessionState`].
/// The state starts at `Loading` and leaves it exactly once, at the first
/// notification; dependent views gate on [`is_ready`] (or [`wait_ready`])
/// before rendering.
///
/// Cloning is cheap; clones share the same state, pending verification, and
/// challenge slot. The forwarding task stops when the last clone is dropped.
///
/// [`is_ready`]: SessionCoordinator::is_ready
/// [`wait_ready`]: SessionCoordinator::wait_ready
#[derive(Clone)]
pub struct SessionCoordinator {
    provider: Arc<dyn IdentityProvider>,
    challenges: Arc<dyn ChallengeFactory>,
    options: AuthOptions,
    logger: AuthLogger,
    state_tx: Arc<watch::Sender<SessionState>>,
    state_rx: watch::Receiver<SessionState>,
    ready: Arc<AtomicBool>,
    pending: Arc<RwLock<Option<PendingPhoneVerification>>>,
    challenge_slot: Arc<RwLock<ChallengeSlot>>,
    _forwarder: Arc<ForwarderGuard>,
}

/// Aborts the notification-forwarding task when the last coordinator clone
/// is dropped (unsubscribe on shutdown).
struct ForwarderGuard {
    handle: JoinHandle<()>,
}

impl Drop for ForwarderGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl SessionCoordinator {
    /// Create a coordinator and start mirroring provider notifications.
    ///
    /// Must be called within a tokio runtime; the forwarding task is spawned
    /// immediately.
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        challenges: Arc<dyn ChallengeFactory>,
        options: AuthOptions,
    ) -> Self {
        let logger = AuthLogger::new(options.logger.clone());
        let (state_tx, state_rx) = watch::channel(SessionState::Loading);
        let state_tx = Arc::new(state_tx);
        let ready = Arc::new(AtomicBool::new(false));

        let handle = tokio::spawn(Self::forward_notifications(
            provider.subscribe(),
            state_tx.clone(),
            ready.clone(),
            logger.clone(),
        ));

        Self {
            provider,
            challenges,
            options,
            logger,
            state_tx,
            state_rx,
            ready,
            pending: Arc::new(RwLock::new(None)),
            challenge_slot: Arc::new(RwLock::new(ChallengeSlot::new())),
            _forwarder: Arc::new(ForwarderGuard { handle }),
        }
    }

    /// Mirror provider notifications into the session state channel.
    ///
    /// A `watch` receiver observes emissions in order (later emissions may
    /// coalesce earlier unread ones, which is fine: operations here are
    /// user-triggered one at a time, so at most one is in flight).
    async fn forward_notifications(
        mut notifications: watch::Receiver<SessionNotification>,
        state_tx: Arc<watch::Sender<SessionState>>,
        ready: Arc<AtomicBool>,
        logger: AuthLogger,
    ) {
        while notifications.changed().await.is_ok() {
            let notification = notifications.borrow_and_update().clone();
            // seq 0 is the channel's placeholder, not a real emission
            if notification.seq == 0 {
                continue;
            }

            let state = match notification.identity {
                Some(identity) => SessionState::Authenticated(identity),
                None => SessionState::Unauthenticated,
            };

            if !ready.swap(true, Ordering::SeqCst) {
                logger.debug("first session notification received");
            }
            state_tx.send_replace(state);
        }
    }

    // ─── Session state ──────────────────────────────────────────────

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    /// The signed-in identity, if any.
    pub fn current_identity(&self) -> Option<Identity> {
        self.state().identity().cloned()
    }

    /// Whether the first provider notification has arrived.
    ///
    /// Flips `false → true` exactly once per coordinator lifetime; views
    /// that depend on the session must not render before this is `true`.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Wait until the first provider notification has arrived.
    pub async fn wait_ready(&self) {
        let mut rx = self.state_rx.clone();
        while !self.is_ready() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Subscribe to session state changes.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    // ─── Phone / OTP ────────────────────────────────────────────────

    /// Begin phone sign-in: solve the anti-bot challenge, request an OTP
    /// send, and hold the pending verification for [`verify_otp`].
    ///
    /// Any previously created challenge widget is cleared before the new one
    /// is rendered; any prior pending verification is replaced (and thereby
    /// invalidated).
    ///
    /// [`verify_otp`]: SessionCoordinator::verify_otp
    pub async fn sign_in_with_phone(&self, phone_number: &str) -> Result<(), AuthError> {
        if !self.options.phone_auth_enabled {
            return Err(AuthError::PhoneAuthDisabled);
        }

        let normalized = normalize_phone_number(phone_number);

        let verifier = self.challenges.create();
        self.challenge_slot.write().await.replace(verifier.clone());

        let token = verifier
            .render(&self.options.challenge_anchor_id)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("challenge setup failed: {err}"));
                AuthError::ChallengeSetup
            })?;

        let pending = self
            .provider
            .begin_phone_verification(&normalized, &token)
            .await
            .map_err(translate_phone_begin)?;

        self.logger
            .success(&format!("OTP sent to {}", pending.phone_number));
        *self.pending.write().await = Some(pending);
        Ok(())
    }

    /// Confirm a submitted OTP against the pending verification.
    ///
    /// Fails with [`AuthError::NoPendingVerification`] when no challenge was
    /// issued, without touching the provider. The handle is discarded after
    /// the attempt, successful or not; each challenge gets one confirmation.
    pub async fn verify_otp(&self, code: &str) -> Result<Identity, AuthError> {
        let pending = self
            .pending
            .write()
            .await
            .take()
            .ok_or(AuthError::NoPendingVerification)?;

        let identity = self.provider.confirm_phone_code(&pending, code).await?;
        Ok(identity)
    }

    /// Whether a phone verification is awaiting its code.
    pub async fn has_pending_verification(&self) -> bool {
        self.pending.read().await.is_some()
    }

    // ─── Federated ──────────────────────────────────────────────────

    /// Open the Google sign-in popup and wait for the outcome.
    pub async fn sign_in_with_google(&self) -> Result<Identity, AuthError> {
        self.provider
            .sign_in_google_popup()
            .await
            .map_err(translate_google)
    }

    // ─── Email / password ───────────────────────────────────────────

    /// Create a new email/password account.
    pub async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        self.provider
            .create_email_account(email, password)
            .await
            .map_err(translate_sign_up)
    }

    /// Authenticate an existing email/password account.
    pub async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        self.provider
            .sign_in_email_account(email, password)
            .await
            .map_err(translate_sign_in)
    }

    // ─── Sign-out ───────────────────────────────────────────────────

    /// Terminate the session. Safe to call repeatedly while signed out.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        Ok(())
    }
}

impl std::fmt::Debug for SessionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCoordinator")
            .field("state", &*self.state_rx.borrow())
            .field("ready", &self.is_ready())
            .finish()
    }
}

// ─── Per-operation error translation ────────────────────────────────
//
// Known codes become the distinguished variant the operation documents;
// everything else passes through verbatim.

fn translate_phone_begin(err: ProviderError) -> AuthError {
    match err.code {
        ProviderErrorCode::InvalidPhoneNumber => AuthError::Delivery,
        ProviderErrorCode::CaptchaCheckFailed => AuthError::ChallengeSetup,
        _ => AuthError::Provider(err),
    }
}

fn translate_google(err: ProviderError) -> AuthError {
    match err.code {
        ProviderErrorCode::OperationNotAllowed => AuthError::ProviderDisabled,
        ProviderErrorCode::PopupBlocked => AuthError::PopupBlocked,
        ProviderErrorCode::PopupClosedByUser => AuthError::PopupCancelled,
        _ => AuthError::Provider(err),
    }
}

fn translate_sign_up(err: ProviderError) -> AuthError {
    match err.code {
        ProviderErrorCode::EmailAlreadyInUse => AuthError::EmailInUse,
        ProviderErrorCode::WeakPassword => AuthError::WeakPassword,
        _ => AuthError::Provider(err),
    }
}

fn translate_sign_in(err: ProviderError) -> AuthError {
    match err.code {
        ProviderErrorCode::UserNotFound => AuthError::AccountNotFound,
        ProviderErrorCode::WrongPassword => AuthError::InvalidCredentials,
        _ => AuthError::Provider(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_err(code: &str) -> ProviderError {
        ProviderError::from_code(code, "test")
    }

    #[test]
    fn test_google_translation() {
        assert_eq!(
            translate_google(provider_err("auth/operation-not-allowed")),
            AuthError::ProviderDisabled
        );
        assert_eq!(
            translate_google(provider_err("auth/popup-blocked")),
            AuthError::PopupBlocked
        );
        assert_eq!(
            translate_google(provider_err("auth/popup-closed-by-user")),
            AuthError::PopupCancelled
        );
    }

    #[test]
    fn test_google_unknown_code_passes_through() {
        let err = translate_google(provider_err("auth/internal-error"));
        assert!(err.is_passthrough());
        assert_eq!(
            err.provider_code().map(ProviderErrorCode::as_code),
            Some("auth/internal-error")
        );
    }

    #[test]
    fn test_sign_up_translation() {
        assert_eq!(
            translate_sign_up(provider_err("auth/email-already-in-use")),
            AuthError::EmailInUse
        );
        assert_eq!(
            translate_sign_up(provider_err("auth/weak-password")),
            AuthError::WeakPassword
        );
        assert!(translate_sign_up(provider_err("auth/invalid-email")).is_passthrough());
    }

    #[test]
    fn test_sign_in_translation() {
        assert_eq!(
            translate_sign_in(provider_err("auth/user-not-found")),
            AuthError::AccountNotFound
        );
        assert_eq!(
            translate_sign_in(provider_err("auth/wrong-password")),
            AuthError::InvalidCredentials
        );
        // Codes mapped for other operations still pass through here
        assert!(translate_sign_in(provider_err("auth/popup-blocked")).is_passthrough());
    }

    #[test]
    fn test_phone_begin_translation() {
        assert_eq!(
            translate_phone_begin(provider_err("auth/invalid-phone-number")),
            AuthError::Delivery
        );
        assert_eq!(
            translate_phone_begin(provider_err("auth/captcha-check-failed")),
            AuthError::ChallengeSetup
        );
        assert!(translate_phone_begin(provider_err("auth/quota-exceeded")).is_passthrough());
    }
}
