use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::{watch, RwLock};

use cosmic_auth::{ChallengeToken, IdentityProvider, PendingPhoneVerification};
use cosmic_auth_core::{Identity, ProviderError, ProviderErrorCode, SessionNotification};

/// Configured outcome for the simulated Google popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupOutcome {
    /// Popup completes and signs the Google identity in.
    #[default]
    Success,
    /// Browser blocks the popup.
    Blocked,
    /// User closes the popup without finishing.
    ClosedByUser,
    /// The Google sign-in method is disabled for the project.
    Disabled,
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    identity: Identity,
}

#[derive(Debug, Clone)]
struct PendingOtp {
    phone_number: String,
    code: String,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    pending: HashMap<String, PendingOtp>,
    popup_outcome: PopupOutcome,
    google_identity: Option<Identity>,
    last_issued_code: Option<String>,
    seq: u64,
}

/// In-memory identity provider.
#[derive(Clone)]
pub struct MemoryProvider {
    inner: Arc<RwLock<Inner>>,
    notify_tx: Arc<watch::Sender<SessionNotification>>,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProvider {
    pub fn new() -> Self {
        let (notify_tx, _) = watch::channel(SessionNotification::initial());
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            notify_tx: Arc::new(notify_tx),
        }
    }

    /// Configure the simulated Google popup outcome.
    pub async fn set_popup_outcome(&self, outcome: PopupOutcome) {
        self.inner.write().await.popup_outcome = outcome;
    }

    /// Override the identity the Google popup signs in on success.
    pub async fn set_google_identity(&self, identity: Identity) {
        self.inner.write().await.google_identity = Some(identity);
    }

    /// The OTP code issued by the most recent phone challenge. Test hook.
    pub async fn last_issued_code(&self) -> Option<String> {
        self.inner.read().await.last_issued_code.clone()
    }

    /// Number of registered email accounts.
    pub async fn account_count(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    /// Emit one session-changed notification. Called with the lock held so
    /// seq assignment and emission order agree.
    fn emit(&self, inner: &mut Inner, identity: Option<Identity>) {
        inner.seq += 1;
        let _ = self.notify_tx.send(SessionNotification {
            seq: inner.seq,
            identity,
        });
    }

    fn default_google_identity() -> Identity {
        Identity {
            uid: nanoid::nanoid!(),
            email: Some("user@gmail.com".to_string()),
            phone_number: None,
            display_name: Some("Google User".to_string()),
            photo_url: None,
            email_verified: true,
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryProvider {
    async fn begin_phone_verification(
        &self,
        phone_number: &str,
        challenge: &ChallengeToken,
    ) -> Result<PendingPhoneVerification, ProviderError> {
        if challenge.as_str().is_empty() {
            return Err(ProviderError::new(
                ProviderErrorCode::CaptchaCheckFailed,
                "challenge token rejected",
            ));
        }
        // At least 8 digits after the + (dial code included)
        let digits = phone_number.strip_prefix('+').unwrap_or("");
        if digits.len() < 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ProviderError::new(
                ProviderErrorCode::InvalidPhoneNumber,
                format!("invalid phone number: {phone_number}"),
            ));
        }

        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        let verification_id = nanoid::nanoid!();

        let mut inner = self.inner.write().await;
        inner.pending.insert(
            verification_id.clone(),
            PendingOtp {
                phone_number: phone_number.to_string(),
                code: code.clone(),
            },
        );
        inner.last_issued_code = Some(code);

        Ok(PendingPhoneVerification {
            verification_id,
            phone_number: phone_number.to_string(),
        })
    }

    async fn confirm_phone_code(
        &self,
        pending: &PendingPhoneVerification,
        code: &str,
    ) -> Result<Identity, ProviderError> {
        let mut inner = self.inner.write().await;

        let otp = inner.pending.remove(&pending.verification_id).ok_or_else(|| {
            ProviderError::from_code("auth/code-expired", "verification expired or already used")
        })?;

        if otp.code != code {
            return Err(ProviderError::from_code(
                "auth/invalid-verification-code",
                "the code entered does not match",
            ));
        }

        let identity = Identity {
            uid: nanoid::nanoid!(),
            email: None,
            phone_number: Some(otp.phone_number),
            display_name: None,
            photo_url: None,
            email_verified: false,
        };
        self.emit(&mut inner, Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in_google_popup(&self) -> Result<Identity, ProviderError> {
        let mut inner = self.inner.write().await;
        match inner.popup_outcome {
            PopupOutcome::Success => {
                let identity = inner
                    .google_identity
                    .clone()
                    .unwrap_or_else(Self::default_google_identity);
                self.emit(&mut inner, Some(identity.clone()));
                Ok(identity)
            }
            PopupOutcome::Blocked => Err(ProviderError::new(
                ProviderErrorCode::PopupBlocked,
                "popup blocked by the browser",
            )),
            PopupOutcome::ClosedByUser => Err(ProviderError::new(
                ProviderErrorCode::PopupClosedByUser,
                "popup closed before completing sign-in",
            )),
            PopupOutcome::Disabled => Err(ProviderError::new(
                ProviderErrorCode::OperationNotAllowed,
                "google sign-in is not enabled for this project",
            )),
        }
    }

    async fn create_email_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        let mut inner = self.inner.write().await;

        if inner.accounts.contains_key(email) {
            return Err(ProviderError::new(
                ProviderErrorCode::EmailAlreadyInUse,
                format!("an account already exists for {email}"),
            ));
        }
        if password.len() < 6 {
            return Err(ProviderError::new(
                ProviderErrorCode::WeakPassword,
                "password must be at least 6 characters",
            ));
        }

        let identity = Identity {
            uid: nanoid::nanoid!(),
            email: Some(email.to_string()),
            phone_number: None,
            display_name: None,
            photo_url: None,
            email_verified: false,
        };
        inner.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        self.emit(&mut inner, Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in_email_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        let mut inner = self.inner.write().await;

        let account = inner.accounts.get(email).cloned().ok_or_else(|| {
            ProviderError::new(
                ProviderErrorCode::UserNotFound,
                format!("no account for {email}"),
            )
        })?;
        if account.password != password {
            return Err(ProviderError::new(
                ProviderErrorCode::WrongPassword,
                "password does not match",
            ));
        }

        self.emit(&mut inner, Some(account.identity.clone()));
        Ok(account.identity)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let mut inner = self.inner.write().await;
        self.emit(&mut inner, None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<SessionNotification> {
        self.notify_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ChallengeToken {
        ChallengeToken::new("solved")
    }

    #[tokio::test]
    async fn test_email_account_lifecycle() {
        let provider = MemoryProvider::new();

        let created = provider
            .create_email_account("alice@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(created.email.as_deref(), Some("alice@example.com"));
        assert_eq!(provider.account_count().await, 1);

        let signed_in = provider
            .sign_in_email_account("alice@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(signed_in.uid, created.uid);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let provider = MemoryProvider::new();
        provider
            .create_email_account("alice@example.com", "hunter22")
            .await
            .unwrap();
        let err = provider
            .create_email_account("alice@example.com", "other-password")
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::EmailAlreadyInUse);
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let provider = MemoryProvider::new();
        let err = provider
            .create_email_account("x@y.com", "abc")
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::WeakPassword);
    }

    #[tokio::test]
    async fn test_wrong_credentials() {
        let provider = MemoryProvider::new();
        let err = provider
            .sign_in_email_account("missing@y.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::UserNotFound);

        provider
            .create_email_account("bob@example.com", "correct-horse")
            .await
            .unwrap();
        let err = provider
            .sign_in_email_account("bob@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::WrongPassword);
    }

    #[tokio::test]
    async fn test_phone_otp_round_trip() {
        let provider = MemoryProvider::new();
        let pending = provider
            .begin_phone_verification("+919876543210", &token())
            .await
            .unwrap();
        let code = provider.last_issued_code().await.unwrap();

        let identity = provider.confirm_phone_code(&pending, &code).await.unwrap();
        assert_eq!(identity.phone_number.as_deref(), Some("+919876543210"));
    }

    #[tokio::test]
    async fn test_phone_rejects_bad_numbers() {
        let provider = MemoryProvider::new();
        for bad in ["+", "+123", "+91abc4567890", "919876543210"] {
            let err = provider
                .begin_phone_verification(bad, &token())
                .await
                .unwrap_err();
            assert_eq!(err.code, ProviderErrorCode::InvalidPhoneNumber, "{bad}");
        }
    }

    #[tokio::test]
    async fn test_wrong_otp_and_reuse() {
        let provider = MemoryProvider::new();
        let pending = provider
            .begin_phone_verification("+919876543210", &token())
            .await
            .unwrap();

        let err = provider
            .confirm_phone_code(&pending, "000000")
            .await
            .unwrap_err();
        assert_eq!(err.code.as_code(), "auth/invalid-verification-code");

        // The failed attempt consumed the pending verification
        let code = provider.last_issued_code().await.unwrap();
        let err = provider.confirm_phone_code(&pending, &code).await.unwrap_err();
        assert_eq!(err.code.as_code(), "auth/code-expired");
    }

    #[tokio::test]
    async fn test_popup_outcomes() {
        let provider = MemoryProvider::new();

        provider.set_popup_outcome(PopupOutcome::Blocked).await;
        let err = provider.sign_in_google_popup().await.unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::PopupBlocked);

        provider.set_popup_outcome(PopupOutcome::ClosedByUser).await;
        let err = provider.sign_in_google_popup().await.unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::PopupClosedByUser);

        provider.set_popup_outcome(PopupOutcome::Disabled).await;
        let err = provider.sign_in_google_popup().await.unwrap_err();
        assert_eq!(err.code, ProviderErrorCode::OperationNotAllowed);

        provider.set_popup_outcome(PopupOutcome::Success).await;
        let identity = provider.sign_in_google_popup().await.unwrap();
        assert!(identity.email_verified);
    }

    #[tokio::test]
    async fn test_notifications_carry_increasing_seq() {
        let provider = MemoryProvider::new();
        let mut rx = provider.subscribe();
        assert_eq!(rx.borrow().seq, 0);

        provider
            .create_email_account("alice@example.com", "hunter22")
            .await
            .unwrap();
        rx.changed().await.unwrap();
        let first = rx.borrow_and_update().clone();
        assert_eq!(first.seq, 1);
        assert!(first.identity.is_some());

        provider.sign_out().await.unwrap();
        rx.changed().await.unwrap();
        let second = rx.borrow_and_update().clone();
        assert_eq!(second.seq, 2);
        assert!(second.identity.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let provider = MemoryProvider::new();
        provider.sign_out().await.unwrap();
        provider.sign_out().await.unwrap();
    }
}
