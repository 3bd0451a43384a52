//! Anti-bot challenge widget handling.
//!
//! The widget is a shared resource keyed to a single anchor: creating a
//! second instance against the same anchor without clearing the first is a
//! duplicate-registration error in the real backend. The coordinator
//! therefore owns the active instance in an explicit [`ChallengeSlot`] and
//! clears it before every reissue, instead of parking it in a global.

use async_trait::async_trait;

use cosmic_auth_core::ProviderError;

/// Opaque proof that the caller solved the anti-bot challenge.
///
/// Passed to the provider alongside the OTP send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeToken(String);

impl ChallengeToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One instance of the challenge widget.
#[async_trait]
pub trait ChallengeVerifier: Send + Sync {
    /// Bind the widget to the anchor and produce a solved-challenge token.
    async fn render(&self, anchor_id: &str) -> Result<ChallengeToken, ProviderError>;

    /// Tear the widget down, releasing the anchor for the next instance.
    fn clear(&self);
}

/// Creates a fresh verifier instance per phone sign-in attempt.
pub trait ChallengeFactory: Send + Sync {
    fn create(&self) -> std::sync::Arc<dyn ChallengeVerifier>;
}

/// The coordinator-owned slot for the active widget instance.
///
/// `replace` clears the previous instance before installing the new one;
/// that ordering is the whole point of this type.
#[derive(Default)]
pub struct ChallengeSlot {
    active: Option<std::sync::Arc<dyn ChallengeVerifier>>,
}

impl ChallengeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and drop any prior instance, then install `verifier`.
    pub fn replace(&mut self, verifier: std::sync::Arc<dyn ChallengeVerifier>) {
        if let Some(prev) = self.active.take() {
            prev.clear();
        }
        self.active = Some(verifier);
    }

    /// Clear and drop the active instance, if any.
    pub fn clear(&mut self) {
        if let Some(prev) = self.active.take() {
            prev.clear();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.active.is_some()
    }
}

impl std::fmt::Debug for ChallengeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeSlot")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}

/// A verifier that always solves immediately. For backends that perform
/// their own bot checks (and for tests).
#[derive(Debug, Default)]
pub struct NoopChallengeVerifier;

#[async_trait]
impl ChallengeVerifier for NoopChallengeVerifier {
    async fn render(&self, anchor_id: &str) -> Result<ChallengeToken, ProviderError> {
        Ok(ChallengeToken::new(format!("noop:{anchor_id}")))
    }

    fn clear(&self) {}
}

/// Factory for [`NoopChallengeVerifier`].
#[derive(Debug, Default)]
pub struct NoopChallengeFactory;

impl ChallengeFactory for NoopChallengeFactory {
    fn create(&self) -> std::sync::Arc<dyn ChallengeVerifier> {
        std::sync::Arc::new(NoopChallengeVerifier)
    }
}
