// Error vocabulary for the auth SDK.
//
// The identity provider resolves every failed operation with a
// machine-readable code string plus a message. Known codes are a closed enum;
// anything else is carried verbatim in `Other` so new backend codes are never
// swallowed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error codes emitted by the identity provider.
///
/// The wire form is the provider's `auth/...` code string; round-trip via
/// [`ProviderErrorCode::from_code`] and [`ProviderErrorCode::as_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderErrorCode {
    /// The requested sign-in method is disabled for this project.
    OperationNotAllowed,
    /// The federated sign-in popup was blocked by the browser.
    PopupBlocked,
    /// The user closed the federated sign-in popup.
    PopupClosedByUser,
    /// An account already exists for this email.
    EmailAlreadyInUse,
    /// The password does not meet the provider's policy (minimum 6 characters).
    WeakPassword,
    /// No account exists for the given email.
    UserNotFound,
    /// The password does not match the account.
    WrongPassword,
    /// The phone number was rejected by the provider.
    InvalidPhoneNumber,
    /// The anti-bot challenge token was rejected.
    CaptchaCheckFailed,
    /// Any code this SDK does not recognize, preserved verbatim.
    Other(String),
}

impl ProviderErrorCode {
    /// Parse a provider code string.
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/operation-not-allowed" => Self::OperationNotAllowed,
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/popup-closed-by-user" => Self::PopupClosedByUser,
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/weak-password" => Self::WeakPassword,
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/invalid-phone-number" => Self::InvalidPhoneNumber,
            "auth/captcha-check-failed" => Self::CaptchaCheckFailed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider's code string for this variant.
    pub fn as_code(&self) -> &str {
        match self {
            Self::OperationNotAllowed => "auth/operation-not-allowed",
            Self::PopupBlocked => "auth/popup-blocked",
            Self::PopupClosedByUser => "auth/popup-closed-by-user",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::InvalidPhoneNumber => "auth/invalid-phone-number",
            Self::CaptchaCheckFailed => "auth/captcha-check-failed",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Raw error shape every provider operation resolves with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: ProviderErrorCode,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Build from the provider's raw code string.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::from_code(code), message)
    }
}

/// Errors surfaced by the session coordinator.
///
/// Each variant carries the human-readable message a view displays inline.
/// Codes the coordinator does not distinguish for a given operation pass
/// through untouched as [`AuthError::Provider`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The anti-bot challenge widget could not be initialized.
    #[error("Could not set up the verification challenge. Please reload and try again.")]
    ChallengeSetup,

    /// The provider rejected the phone number for OTP delivery.
    #[error("Could not send a verification code to this number. Please check it and try again.")]
    Delivery,

    /// `verify_otp` was called with no pending phone challenge.
    #[error("No verification in progress. Request a code first.")]
    NoPendingVerification,

    /// Federated sign-in is disabled for this project.
    #[error("Google Sign-In is not enabled. Please contact the administrator.")]
    ProviderDisabled,

    /// The browser blocked the sign-in popup.
    #[error("Pop-up was blocked by your browser. Please allow pop-ups for this site.")]
    PopupBlocked,

    /// The user closed the sign-in popup.
    #[error("Sign-in was cancelled. Please try again.")]
    PopupCancelled,

    /// An account already exists for this email.
    #[error("This email is already registered. Please try logging in instead.")]
    EmailInUse,

    /// The password fails the provider's 6-character minimum.
    #[error("Password should be at least 6 characters long.")]
    WeakPassword,

    /// No account exists for this email.
    #[error("No account found with this email. Please sign up first.")]
    AccountNotFound,

    /// The password does not match the account.
    #[error("Incorrect password. Please try again.")]
    InvalidCredentials,

    /// Phone authentication is toggled off in the coordinator options.
    #[error("This feature is temporarily unavailable.")]
    PhoneAuthDisabled,

    /// Any provider error the invoked operation does not distinguish.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AuthError {
    /// The provider code behind this error, when it came from the provider.
    pub fn provider_code(&self) -> Option<&ProviderErrorCode> {
        match self {
            Self::Provider(err) => Some(&err.code),
            _ => None,
        }
    }

    /// Whether this is an unrecognized code passed through verbatim.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            "auth/operation-not-allowed",
            "auth/popup-blocked",
            "auth/popup-closed-by-user",
            "auth/email-already-in-use",
            "auth/weak-password",
            "auth/user-not-found",
            "auth/wrong-password",
            "auth/invalid-phone-number",
            "auth/captcha-check-failed",
        ] {
            assert_eq!(ProviderErrorCode::from_code(code).as_code(), code);
        }
    }

    #[test]
    fn test_unknown_code_preserved_verbatim() {
        let code = ProviderErrorCode::from_code("auth/too-many-requests");
        assert_eq!(code, ProviderErrorCode::Other("auth/too-many-requests".into()));
        assert_eq!(code.as_code(), "auth/too-many-requests");
    }

    #[test]
    fn test_weak_password_message_mentions_minimum() {
        let msg = AuthError::WeakPassword.to_string();
        assert!(msg.contains("6 characters"));
    }

    #[test]
    fn test_passthrough_exposes_code() {
        let err = AuthError::from(ProviderError::from_code(
            "auth/network-request-failed",
            "network down",
        ));
        assert!(err.is_passthrough());
        assert_eq!(
            err.provider_code().map(ProviderErrorCode::as_code),
            Some("auth/network-request-failed")
        );
        assert!(AuthError::PopupBlocked.provider_code().is_none());
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::from_code("auth/user-not-found", "no such user");
        assert_eq!(err.to_string(), "auth/user-not-found: no such user");
    }
}
