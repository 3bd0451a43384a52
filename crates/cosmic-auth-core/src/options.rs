//! Coordinator options.

use crate::logger::LoggerConfig;

/// Configuration for the session coordinator.
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// Whether the phone/OTP path is available on the coordinator.
    ///
    /// The login flow carries its own, independently-toggled switch; turning
    /// this off makes `sign_in_with_phone` fail with `PhoneAuthDisabled`
    /// without touching the provider. `verify_otp` then has no pending
    /// verification to confirm and fails with `NoPendingVerification`.
    pub phone_auth_enabled: bool,

    /// DOM-style anchor id the anti-bot challenge widget binds to.
    pub challenge_anchor_id: String,

    /// Logger configuration.
    pub logger: LoggerConfig,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            phone_auth_enabled: true,
            challenge_anchor_id: "recaptcha-container".to_string(),
            logger: LoggerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AuthOptions::default();
        assert!(opts.phone_auth_enabled);
        assert_eq!(opts.challenge_anchor_id, "recaptcha-container");
        assert!(!opts.logger.disabled);
    }
}
