//! The login page flow.

use cosmic_auth::SessionCoordinator;
use cosmic_auth_core::AuthError;

use crate::flows::FlowOutcome;
use crate::routes::Route;

/// Controller for the login page: email/password, Google, and phone/OTP
/// entry points, each resolving to a navigation or an inline error.
///
/// Phone login ships disabled: the inputs render but submitting surfaces
/// the feature-unavailable message without touching the provider. Flip it
/// on with [`with_phone_login`] once SMS delivery is turned back on.
///
/// [`with_phone_login`]: LoginFlow::with_phone_login
pub struct LoginFlow {
    coordinator: SessionCoordinator,
    phone_login_enabled: bool,
}

impl LoginFlow {
    pub fn new(coordinator: SessionCoordinator) -> Self {
        Self {
            coordinator,
            phone_login_enabled: false,
        }
    }

    pub fn with_phone_login(mut self, enabled: bool) -> Self {
        self.phone_login_enabled = enabled;
        self
    }

    /// Email/password sign-in. Success lands on the home page.
    pub async fn submit_email(&self, email: &str, password: &str) -> FlowOutcome {
        match self.coordinator.sign_in_with_email(email, password).await {
            Ok(_) => FlowOutcome::Navigate(Route::Home),
            Err(err) => FlowOutcome::stay(err),
        }
    }

    /// Google popup sign-in.
    pub async fn submit_google(&self) -> FlowOutcome {
        match self.coordinator.sign_in_with_google().await {
            Ok(_) => FlowOutcome::Navigate(Route::Home),
            Err(err) => FlowOutcome::stay(err),
        }
    }

    /// Request an OTP for `phone_number`. On success the page should show
    /// the code input and follow up with [`submit_code`].
    ///
    /// [`submit_code`]: LoginFlow::submit_code
    pub async fn submit_phone(&self, phone_number: &str) -> FlowOutcome {
        if !self.phone_login_enabled {
            return FlowOutcome::stay(AuthError::PhoneAuthDisabled);
        }
        match self.coordinator.sign_in_with_phone(phone_number).await {
            Ok(()) => FlowOutcome::AwaitCode,
            Err(err) => FlowOutcome::stay(err),
        }
    }

    /// Confirm the OTP requested by [`submit_phone`].
    ///
    /// [`submit_phone`]: LoginFlow::submit_phone
    pub async fn submit_code(&self, code: &str) -> FlowOutcome {
        match self.coordinator.verify_otp(code).await {
            Ok(_) => FlowOutcome::Navigate(Route::Home),
            Err(err) => FlowOutcome::stay(err),
        }
    }
}
