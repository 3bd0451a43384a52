//! The signup page flow.

use cosmic_auth::SessionCoordinator;

use crate::flows::FlowOutcome;
use crate::routes::Route;

/// Controller for the signup page: email/password account creation plus
/// Google sign-up.
pub struct SignupFlow {
    coordinator: SessionCoordinator,
}

impl SignupFlow {
    pub fn new(coordinator: SessionCoordinator) -> Self {
        Self { coordinator }
    }

    /// Create an account and sign it in.
    pub async fn submit_email(&self, email: &str, password: &str) -> FlowOutcome {
        match self.coordinator.sign_up_with_email(email, password).await {
            Ok(_) => FlowOutcome::Navigate(Route::Home),
            Err(err) => FlowOutcome::stay(err),
        }
    }

    /// Google popup sign-up (same provider operation as sign-in).
    pub async fn submit_google(&self) -> FlowOutcome {
        match self.coordinator.sign_in_with_google().await {
            Ok(_) => FlowOutcome::Navigate(Route::Home),
            Err(err) => FlowOutcome::stay(err),
        }
    }
}
