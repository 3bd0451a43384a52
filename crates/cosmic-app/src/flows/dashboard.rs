//! The dashboard page flow.

use cosmic_auth::SessionCoordinator;
use cosmic_auth_core::Identity;

use crate::flows::FlowOutcome;
use crate::routes::Route;

/// Controller for the signed-in dashboard: exposes the identity's display
/// fields and handles logout.
pub struct DashboardFlow {
    coordinator: SessionCoordinator,
}

impl DashboardFlow {
    pub fn new(coordinator: SessionCoordinator) -> Self {
        Self { coordinator }
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.coordinator.current_identity()
    }

    /// The contact line shown under the avatar: phone number first, then
    /// email.
    pub fn contact_label(&self) -> Option<String> {
        let identity = self.identity()?;
        identity.phone_number.or(identity.email)
    }

    /// Single-character avatar placeholder derived from the contact label.
    pub fn avatar_initial(&self) -> char {
        self.contact_label()
            .and_then(|label| label.chars().next())
            .unwrap_or('?')
    }

    /// Sign out and return to the login page.
    pub async fn logout(&self) -> FlowOutcome {
        match self.coordinator.sign_out().await {
            Ok(()) => FlowOutcome::Navigate(Route::Login),
            Err(err) => FlowOutcome::stay(err),
        }
    }
}
