//! Headless flow controllers, one per authenticated page.
//!
//! Each controller wraps the session coordinator and reduces a form
//! submission to a [`FlowOutcome`]: where the app should navigate, or the
//! inline error to show while staying put.

mod dashboard;
mod login;
mod payment;
mod signup;

pub use dashboard::DashboardFlow;
pub use login::LoginFlow;
pub use payment::PaymentFlow;
pub use signup::SignupFlow;

use crate::routes::Route;

/// What the page should do after a flow operation resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Leave the page.
    Navigate(Route),
    /// A verification code is on its way; show the code input.
    AwaitCode,
    /// Stay on the page and show one inline error. Inputs re-enable; the
    /// user decides whether to retry.
    Stay { error: String },
}

impl FlowOutcome {
    fn stay(error: impl ToString) -> Self {
        FlowOutcome::Stay {
            error: error.to_string(),
        }
    }
}
