//! # Cosmic App
//!
//! Headless route flows for Cosmic Connect. Each page's behavior lives in a
//! flow controller that takes form input and resolves to a [`FlowOutcome`]:
//! navigate somewhere, await a verification code, or stay and show an
//! inline error. Rendering is a separate concern and not modeled here.

mod flows;
mod routes;

pub use flows::{DashboardFlow, FlowOutcome, LoginFlow, PaymentFlow, SignupFlow};
pub use routes::Route;
