//! # Cosmic Checkout
//!
//! The subscription-purchase side of Cosmic Connect: a static plan catalog
//! and a checkout initiator that hands the monetary transaction to an
//! external billing widget behind the [`BillingWidget`] trait.
//!
//! The initiator tracks nothing after `open`: the widget's success callback
//! surfaces the provider's transaction id to the user and that is the whole
//! "verification". There is no server-side confirmation or receipt
//! persistence here, a known integrity gap in the product.

mod initiator;
mod plans;
mod widget;

pub use initiator::{AlertSink, CheckoutConfig, CheckoutInitiator};
pub use plans::{find_plan, plan_catalog, Plan, PlanCategory};
pub use widget::{BillingWidget, CheckoutOptions, PaymentHandler, PaymentResponse, Prefill, Theme};
