//! The payment page flow.

use cosmic_checkout::{find_plan, plan_catalog, CheckoutInitiator, Plan};

/// Controller for the payment page: lists the plan catalog and opens the
/// billing widget for the chosen plan.
pub struct PaymentFlow {
    initiator: CheckoutInitiator,
    plans: Vec<Plan>,
}

impl PaymentFlow {
    pub fn new(initiator: CheckoutInitiator) -> Self {
        Self {
            initiator,
            plans: plan_catalog(),
        }
    }

    /// The plans to render, in display order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Open checkout for the plan with the given title. Returns `false` if
    /// no such plan exists; otherwise control passes to the widget and the
    /// page stays put.
    pub async fn purchase(&self, title: &str) -> bool {
        let Some(plan) = find_plan(&self.plans, title) else {
            return false;
        };
        self.initiator.initiate_checkout(plan.price).await;
        true
    }
}
