//! The checkout initiator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::widget::{BillingWidget, CheckoutOptions, PaymentResponse, Prefill, Theme};

/// Blocking, user-facing alert surface.
///
/// Widget load failure and payment confirmation both go through here; they
/// are messages to a human, not typed errors.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Merchant-side configuration for the billing widget.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Merchant identifier issued by the billing provider.
    pub key_id: String,
    pub merchant_name: String,
    pub description: String,
    /// ISO currency code; amounts convert to this currency's minor unit.
    pub currency: String,
    pub theme_color: String,
    pub prefill: Prefill,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            merchant_name: "Cosmic Connect".to_string(),
            description: "Astrology Consultation Payment".to_string(),
            currency: "INR".to_string(),
            theme_color: "#7B2CBF".to_string(),
            prefill: Prefill {
                name: "User Name".to_string(),
                email: "user@example.com".to_string(),
                contact: "9999999999".to_string(),
            },
        }
    }
}

/// Presents plans and delegates the monetary transaction to the widget.
pub struct CheckoutInitiator {
    widget: Arc<dyn BillingWidget>,
    alerts: Arc<dyn AlertSink>,
    config: CheckoutConfig,
    loaded: AtomicBool,
}

impl CheckoutInitiator {
    pub fn new(
        widget: Arc<dyn BillingWidget>,
        alerts: Arc<dyn AlertSink>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            widget,
            alerts,
            config,
            loaded: AtomicBool::new(false),
        }
    }

    /// Open the billing widget for `amount` whole currency units.
    ///
    /// Loads the widget script on first use (skipped once loaded). A load
    /// failure surfaces as a blocking alert and nothing else happens. The
    /// success handler only announces the provider's transaction id; no
    /// completion tracking or server-side verification follows.
    pub async fn initiate_checkout(&self, amount: u64) {
        if !self.ensure_loaded().await {
            self.alerts.alert("Razorpay SDK failed to load");
            return;
        }

        let alerts = self.alerts.clone();
        let handler = Arc::new(move |response: PaymentResponse| {
            alerts.alert(&format!("Payment successful: {}", response.payment_id));
        });

        self.widget.open(CheckoutOptions {
            key: self.config.key_id.clone(),
            // whole units to the provider's minor-unit convention
            amount: amount * 100,
            currency: self.config.currency.clone(),
            name: self.config.merchant_name.clone(),
            description: self.config.description.clone(),
            prefill: self.config.prefill.clone(),
            theme: Theme {
                color: self.config.theme_color.clone(),
            },
            handler,
        });
    }

    /// Idempotent script load.
    async fn ensure_loaded(&self) -> bool {
        if self.loaded.load(Ordering::SeqCst) {
            return true;
        }
        let ok = self.widget.load().await;
        if ok {
            self.loaded.store(true, Ordering::SeqCst);
        }
        ok
    }
}
