//! The billing widget seam.
//!
//! The real widget is an externally hosted script exposing a constructor
//! plus `open()`; this trait captures exactly that contract so the initiator
//! can be exercised without a browser.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The widget's success callback payload: the provider-assigned transaction
/// identifier. Nothing else about the payment is ever observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: String,
}

/// Success callback invoked by the widget after payment.
pub type PaymentHandler = Arc<dyn Fn(PaymentResponse) + Send + Sync>;

/// Customer fields pre-filled into the widget form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Widget color theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub color: String,
}

/// The transaction descriptor handed to the widget's constructor.
///
/// `amount` is in the provider's minor-unit convention (paise for INR).
#[derive(Clone)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub prefill: Prefill,
    pub theme: Theme,
    pub handler: PaymentHandler,
}

impl CheckoutOptions {
    /// The serializable portion of the descriptor, as the widget's
    /// constructor sees it (the handler goes alongside, not on the wire).
    pub fn wire_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "key": self.key,
            "amount": self.amount,
            "currency": self.currency,
            "name": self.name,
            "description": self.description,
            "prefill": self.prefill,
            "theme": self.theme,
        })
    }
}

impl fmt::Debug for CheckoutOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutOptions")
            .field("key", &self.key)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("prefill", &self.prefill)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// An externally hosted billing widget.
#[async_trait]
pub trait BillingWidget: Send + Sync {
    /// Load the widget script. Returns `false` when the script fails to
    /// load. Callers may invoke this repeatedly; implementations should
    /// treat an already-loaded script as an immediate success.
    async fn load(&self) -> bool;

    /// Display the widget with the given transaction descriptor. Control
    /// passes to the widget; only the success handler ever calls back.
    fn open(&self, options: CheckoutOptions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_payload_shape() {
        let options = CheckoutOptions {
            key: "rzp_test_key".into(),
            amount: 199_900,
            currency: "INR".into(),
            name: "Cosmic Connect".into(),
            description: "Astrology Consultation Payment".into(),
            prefill: Prefill {
                name: "User Name".into(),
                email: "user@example.com".into(),
                contact: "9999999999".into(),
            },
            theme: Theme {
                color: "#7B2CBF".into(),
            },
            handler: Arc::new(|_| {}),
        };

        let payload = options.wire_payload();
        assert_eq!(payload["amount"], 199_900);
        assert_eq!(payload["currency"], "INR");
        assert_eq!(payload["prefill"]["contact"], "9999999999");
        assert_eq!(payload["theme"]["color"], "#7B2CBF");
        assert!(payload.get("handler").is_none());
    }

    #[test]
    fn test_payment_response_wire_name() {
        let resp: PaymentResponse =
            serde_json::from_value(serde_json::json!({"razorpay_payment_id": "pay_123"})).unwrap();
        assert_eq!(resp.payment_id, "pay_123");
    }
}
