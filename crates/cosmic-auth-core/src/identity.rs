//! The authenticated principal record.

use serde::{Deserialize, Serialize};

/// The identity returned by the provider after a successful sign-in.
///
/// Owned by the provider; the coordinator only ever holds a read-only copy
/// obtained from session-changed notifications and never persists it beyond
/// process memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Provider-unique identifier.
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub email_verified: bool,
}

impl Identity {
    /// A minimal identity with only a uid set.
    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            phone_number: None,
            display_name: None,
            photo_url: None,
            email_verified: false,
        }
    }

    /// Best display label: display name, then email, then phone, then uid.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .or(self.phone_number.as_deref())
            .unwrap_or(&self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_precedence() {
        let mut id = Identity::with_uid("u1");
        assert_eq!(id.display_label(), "u1");
        id.phone_number = Some("+911234567890".into());
        assert_eq!(id.display_label(), "+911234567890");
        id.email = Some("a@b.com".into());
        assert_eq!(id.display_label(), "a@b.com");
        id.display_name = Some("Alice".into());
        assert_eq!(id.display_label(), "Alice");
    }

    #[test]
    fn test_serde_camel_case() {
        let mut id = Identity::with_uid("u1");
        id.email_verified = true;
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["uid"], "u1");
        assert_eq!(json["emailVerified"], true);
        // Unset optional fields are omitted entirely
        assert!(json.get("displayName").is_none());
    }
}
