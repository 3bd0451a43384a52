//! Session state as seen by the coordinator.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// The coordinator's current view of authentication status.
///
/// Exactly one state holds at any time. `Loading` only occurs before the
/// first provider notification after startup; once that notification lands,
/// the state is forever either `Authenticated` or `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// One session-changed notification from the provider.
///
/// `seq` strictly increases in emission order; the coordinator applies
/// notifications in that order. `seq == 0` is the channel's initial value
/// and never corresponds to a real emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNotification {
    pub seq: u64,
    pub identity: Option<Identity>,
}

impl SessionNotification {
    /// The channel's pre-first-emission placeholder.
    pub fn initial() -> Self {
        Self {
            seq: 0,
            identity: None,
        }
    }
}
