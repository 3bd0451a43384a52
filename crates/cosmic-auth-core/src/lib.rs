//! # Cosmic Auth Core
//!
//! Shared types for the Cosmic Connect auth SDK: the [`Identity`] principal
//! record, the tri-state [`SessionState`], the typed error taxonomy
//! ([`AuthError`] / [`ProviderError`]), structured logging, and coordinator
//! options.
//!
//! Nothing in this crate talks to a backend. The identity provider itself is
//! a trait seam defined in the `cosmic-auth` crate; this crate only defines
//! the vocabulary both sides speak.

pub mod error;
pub mod identity;
pub mod logger;
pub mod options;
pub mod state;

pub use error::{AuthError, ProviderError, ProviderErrorCode};
pub use identity::Identity;
pub use logger::{AuthLogger, LogHandler, LogLevel, LoggerConfig};
pub use options::AuthOptions;
pub use state::{SessionNotification, SessionState};
