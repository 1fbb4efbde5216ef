//! CivicEd Session Management
//!
//! Single source of truth for "who is using the application right now":
//! - One active profile at a time, restored from storage on startup
//! - Registration and sign-in are suspending operations with a simulated
//!   service round trip (there is no real backend; see
//!   [`SessionStore::login`])
//! - Sign-out clears the current-session slot but leaves each email's
//!   durable record in place, so progress survives to the next sign-in

mod error;
mod store;

pub use error::SessionError;
pub use store::{profile_data_key, SessionStore, CURRENT_SESSION_KEY, DEFAULT_LATENCY};

pub type Result<T> = std::result::Result<T, SessionError>;
