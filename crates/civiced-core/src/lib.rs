//! CivicEd Core
//!
//! Central coordination layer for the CivicEd session engine: pulls the
//! profile model, session store, and storage layer together behind one
//! import, and owns application-level concerns (configuration, logging).

mod config;
mod error;

pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use civiced_profile::{
    constituencies_for, default_constituency, default_school, display_name_from_email,
    grade_for_age, is_kenyan_county, level_for_points, validate_login, validate_registration,
    Badge, BadgeCategory, BadgeRarity, Profile, ProfileRecord, ValidationError, KENYAN_COUNTIES,
    MIN_AGE, MIN_PASSWORD_LENGTH, POINTS_PER_LEVEL,
};
pub use civiced_session::{
    profile_data_key, SessionError, SessionStore, CURRENT_SESSION_KEY, DEFAULT_LATENCY,
};
pub use civiced_storage::{Database, KeyValueStore, MemoryStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
