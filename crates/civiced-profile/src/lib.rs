//! CivicEd Profile Model
//!
//! Learner identity, demographics, and gamified progression (points, level,
//! badges, completed modules), serialized in the camelCase JSON layout the
//! platform has always persisted. Loading is lenient: missing or mistyped
//! fields are replaced with documented defaults instead of failing.

mod kenya;
mod profile;
mod record;
mod validation;

pub use kenya::{
    constituencies_for, default_constituency, default_school, display_name_from_email,
    grade_for_age, is_kenyan_county, KENYAN_COUNTIES,
};
pub use profile::{level_for_points, Badge, BadgeCategory, BadgeRarity, Profile, POINTS_PER_LEVEL};
pub use record::{
    ProfileRecord, DEFAULT_AGE, DEFAULT_CONSTITUENCY, DEFAULT_COUNTY, DEFAULT_GRADE,
    DEFAULT_SCHOOL,
};
pub use validation::{
    validate_login, validate_registration, ValidationError, MIN_AGE, MIN_PASSWORD_LENGTH,
};

pub type Result<T> = std::result::Result<T, ValidationError>;
