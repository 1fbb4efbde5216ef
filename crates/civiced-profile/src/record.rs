//! Historical profile record
//!
//! The per-email record written at registration and read back at later
//! sign-ins. It carries everything a profile needs except identity
//! (id, email) and the in-memory session flag, so progress survives
//! logout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kenya::{default_constituency, default_school, display_name_from_email, grade_for_age};
use crate::profile::Badge;

/// Repair defaults applied to missing or mistyped fields on load.
pub const DEFAULT_AGE: u32 = 17;
pub const DEFAULT_COUNTY: &str = "Nairobi";
pub const DEFAULT_CONSTITUENCY: &str = "Central";
pub const DEFAULT_GRADE: &str = "Form 4";
pub const DEFAULT_SCHOOL: &str = "School";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub county: String,
    pub age: u32,
    pub constituency: String,
    pub grade: String,
    pub school: String,
    pub points: u32,
    pub level: u32,
    pub badges: Vec<Badge>,
    pub completed_modules: Vec<String>,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl ProfileRecord {
    /// Record for a brand-new registration: placed into the county's
    /// default constituency and the form bracket for their age, with
    /// zeroed progression.
    pub fn new_registration(name: &str, county: &str, age: u32) -> Self {
        let now = Utc::now();

        Self {
            name: name.to_string(),
            county: county.to_string(),
            age,
            constituency: default_constituency(county).to_string(),
            grade: grade_for_age(age).to_string(),
            school: default_school(county),
            points: 0,
            level: 1,
            badges: Vec::new(),
            completed_modules: Vec::new(),
            joined_at: now,
            last_active: now,
        }
    }

    /// Record synthesized when an email signs in without ever having
    /// registered: named after the email's local part, placed in Nairobi.
    pub fn for_unknown_email(email: &str) -> Self {
        Self::new_registration(&display_name_from_email(email), DEFAULT_COUNTY, DEFAULT_AGE)
    }

    /// Rebuild a record from arbitrary JSON, field by field. Missing or
    /// mistyped fields take the documented defaults; nothing fails.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "name", ""),
            county: string_field(value, "county", DEFAULT_COUNTY),
            age: u32_field(value, "age", DEFAULT_AGE),
            constituency: string_field(value, "constituency", DEFAULT_CONSTITUENCY),
            grade: string_field(value, "grade", DEFAULT_GRADE),
            school: string_field(value, "school", DEFAULT_SCHOOL),
            points: u32_field(value, "points", 0),
            level: u32_field(value, "level", 1),
            badges: badges_field(value, "badges"),
            completed_modules: modules_field(value, "completedModules"),
            joined_at: datetime_field(value, "joinedAt"),
            last_active: datetime_field(value, "lastActive"),
        }
    }

    /// Parse a stored JSON string. Unparseable JSON is treated as an
    /// absent record; a parseable one is repaired field by field.
    pub fn from_json(json: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(json).ok()?;
        Some(Self::from_value(&value))
    }
}

pub(crate) fn string_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

pub(crate) fn u32_field(value: &Value, key: &str, default: u32) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(default)
}

pub(crate) fn datetime_field(value: &Value, key: &str) -> DateTime<Utc> {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

pub(crate) fn badges_field(value: &Value, key: &str) -> Vec<Badge> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|b| serde_json::from_value(b.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn modules_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_registration_defaults() {
        let record = ProfileRecord::new_registration("Amina Wanjiku", "Nairobi", 17);
        assert_eq!(record.constituency, "Starehe");
        assert_eq!(record.grade, "Form 4");
        assert_eq!(record.school, "Nairobi School");
        assert_eq!(record.points, 0);
        assert_eq!(record.level, 1);
        assert!(record.badges.is_empty());
        assert!(record.completed_modules.is_empty());
    }

    #[test]
    fn test_unknown_email_record() {
        let record = ProfileRecord::for_unknown_email("juma.otieno@gmail.com");
        assert_eq!(record.name, "Jumaotieno");
        assert_eq!(record.county, "Nairobi");
        assert_eq!(record.age, 17);
        assert_eq!(record.constituency, "Starehe");
        assert_eq!(record.school, "Nairobi School");
    }

    #[test]
    fn test_from_value_repairs_missing_fields() {
        let record = ProfileRecord::from_value(&json!({
            "name": "Baraka",
            "points": 400,
        }));

        assert_eq!(record.name, "Baraka");
        assert_eq!(record.points, 400);
        assert_eq!(record.county, "Nairobi");
        assert_eq!(record.constituency, "Central");
        assert_eq!(record.grade, "Form 4");
        assert_eq!(record.school, "School");
        assert_eq!(record.age, 17);
        assert_eq!(record.level, 1);
    }

    #[test]
    fn test_from_value_repairs_mistyped_fields() {
        let record = ProfileRecord::from_value(&json!({
            "age": "seventeen",
            "points": -3,
            "badges": "none",
            "completedModules": [1, "mod-2", null],
            "joinedAt": "not a date",
        }));

        assert_eq!(record.age, 17);
        assert_eq!(record.points, 0);
        assert!(record.badges.is_empty());
        // Non-string entries are dropped, valid ones kept
        assert_eq!(record.completed_modules, vec!["mod-2".to_string()]);
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(ProfileRecord::from_json("{not json").is_none());
        // Valid JSON that isn't an object still normalizes
        let record = ProfileRecord::from_json("42").unwrap();
        assert_eq!(record.county, "Nairobi");
    }

    #[test]
    fn test_roundtrip_preserves_dates() {
        let record = ProfileRecord::new_registration("Amina", "Kisumu", 13);
        let json = serde_json::to_string(&record).unwrap();
        let restored = ProfileRecord::from_json(&json).unwrap();

        assert_eq!(restored.joined_at, record.joined_at);
        assert_eq!(restored.last_active, record.last_active);
        assert_eq!(restored.constituency, "Kisumu East");
        assert_eq!(restored.grade, "Form 1-2");
    }
}
