//! Learner profile and badges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::record::{
    badges_field, datetime_field, modules_field, string_field, u32_field, ProfileRecord,
    DEFAULT_AGE, DEFAULT_CONSTITUENCY, DEFAULT_COUNTY, DEFAULT_GRADE, DEFAULT_SCHOOL,
};

/// Points required per level above the first.
pub const POINTS_PER_LEVEL: u32 = 250;

/// Level for a points total. Total over the whole range and monotonic.
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Academic,
    Civic,
    Leadership,
    Community,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Unique identifier
    pub id: String,
    /// Display name, e.g. "Constitution Champion"
    pub name: String,
    /// What the learner did to earn it
    pub description: String,
    /// Icon name rendered by the client
    pub icon: String,
    /// When the badge was earned
    pub earned_at: DateTime<Utc>,
    pub rarity: BadgeRarity,
    pub category: BadgeCategory,
}

/// The signed-in learner: identity, demographics, and progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier, regenerated at each sign-in
    pub id: String,
    pub email: String,
    pub name: String,
    pub age: u32,
    /// Mirror of `county`, kept for layout compatibility
    pub location: String,
    pub county: String,
    pub constituency: String,
    /// Secondary-school form bracket, e.g. "Form 3"
    pub grade: String,
    pub school: String,
    /// Lifetime points earned across modules and quizzes
    pub points: u32,
    /// Derived from points whenever they change
    pub level: u32,
    pub badges: Vec<Badge>,
    /// Ids of completed learning modules
    pub completed_modules: Vec<String>,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    /// True only on the in-memory active profile
    pub is_authenticated: bool,
}

impl Profile {
    /// Build the active profile for `email` from its stored record,
    /// with a fresh id and a refreshed activity timestamp.
    pub fn from_record(email: &str, record: ProfileRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: record.name,
            age: record.age,
            location: record.county.clone(),
            county: record.county,
            constituency: record.constituency,
            grade: record.grade,
            school: record.school,
            points: record.points,
            level: record.level,
            badges: record.badges,
            completed_modules: record.completed_modules,
            joined_at: record.joined_at,
            last_active: Utc::now(),
            is_authenticated: true,
        }
    }

    /// Rebuild a profile from arbitrary JSON, field by field. Missing or
    /// mistyped fields take the documented defaults; nothing fails. The
    /// caller decides whether the result is usable (an empty email cannot
    /// be repaired).
    pub fn from_value(value: &Value) -> Self {
        let county = string_field(value, "county", DEFAULT_COUNTY);
        let location = value
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or(&county)
            .to_string();

        Self {
            id: value
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: string_field(value, "email", ""),
            name: string_field(value, "name", ""),
            age: u32_field(value, "age", DEFAULT_AGE),
            location,
            county,
            constituency: string_field(value, "constituency", DEFAULT_CONSTITUENCY),
            grade: string_field(value, "grade", DEFAULT_GRADE),
            school: string_field(value, "school", DEFAULT_SCHOOL),
            points: u32_field(value, "points", 0),
            level: u32_field(value, "level", 1),
            badges: badges_field(value, "badges"),
            completed_modules: modules_field(value, "completedModules"),
            joined_at: datetime_field(value, "joinedAt"),
            last_active: datetime_field(value, "lastActive"),
            is_authenticated: true,
        }
    }

    /// Parse a stored JSON string. Unparseable JSON yields no profile.
    pub fn from_json(json: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(json).ok()?;
        Some(Self::from_value(&value))
    }

    /// Strip identity back down to the durable per-email record.
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            name: self.name.clone(),
            county: self.county.clone(),
            age: self.age,
            constituency: self.constituency.clone(),
            grade: self.grade.clone(),
            school: self.school.clone(),
            points: self.points,
            level: self.level,
            badges: self.badges.clone(),
            completed_modules: self.completed_modules.clone(),
            joined_at: self.joined_at,
            last_active: self.last_active,
        }
    }

    /// Award points and recompute the level.
    pub fn add_points(&mut self, points: u32) {
        self.points += points;
        self.level = level_for_points(self.points);
        self.last_active = Utc::now();
    }

    /// Mark a module complete and award its points. Completing the same
    /// module twice awards nothing. Returns whether anything changed.
    pub fn complete_module(&mut self, module_id: &str, points: u32) -> bool {
        if self.completed_modules.iter().any(|m| m == module_id) {
            return false;
        }
        self.completed_modules.push(module_id.to_string());
        self.add_points(points);
        true
    }

    /// Add a badge unless one with the same id is already held.
    /// Returns whether anything changed.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        if self.badges.iter().any(|b| b.id == badge.id) {
            return false;
        }
        self.badges.push(badge);
        self.last_active = Utc::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn badge(id: &str) -> Badge {
        Badge {
            id: id.to_string(),
            name: "Constitution Champion".to_string(),
            description: "Mastered all modules on the 2010 Constitution".to_string(),
            icon: "scroll".to_string(),
            earned_at: Utc::now(),
            rarity: BadgeRarity::Epic,
            category: BadgeCategory::Academic,
        }
    }

    #[test]
    fn test_from_record_fresh_registration() {
        let record = ProfileRecord::new_registration("Amina", "Nairobi", 16);
        let profile = Profile::from_record("amina@school.ke", record);

        assert!(!profile.id.is_empty());
        assert_eq!(profile.email, "amina@school.ke");
        assert_eq!(profile.location, "Nairobi");
        assert_eq!(profile.grade, "Form 3");
        assert_eq!(profile.points, 0);
        assert_eq!(profile.level, 1);
        assert!(profile.is_authenticated);
    }

    #[test]
    fn test_from_value_repairs_missing_county() {
        let profile = Profile::from_value(&json!({
            "id": "abc",
            "email": "amina@school.ke",
        }));

        assert_eq!(profile.county, "Nairobi");
        assert_eq!(profile.location, "Nairobi");
        assert_eq!(profile.constituency, "Central");
        assert_eq!(profile.grade, "Form 4");
        assert_eq!(profile.school, "School");
        assert_eq!(profile.age, 17);
    }

    #[test]
    fn test_from_value_missing_id_gets_fresh_one() {
        let profile = Profile::from_value(&json!({"email": "a@b.ke"}));
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_points_drive_level() {
        let record = ProfileRecord::new_registration("Amina", "Nairobi", 16);
        let mut profile = Profile::from_record("amina@school.ke", record);

        profile.add_points(200);
        assert_eq!(profile.level, 1);
        profile.add_points(100);
        assert_eq!(profile.points, 300);
        assert_eq!(profile.level, 2);
    }

    #[test]
    fn test_complete_module_once() {
        let record = ProfileRecord::new_registration("Amina", "Nairobi", 16);
        let mut profile = Profile::from_record("amina@school.ke", record);

        assert!(profile.complete_module("mod-constitution", 200));
        assert!(!profile.complete_module("mod-constitution", 200));
        assert_eq!(profile.points, 200);
        assert_eq!(profile.completed_modules.len(), 1);
    }

    #[test]
    fn test_award_badge_dedups() {
        let record = ProfileRecord::new_registration("Amina", "Nairobi", 16);
        let mut profile = Profile::from_record("amina@school.ke", record);

        assert!(profile.award_badge(badge("b1")));
        assert!(!profile.award_badge(badge("b1")));
        assert_eq!(profile.badges.len(), 1);
    }

    #[test]
    fn test_persisted_layout_is_camel_case() {
        let record = ProfileRecord::new_registration("Amina", "Nairobi", 16);
        let profile = Profile::from_record("amina@school.ke", record);
        let value = serde_json::to_value(&profile).unwrap();

        assert!(value.get("completedModules").is_some());
        assert!(value.get("joinedAt").is_some());
        assert!(value.get("lastActive").is_some());
        assert!(value.get("isAuthenticated").is_some());
        // Dates are strings on the wire
        assert!(value.get("joinedAt").unwrap().is_string());
    }

    #[test]
    fn test_badge_rarity_serializes_lowercase() {
        let json = serde_json::to_value(badge("b1")).unwrap();
        assert_eq!(json.get("rarity").unwrap(), "epic");
        assert_eq!(json.get("category").unwrap(), "academic");
        assert!(json.get("earnedAt").unwrap().is_string());
    }
}
