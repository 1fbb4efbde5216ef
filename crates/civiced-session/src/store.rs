//! Session store
//!
//! Owns the active profile and keeps two storage slots current:
//! the current-session slot (who is signed in right now) and one durable
//! record per email (progress that survives sign-out).

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use civiced_profile::{validate_login, validate_registration, Badge, Profile, ProfileRecord};
use civiced_storage::KeyValueStore;

use crate::error::SessionError;
use crate::Result;

/// Storage slot holding the signed-in profile. Absent when signed out.
pub const CURRENT_SESSION_KEY: &str = "civicEd_user";

/// Simulated account-service round trip applied to register and login.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Storage key for an email's durable record. Never deleted at sign-out.
pub fn profile_data_key(email: &str) -> String {
    format!("civicEd_userData_{}", email)
}

pub struct SessionStore {
    /// The signed-in profile, if any
    active: Arc<RwLock<Option<Profile>>>,
    /// Backing storage
    store: Arc<dyn KeyValueStore>,
    /// How long register/login suspend before applying their result
    latency: Duration,
}

impl SessionStore {
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::with_latency(store, DEFAULT_LATENCY)
    }

    /// Construct with a custom simulated latency (tests use zero).
    pub fn with_latency<S: KeyValueStore + 'static>(store: S, latency: Duration) -> Self {
        Self {
            active: Arc::new(RwLock::new(None)),
            store: Arc::new(store),
            latency,
        }
    }

    /// Restore the previous session from storage, if one was left behind.
    ///
    /// Never fails: a storage error means starting signed out, and a
    /// damaged record is repaired field by field. The one thing repair
    /// cannot invent is the email; a record without one is dropped and
    /// its slot deleted.
    pub fn initialize(&self) -> Option<Profile> {
        let raw = match self.store.get(CURRENT_SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read current session, starting signed out");
                return None;
            }
        };

        let profile = match Profile::from_json(&raw) {
            Some(profile) => profile,
            None => {
                tracing::warn!("Dropping unparseable session record");
                self.discard_current_slot();
                return None;
            }
        };

        if profile.email.is_empty() {
            tracing::warn!("Dropping session record with no email");
            self.discard_current_slot();
            return None;
        }

        tracing::info!(
            profile_id = %profile.id,
            email = %profile.email,
            "Restored session"
        );

        *self.active.write() = Some(profile.clone());
        Some(profile)
    }

    /// Register a new learner and sign them in.
    ///
    /// Writes the email's durable record and the current-session slot,
    /// then makes the profile active. Validation failures leave every
    /// piece of state untouched.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        county: &str,
        age: u32,
    ) -> Result<Profile> {
        tokio::time::sleep(self.latency).await;

        validate_registration(name, email, password, county, age)?;

        let record = ProfileRecord::new_registration(name, county, age);
        self.store
            .set(&profile_data_key(email), &serde_json::to_string(&record)?)?;

        let profile = Profile::from_record(email, record);
        self.persist_current(&profile)?;
        *self.active.write() = Some(profile.clone());

        tracing::info!(
            profile_id = %profile.id,
            email = %profile.email,
            county = %profile.county,
            grade = %profile.grade,
            "Registered new learner"
        );

        Ok(profile)
    }

    /// Sign an email in and make its profile active.
    ///
    /// There are no real credentials: any password of accepted length
    /// signs in any email. A previously registered email gets its durable
    /// record back (points, badges, completed modules); an unknown one
    /// gets a synthesized profile named after the email's local part.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        tokio::time::sleep(self.latency).await;

        validate_login(email, password)?;

        let record = match self.store.get(&profile_data_key(email))? {
            Some(json) => ProfileRecord::from_json(&json)
                .unwrap_or_else(|| ProfileRecord::for_unknown_email(email)),
            None => ProfileRecord::for_unknown_email(email),
        };

        let profile = Profile::from_record(email, record);
        self.persist_current(&profile)?;
        *self.active.write() = Some(profile.clone());

        tracing::info!(
            profile_id = %profile.id,
            email = %profile.email,
            points = profile.points,
            "Signed in"
        );

        Ok(profile)
    }

    /// Sign out: clear the active profile and the current-session slot.
    /// The email's durable record stays. Signing out while signed out is
    /// a no-op.
    pub fn logout(&self) -> Result<()> {
        let signed_out = self.active.write().take();
        self.store.delete(CURRENT_SESSION_KEY)?;

        if let Some(profile) = signed_out {
            tracing::info!(email = %profile.email, "Signed out");
        }

        Ok(())
    }

    /// The signed-in profile, if any.
    pub fn active_profile(&self) -> Option<Profile> {
        self.active.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.active.read().is_some()
    }

    /// Mark a module complete for the signed-in learner and award its
    /// points. Already-completed modules award nothing.
    pub fn complete_module(&self, module_id: &str, points: u32) -> Result<Profile> {
        self.update_active(|profile| {
            profile.complete_module(module_id, points);
        })
    }

    /// Award a badge to the signed-in learner (deduplicated by badge id).
    pub fn award_badge(&self, badge: Badge) -> Result<Profile> {
        self.update_active(|profile| {
            profile.award_badge(badge);
        })
    }

    /// Award quiz or activity points to the signed-in learner.
    pub fn add_points(&self, points: u32) -> Result<Profile> {
        self.update_active(|profile| {
            profile.add_points(points);
        })
    }

    /// Apply a mutation to the active profile and save both slots, so the
    /// change is still there after a restart or the next sign-in.
    fn update_active<F>(&self, mutate: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile),
    {
        let profile = {
            let mut guard = self.active.write();
            let profile = guard.as_mut().ok_or(SessionError::NotSignedIn)?;
            mutate(profile);
            profile.clone()
        };

        self.persist_current(&profile)?;
        self.store.set(
            &profile_data_key(&profile.email),
            &serde_json::to_string(&profile.to_record())?,
        )?;

        Ok(profile)
    }

    fn persist_current(&self, profile: &Profile) -> Result<()> {
        self.store
            .set(CURRENT_SESSION_KEY, &serde_json::to_string(profile)?)?;
        Ok(())
    }

    fn discard_current_slot(&self) {
        if let Err(e) = self.store.delete(CURRENT_SESSION_KEY) {
            tracing::warn!(error = %e, "Could not delete damaged session record");
        }
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            active: Arc::clone(&self.active),
            store: Arc::clone(&self.store),
            latency: self.latency,
        }
    }
}
