//! User profile service
//!
//! The profile is a single record holding the display name shown on
//! overview screens and exported statements.

use crate::audit::EntityType;
use crate::error::{FintrackError, FintrackResult};
use crate::models::UserProfile;
use crate::storage::{ChangeEvent, Storage};

/// Service for the user profile
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the profile, if one has been set
    pub fn get(&self) -> FintrackResult<Option<UserProfile>> {
        self.storage.profile.get()
    }

    /// Set the display name, creating the profile on first use
    pub fn set_name(&self, name: &str) -> FintrackResult<UserProfile> {
        let existing = self.storage.profile.get()?;

        let profile = match existing.clone() {
            Some(mut profile) => {
                profile.set_name(name);
                profile
            }
            None => UserProfile::new(name),
        };

        profile
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.profile.set(profile.clone())?;
        self.storage.profile.save()?;

        match existing {
            Some(before) => self.storage.log_update(
                EntityType::Profile,
                "profile",
                Some(profile.name.clone()),
                &before,
                &profile,
                Some(format!("name: {} -> {}", before.name, profile.name)),
            )?,
            None => self.storage.log_create(
                EntityType::Profile,
                "profile",
                Some(profile.name.clone()),
                &profile,
            )?,
        }
        self.storage.notify(ChangeEvent::Profile);

        Ok(profile)
    }
}
