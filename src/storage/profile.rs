//! User profile repository for JSON storage
//!
//! The profile is a single optional record; the repository wraps it the
//! same way the entity repositories wrap their maps.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::UserProfile;

use super::file_io::{read_json, write_json_atomic};

/// Serializable profile data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileData {
    profile: Option<UserProfile>,
}

/// Repository for the singleton user profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Option<UserProfile>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the profile from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: ProfileData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.profile;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ProfileData {
            profile: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the profile, if one has been set
    pub fn get(&self) -> Result<Option<UserProfile>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Set (or replace) the profile
    pub fn set(&self, profile: UserProfile) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = Some(profile);
        Ok(())
    }
}
