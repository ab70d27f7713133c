//! User profile model
//!
//! A single record holding the display name shown on overviews and
//! statements. There is exactly one profile per data directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The singleton user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// When the profile was last modified
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            updated_at: Utc::now(),
        }
    }

    /// Change the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into().trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(ProfileValidationError::NameTooLong(self.name.len()));
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for the user profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Profile name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Profile name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for ProfileValidationError {}
