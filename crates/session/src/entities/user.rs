use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::preferences::Preferences;

/// Represents the signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend record identifier
    pub id: String,
    /// User email address
    pub email: Option<String>,
    /// Display name for the user
    pub display_name: Option<String>,
    /// Avatar URL
    pub avatar_url: Option<String>,
    /// Account confirmation status
    pub status: UserStatus,
    /// Embedded user preferences
    pub preferences: Preferences,
    /// When the user was created
    pub created_at: String,
    /// When the user was last updated
    pub updated_at: String,
}

/// User account status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Created locally, never sent to the backend
    Draft,
    /// Registered but email not yet confirmed
    Pending,
    /// Fully confirmed account
    Confirmed,
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "draft" => UserStatus::Draft,
            "pending" => UserStatus::Pending,
            _ => UserStatus::Confirmed,
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Draft => "draft".to_string(),
            UserStatus::Pending => "pending".to_string(),
            UserStatus::Confirmed => "confirmed".to_string(),
        }
    }
}

/// Partial profile update; `None` fields keep their current value.
///
/// A provided `preferences` replaces the nested object wholesale, it is not
/// merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

impl User {
    /// Create a new user profile
    pub fn new(id: String, email: Option<String>, display_name: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id,
            email,
            display_name,
            avatar_url: None,
            status: UserStatus::Pending,
            preferences: Preferences::default(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Get the user's display name or fallback
    pub fn display_name_or_fallback(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.email.clone().unwrap_or_else(|| "Unknown User".to_string()))
    }

    /// Check if the account is fully confirmed
    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, UserStatus::Confirmed)
    }

    /// Apply a shallow patch; provided fields overwrite current values
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = Some(display_name);
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate user data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("User id cannot be empty".to_string());
        }

        if let Some(ref email) = self.email {
            if email.trim().is_empty() {
                return Err("Email cannot be empty".to_string());
            }

            if !email.contains('@') || !email.contains('.') {
                return Err("Invalid email format".to_string());
            }

            if email.len() > 255 {
                return Err("Email too long (max 255 characters)".to_string());
            }
        }

        if let Some(ref display_name) = self.display_name {
            if display_name.trim().is_empty() {
                return Err("Display name cannot be empty".to_string());
            }

            if display_name.len() > 100 {
                return Err("Display name too long (max 100 characters)".to_string());
            }
        }

        self.preferences.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::preferences::Theme;

    fn sample_user() -> User {
        User::new(
            "user-1".to_string(),
            Some("test@example.com".to_string()),
            Some("Test User".to_string()),
        )
    }

    #[test]
    fn test_user_creation() {
        let user = sample_user();

        assert_eq!(user.email, Some("test@example.com".to_string()));
        assert_eq!(user.display_name, Some("Test User".to_string()));
        assert_eq!(user.status, UserStatus::Pending);
        assert!(!user.is_confirmed());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_user_status_conversion() {
        assert_eq!(UserStatus::from("draft"), UserStatus::Draft);
        assert_eq!(UserStatus::from("pending"), UserStatus::Pending);
        assert_eq!(UserStatus::from("confirmed"), UserStatus::Confirmed);
        assert_eq!(UserStatus::from("unknown"), UserStatus::Confirmed);

        assert_eq!(String::from(UserStatus::Draft), "draft");
        assert_eq!(String::from(UserStatus::Pending), "pending");
        assert_eq!(String::from(UserStatus::Confirmed), "confirmed");
    }

    #[test]
    fn test_apply_patch_overwrites_provided_fields() {
        let mut user = sample_user();

        user.apply(UserPatch {
            display_name: Some("Renamed".to_string()),
            status: Some(UserStatus::Confirmed),
            ..UserPatch::default()
        });

        assert_eq!(user.display_name, Some("Renamed".to_string()));
        assert_eq!(user.status, UserStatus::Confirmed);
        assert_eq!(user.email, Some("test@example.com".to_string()));
    }

    #[test]
    fn test_apply_patch_replaces_preferences_wholesale() {
        let mut user = sample_user();
        user.preferences.large_text = true;

        user.apply(UserPatch {
            preferences: Some(Preferences {
                theme: Theme::Dark,
                ..Preferences::default()
            }),
            ..UserPatch::default()
        });

        // The nested object is replaced, so sibling fields revert to the
        // payload's values rather than being merged.
        assert_eq!(user.preferences.theme, Theme::Dark);
        assert!(!user.preferences.large_text);
    }

    #[test]
    fn test_user_validation() {
        let mut user = sample_user();
        assert!(user.validate().is_ok());

        user.email = Some("invalid-email".to_string());
        assert!(user.validate().is_err());

        user.email = Some("valid@example.com".to_string());
        user.display_name = Some("".to_string());
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_display_name_or_fallback() {
        let mut user = sample_user();
        assert_eq!(user.display_name_or_fallback(), "Test User");

        user.display_name = None;
        assert_eq!(user.display_name_or_fallback(), "test@example.com");

        user.email = None;
        assert_eq!(user.display_name_or_fallback(), "Unknown User");
    }
}
