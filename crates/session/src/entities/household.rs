use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a household shared by one or more users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Backend record identifier
    pub id: String,
    /// Household name
    pub name: String,
    /// User who created the household
    pub owner_id: Option<String>,
    /// Member user ids
    pub member_ids: Vec<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Household {
    /// Create a new household instance
    pub fn new(name: String, owner_id: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        let member_ids = owner_id.iter().cloned().collect();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            owner_id,
            member_ids,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check whether a user belongs to this household
    pub fn is_member(&self, user_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == user_id)
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate household data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Household name cannot be empty".to_string());
        }

        if self.name.len() > 100 {
            return Err("Household name too long (max 100 characters)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_creation() {
        let household = Household::new("Flat 4B".to_string(), Some("user-1".to_string()));

        assert_eq!(household.name, "Flat 4B");
        assert_eq!(household.owner_id, Some("user-1".to_string()));
        assert!(household.is_member("user-1"));
        assert!(!household.is_member("user-2"));
        assert!(household.validate().is_ok());
    }

    #[test]
    fn test_household_validation() {
        let mut household = Household::new("Valid".to_string(), None);
        assert!(household.validate().is_ok());

        household.name = "".to_string();
        assert!(household.validate().is_err());

        household.name = "a".repeat(101);
        assert!(household.validate().is_err());
    }
}
