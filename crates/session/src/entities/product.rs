use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a tracked product within a household inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend record identifier
    pub id: String,
    /// Household this product belongs to
    pub household_id: Option<String>,
    /// Inventory the product is stored in
    pub inventory_id: Option<String>,
    /// Product name
    pub name: String,
    /// Brand name
    pub brand: Option<String>,
    /// Normalized barcode, when the product was added via scanning
    pub barcode: Option<String>,
    /// Number of units on hand
    pub quantity: u32,
    /// Unit label (e.g. "g", "pack")
    pub unit: Option<String>,
    /// Expiry timestamp, when known
    pub expires_at: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Product {
    /// Create a new product instance
    pub fn new(name: String, household_id: Option<String>, inventory_id: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            household_id,
            inventory_id,
            name,
            brand: None,
            barcode: None,
            quantity: 1,
            unit: None,
            expires_at: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check whether the product expires before the given instant.
    ///
    /// Products without an expiry never expire; an unparseable expiry is
    /// treated as already expired.
    pub fn expires_before(&self, instant: DateTime<Utc>) -> bool {
        let Some(ref expires_at) = self.expires_at else {
            return false;
        };

        DateTime::parse_from_rfc3339(expires_at)
            .map(|dt| dt.with_timezone(&Utc) < instant)
            .unwrap_or(true)
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate product data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name cannot be empty".to_string());
        }

        if self.name.len() > 255 {
            return Err("Product name too long (max 255 characters)".to_string());
        }

        if let Some(ref unit) = self.unit {
            if unit.len() > 20 {
                return Err("Unit label too long (max 20 characters)".to_string());
            }
        }

        Ok(())
    }
}
