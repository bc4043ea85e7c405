use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an inventory (a storage location) within a household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Backend record identifier
    pub id: String,
    /// Household this inventory belongs to
    pub household_id: Option<String>,
    /// Inventory name
    pub name: String,
    /// Kind of storage location
    pub kind: InventoryKind,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Inventory kind enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryKind {
    Pantry,
    Fridge,
    Freezer,
    Shopping,
    Other,
}

impl From<&str> for InventoryKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pantry" => InventoryKind::Pantry,
            "fridge" => InventoryKind::Fridge,
            "freezer" => InventoryKind::Freezer,
            "shopping" => InventoryKind::Shopping,
            _ => InventoryKind::Other,
        }
    }
}

impl From<InventoryKind> for String {
    fn from(kind: InventoryKind) -> Self {
        match kind {
            InventoryKind::Pantry => "pantry".to_string(),
            InventoryKind::Fridge => "fridge".to_string(),
            InventoryKind::Freezer => "freezer".to_string(),
            InventoryKind::Shopping => "shopping".to_string(),
            InventoryKind::Other => "other".to_string(),
        }
    }
}

impl Inventory {
    /// Create a new inventory instance
    pub fn new(name: String, kind: InventoryKind, household_id: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            household_id,
            name,
            kind,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if this is a shopping list rather than a storage location
    pub fn is_shopping_list(&self) -> bool {
        matches!(self.kind, InventoryKind::Shopping)
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate inventory data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Inventory name cannot be empty".to_string());
        }

        if self.name.len() > 100 {
            return Err("Inventory name too long (max 100 characters)".to_string());
        }

        Ok(())
    }
}
