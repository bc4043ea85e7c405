use chrono::Utc;
use cuid2::CuidConstructor;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::household::Household;
use super::inventory::Inventory;
use super::product::Product;
use super::task::Task;

static CUID: Lazy<CuidConstructor> = Lazy::new(CuidConstructor::new);

/// A record created locally but not yet persisted remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Locally generated draft identifier
    pub id: String,
    /// The wrapped resource record
    pub record: DraftRecord,
    /// Creation timestamp
    pub created_at: String,
}

/// The resource types a draft can wrap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resource", content = "data", rename_all = "lowercase")]
pub enum DraftRecord {
    Household(Household),
    Inventory(Inventory),
    Product(Product),
    Task(Task),
}

impl Draft {
    /// Wrap a record in a new draft with a locally generated id
    pub fn new(record: DraftRecord) -> Self {
        Self {
            id: CUID.create_id(),
            record,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Name of the wrapped resource type
    pub fn resource_name(&self) -> &'static str {
        match self.record {
            DraftRecord::Household(_) => "household",
            DraftRecord::Inventory(_) => "inventory",
            DraftRecord::Product(_) => "product",
            DraftRecord::Task(_) => "task",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_creation() {
        let product = Product::new("Flour".to_string(), None, None);
        let draft = Draft::new(DraftRecord::Product(product.clone()));

        assert!(!draft.id.is_empty());
        assert_eq!(draft.resource_name(), "product");
        assert_eq!(draft.record, DraftRecord::Product(product));
    }

    #[test]
    fn test_draft_ids_are_unique() {
        let first = Draft::new(DraftRecord::Task(Task::new("a".to_string(), None)));
        let second = Draft::new(DraftRecord::Task(Task::new("a".to_string(), None)));

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_draft_serialization_tags_resource() {
        let draft = Draft::new(DraftRecord::Household(Household::new(
            "Flat".to_string(),
            None,
        )));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["record"]["resource"], "household");
    }
}
