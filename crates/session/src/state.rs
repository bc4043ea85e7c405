//! The root session aggregate and its restorable snapshot form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Draft, Household, Inventory, Preferences, Product, Task, User};

/// The root client-side state aggregate.
///
/// Exactly one session exists per store. It is created with default values at
/// application start, populated by authentication or session restore, mutated
/// through the reducer for the app's foreground lifetime, and reset to
/// defaults on logout.
///
/// `preferences` is a denormalized copy of `user.preferences`; the reducer
/// keeps the two in sync on every action that touches either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user, `None` while anonymous
    #[serde(default)]
    pub user: Option<User>,
    /// Opaque credential token
    #[serde(default)]
    pub token: Option<String>,
    /// Denormalized copy of the user's preferences
    #[serde(default)]
    pub preferences: Preferences,
    /// Households keyed by id
    #[serde(default)]
    pub households: HashMap<String, Household>,
    /// Inventories keyed by id
    #[serde(default)]
    pub inventories: HashMap<String, Inventory>,
    /// Products keyed by id
    #[serde(default)]
    pub products: HashMap<String, Product>,
    /// Tasks keyed by id
    #[serde(default)]
    pub tasks: HashMap<String, Task>,
    /// Ordered list of not-yet-persisted records
    #[serde(default)]
    pub drafts: Vec<Draft>,
}

impl Session {
    /// A fresh anonymous session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Check whether a user is signed in with a credential
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Products stored in the given inventory
    pub fn products_in(&self, inventory_id: &str) -> Vec<&Product> {
        self.products
            .values()
            .filter(|product| product.inventory_id.as_deref() == Some(inventory_id))
            .collect()
    }

    /// Open (uncompleted) tasks for the given household
    pub fn open_tasks_for(&self, household_id: &str) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|task| {
                task.household_id.as_deref() == Some(household_id) && !task.is_completed()
            })
            .collect()
    }
}

/// The restorable portion of a session: the payload shape of the
/// session-setting action and the form persisted to local storage.
///
/// Absent fields deserialize to `None` so partially populated payloads fall
/// back to defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

impl SessionSnapshot {
    /// Capture the restorable portion of a session
    pub fn of(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            token: session.token.clone(),
            preferences: Some(session.preferences.clone()),
        }
    }
}
