//! The typed mutation protocol for the client session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{
    Draft, Household, Inventory, Preferences, PreferencesPatch, Product, Task, User, UserPatch,
};
use crate::error::SessionError;
use crate::state::SessionSnapshot;

/// A session mutation.
///
/// Actions serialize as `{"type": "...", "payload": ...}` envelopes, the
/// shape UI event handlers, authentication callbacks, and remote response
/// handlers produce. The enum is closed: every mutation the session supports
/// is listed here, and the compiler enforces exhaustive handling in the
/// reducer.
///
/// "Set" actions replace a field or collection wholesale; "update" actions
/// merge shallowly (key-wise upsert for collections, field-wise overwrite for
/// patches). Nested objects inside a record are never merged recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Reset to a fresh anonymous session
    SetAnonSession,
    /// Replace user, token, and preferences from a session-shaped payload
    SetSession(SessionSnapshot),
    /// Replace the user profile wholesale
    SetUser(Option<User>),
    /// Shallow-merge a partial profile into the current user
    UpdateUser(UserPatch),
    /// Drop all session state and return to the anonymous defaults
    #[serde(alias = "LOGOUT_USER", alias = "CLEAR_SESSION")]
    Logout,
    /// Replace the household collection wholesale
    SetHouseholds(HashMap<String, Household>),
    /// Key-wise upsert into the household collection
    UpdateHouseholds(HashMap<String, Household>),
    /// Replace the inventory collection wholesale
    SetInventories(HashMap<String, Inventory>),
    /// Key-wise upsert into the inventory collection
    UpdateInventories(HashMap<String, Inventory>),
    /// Replace the product collection wholesale
    SetProducts(HashMap<String, Product>),
    /// Key-wise upsert into the product collection
    UpdateProducts(HashMap<String, Product>),
    /// Replace the task collection wholesale
    SetTasks(HashMap<String, Task>),
    /// Key-wise upsert into the task collection
    UpdateTasks(HashMap<String, Task>),
    /// Replace the draft list wholesale
    SetDrafts(Vec<Draft>),
    /// Append drafts to the list
    UpdateDrafts(Vec<Draft>),
    /// Empty the draft list
    ClearDrafts,
    /// Replace preferences wholesale (both copies)
    SetPreferences(Preferences),
    /// Shallow-merge into both preference copies
    UpdatePreferences(PreferencesPatch),
}

impl Action {
    /// Every action tag accepted on the wire, aliases included
    pub const KINDS: &'static [&'static str] = &[
        "SET_ANON_SESSION",
        "SET_SESSION",
        "SET_USER",
        "UPDATE_USER",
        "LOGOUT",
        "LOGOUT_USER",
        "CLEAR_SESSION",
        "SET_HOUSEHOLDS",
        "UPDATE_HOUSEHOLDS",
        "SET_INVENTORIES",
        "UPDATE_INVENTORIES",
        "SET_PRODUCTS",
        "UPDATE_PRODUCTS",
        "SET_TASKS",
        "UPDATE_TASKS",
        "SET_DRAFTS",
        "UPDATE_DRAFTS",
        "CLEAR_DRAFTS",
        "SET_PREFERENCES",
        "UPDATE_PREFERENCES",
    ];

    /// Canonical tag for this action, used in logging
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetAnonSession => "SET_ANON_SESSION",
            Action::SetSession(_) => "SET_SESSION",
            Action::SetUser(_) => "SET_USER",
            Action::UpdateUser(_) => "UPDATE_USER",
            Action::Logout => "LOGOUT",
            Action::SetHouseholds(_) => "SET_HOUSEHOLDS",
            Action::UpdateHouseholds(_) => "UPDATE_HOUSEHOLDS",
            Action::SetInventories(_) => "SET_INVENTORIES",
            Action::UpdateInventories(_) => "UPDATE_INVENTORIES",
            Action::SetProducts(_) => "SET_PRODUCTS",
            Action::UpdateProducts(_) => "UPDATE_PRODUCTS",
            Action::SetTasks(_) => "SET_TASKS",
            Action::UpdateTasks(_) => "UPDATE_TASKS",
            Action::SetDrafts(_) => "SET_DRAFTS",
            Action::UpdateDrafts(_) => "UPDATE_DRAFTS",
            Action::ClearDrafts => "CLEAR_DRAFTS",
            Action::SetPreferences(_) => "SET_PREFERENCES",
            Action::UpdatePreferences(_) => "UPDATE_PREFERENCES",
        }
    }

    /// Decode a `{type, payload}` envelope from an external collaborator.
    ///
    /// An unrecognized `type` fails with [`SessionError::UnknownAction`]; a
    /// payload that does not deserialize fails with
    /// [`SessionError::MalformedPayload`]. Missing optional payload fields
    /// fall back to their defaults rather than failing.
    pub fn from_envelope(envelope: Value) -> Result<Self, SessionError> {
        let kind = match envelope.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => return Err(SessionError::InvalidEnvelope),
        };

        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(SessionError::UnknownAction(kind));
        }

        serde_json::from_value(envelope).map_err(SessionError::MalformedPayload)
    }
}
