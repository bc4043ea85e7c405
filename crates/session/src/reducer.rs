//! Pure state transitions for the client session.

use std::collections::HashMap;

use crate::action::Action;
use crate::state::Session;

/// Compute the next session from the current one and a single action.
///
/// The reducer is pure: it never mutates `state`, performs no I/O, and the
/// same inputs always produce the same output. Callers that need ordering
/// guarantees get them from dispatching synchronously, one action at a time.
///
/// Merge semantics are shallow throughout. A collection "update" upserts
/// whole records per key; a patch "update" overwrites whole fields. Nested
/// objects provided in a payload replace their counterpart entirely, so a
/// partial nested payload drops sibling fields unless the caller merged them
/// first.
pub fn reduce(state: &Session, action: Action) -> Session {
    let mut next = state.clone();

    match action {
        Action::SetAnonSession | Action::Logout => {
            next = Session::default();
        }
        Action::SetSession(snapshot) => {
            let mut user = snapshot.user;
            let preferences = snapshot
                .preferences
                .or_else(|| user.as_ref().map(|u| u.preferences.clone()))
                .unwrap_or_default();
            if let Some(user) = user.as_mut() {
                user.preferences = preferences.clone();
            }
            next.user = user;
            next.token = snapshot.token;
            next.preferences = preferences;
        }
        Action::SetUser(user) => {
            if let Some(ref user) = user {
                next.preferences = user.preferences.clone();
            }
            next.user = user;
        }
        Action::UpdateUser(patch) => {
            if let Some(user) = next.user.as_mut() {
                user.apply(patch);
                next.preferences = user.preferences.clone();
            }
        }
        Action::SetHouseholds(households) => next.households = households,
        Action::UpdateHouseholds(households) => merge(&mut next.households, households),
        Action::SetInventories(inventories) => next.inventories = inventories,
        Action::UpdateInventories(inventories) => merge(&mut next.inventories, inventories),
        Action::SetProducts(products) => next.products = products,
        Action::UpdateProducts(products) => merge(&mut next.products, products),
        Action::SetTasks(tasks) => next.tasks = tasks,
        Action::UpdateTasks(tasks) => merge(&mut next.tasks, tasks),
        Action::SetDrafts(drafts) => next.drafts = drafts,
        Action::UpdateDrafts(mut drafts) => next.drafts.append(&mut drafts),
        Action::ClearDrafts => next.drafts.clear(),
        Action::SetPreferences(preferences) => {
            if let Some(user) = next.user.as_mut() {
                user.preferences = preferences.clone();
            }
            next.preferences = preferences;
        }
        Action::UpdatePreferences(patch) => {
            next.preferences.apply(&patch);
            if let Some(user) = next.user.as_mut() {
                user.preferences.apply(&patch);
            }
        }
    }

    next
}

/// Key-wise upsert; incoming entries overwrite existing ones wholesale.
fn merge<V>(base: &mut HashMap<String, V>, incoming: HashMap<String, V>) {
    base.extend(incoming);
}
