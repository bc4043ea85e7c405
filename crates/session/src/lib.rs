//! # Larder Session Crate
//!
//! This crate is the state core of the Larder household inventory client. It
//! owns the canonical in-memory session — the signed-in user, credential
//! token, preferences, the household/inventory/product/task collections, and
//! the list of unsaved draft records — and the typed action protocol that is
//! the only way to mutate it.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (User, Household, Inventory, Product, Task,
//!   Draft, Preferences)
//! - **State**: The `Session` aggregate and its restorable snapshot form
//! - **Action / Reducer**: The closed mutation protocol and the pure
//!   transition function
//! - **Store**: The owning dispatch handle components receive by injection
//! - **Snapshot**: Local persistence for the restorable part of the session
//!
//! ## Usage
//!
//! ```
//! use larder_session::{Action, SessionStore};
//! use larder_session::entities::PreferencesPatch;
//!
//! let mut store = SessionStore::new();
//! store.dispatch(Action::UpdatePreferences(PreferencesPatch::default()));
//! assert!(!store.state().is_authenticated());
//! ```

pub mod action;
pub mod entities;
pub mod error;
pub mod reducer;
pub mod snapshot;
pub mod state;
pub mod store;

pub use action::Action;
pub use entities::{
    Draft, DraftRecord, Household, Inventory, InventoryKind, Preferences, PreferencesPatch,
    Product, Recurrence, Task, Theme, User, UserPatch, UserStatus,
};
pub use error::SessionError;
pub use reducer::reduce;
pub use state::{Session, SessionSnapshot};
pub use store::SessionStore;
