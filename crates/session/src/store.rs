//! Owning handle around the session state.

use serde_json::Value;
use tracing::debug;

use crate::action::Action;
use crate::error::SessionError;
use crate::reducer::reduce;
use crate::state::Session;

/// Observer invoked with the new state after every dispatch
pub type Listener = Box<dyn Fn(&Session)>;

/// Owns the canonical [`Session`] and funnels every mutation through the
/// reducer.
///
/// Hand a store (or a borrow of it) to the components that need state access
/// instead of reaching for globals; this keeps the core testable without a
/// UI tree. Dispatch takes `&mut self`, so each call sees the result of the
/// previous one by construction.
pub struct SessionStore {
    state: Session,
    listeners: Vec<Listener>,
}

impl SessionStore {
    /// Create a store holding a fresh anonymous session
    pub fn new() -> Self {
        Self::with_state(Session::default())
    }

    /// Create a store from an existing session (e.g. a restored snapshot)
    pub fn with_state(state: Session) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// The current state; only dispatch can replace it
    pub fn state(&self) -> &Session {
        &self.state
    }

    /// Register an observer notified after every dispatch
    pub fn subscribe(&mut self, listener: impl Fn(&Session) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one action and notify observers
    pub fn dispatch(&mut self, action: Action) -> &Session {
        debug!(action = action.kind(), "dispatching session action");
        self.state = reduce(&self.state, action);

        for listener in &self.listeners {
            listener(&self.state);
        }

        &self.state
    }

    /// Decode and apply a `{type, payload}` envelope from an external
    /// collaborator. Unknown action types and malformed payloads fail
    /// without touching the state.
    pub fn dispatch_envelope(&mut self, envelope: Value) -> Result<&Session, SessionError> {
        let action = Action::from_envelope(envelope)?;
        Ok(self.dispatch(action))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
