//! Session state: which collection, if any, is active.

use std::fmt;

use crate::models::Collection;

/// Command-loop mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// No collection active (α).
    Idle,
    /// A collection is active (δ).
    Active,
}

impl State {
    /// Prompt symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Idle => 'α',
            Self::Active => 'δ',
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Mutable state shared by every command handler.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<Collection>,
}

impl Session {
    /// Start idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, derived from whether a collection is active.
    #[must_use]
    pub const fn state(&self) -> State {
        if self.active.is_some() { State::Active } else { State::Idle }
    }

    /// The active collection.
    #[must_use]
    pub const fn active(&self) -> Option<&Collection> {
        self.active.as_ref()
    }

    /// The active collection, mutably.
    pub fn active_mut(&mut self) -> Option<&mut Collection> {
        self.active.as_mut()
    }

    /// Make `collection` active, returning the one it replaces.
    pub fn activate(&mut self, collection: Collection) -> Option<Collection> {
        tracing::info!(name = %collection.name, "Activated collection");
        self.active.replace(collection)
    }

    /// Return to idle, handing back the active collection.
    pub fn deactivate(&mut self) -> Option<Collection> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_active_collection() {
        let mut session = Session::new();
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.state().symbol(), 'α');

        session.activate(Collection::new("demo"));
        assert_eq!(session.state(), State::Active);
        assert_eq!(session.active().map(|c| c.name.as_str()), Some("demo"));

        let previous = session.deactivate();
        assert_eq!(previous.map(|c| c.name), Some("demo".to_string()));
        assert_eq!(session.state(), State::Idle);
    }
}
