//! Pairing of incoming players with waiting sessions.

use crate::error::GameError;
use crate::session::{Player, SessionId, SessionStatus};
use crate::store::SessionStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Pairs an incoming player with a waiting session or opens a new one.
#[derive(Debug, Clone)]
pub struct Matchmaker {
    store: Arc<SessionStore>,
}

impl Matchmaker {
    /// Creates a matchmaker over the shared store.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Joins the first session found waiting for a player, or creates a
    /// new one with the caller as its sole player.
    ///
    /// The scan, the join, and the create all happen under one table
    /// critical section: two concurrent callers can never both attach
    /// as the second player of the same session, nor both open fresh
    /// sessions when they should have been paired.
    #[instrument(skip(self))]
    pub fn find_or_create(&self, name: &str) -> (SessionId, Player) {
        let mut table = self.store.table();

        for (id, handle) in table.iter() {
            let mut session = handle.lock().unwrap();
            if session.status() != SessionStatus::WaitingForPlayer {
                continue;
            }
            if let Ok(player) = session.join(name) {
                info!(session_id = %id, player_id = %player.id, "Matched into waiting session");
                return (id.clone(), player);
            }
        }

        let (id, player) = self.store.insert_locked(&mut table, name);
        info!(session_id = %id, "No waiting session, created one");
        (id, player)
    }

    /// Creates a new session with the caller as its first player.
    #[instrument(skip(self))]
    pub fn create(&self, name: &str) -> (SessionId, Player) {
        self.store.create(name)
    }

    /// Joins the session with the given id as the second player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id and
    /// [`GameError::GameFull`] when the session is not joinable.
    #[instrument(skip(self))]
    pub fn join(&self, session_id: &str, name: &str) -> Result<Player, GameError> {
        self.store.with_session(session_id, |session| session.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    fn matchmaker() -> (Arc<SessionStore>, Matchmaker) {
        let store = Arc::new(SessionStore::new());
        (store.clone(), Matchmaker::new(store))
    }

    #[test]
    fn test_find_or_create_opens_session_when_none_waiting() {
        let (store, matchmaker) = matchmaker();
        let (id, player) = matchmaker.find_or_create("Alice");

        assert_eq!(player.mark, Mark::First);
        let session = store.get(&id).unwrap();
        assert_eq!(session.status(), SessionStatus::WaitingForPlayer);
    }

    #[test]
    fn test_find_or_create_pairs_with_waiting_session() {
        let (store, matchmaker) = matchmaker();
        let (first_id, first) = matchmaker.find_or_create("Alice");
        let (second_id, second) = matchmaker.find_or_create("Bob");

        assert_eq!(first_id, second_id);
        assert_eq!(second.mark, Mark::Second);

        let session = store.get(&first_id).unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);
        // Turn stays with the creator.
        assert_eq!(session.current_turn_player_id(), &first.id);
    }

    #[test]
    fn test_third_caller_opens_fresh_session() {
        let (store, matchmaker) = matchmaker();
        matchmaker.find_or_create("Alice");
        matchmaker.find_or_create("Bob");
        let (third_id, third) = matchmaker.find_or_create("Carol");

        assert_eq!(third.mark, Mark::First);
        let session = store.get(&third_id).unwrap();
        assert_eq!(session.status(), SessionStatus::WaitingForPlayer);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_manual_join_unknown_id() {
        let (_, matchmaker) = matchmaker();
        assert_eq!(
            matchmaker.join("000000", "Bob"),
            Err(GameError::GameNotFound)
        );
    }

    #[test]
    fn test_manual_join_full_session() {
        let (_, matchmaker) = matchmaker();
        let (id, _) = matchmaker.create("Alice");
        matchmaker.join(&id, "Bob").unwrap();

        assert_eq!(matchmaker.join(&id, "Carol"), Err(GameError::GameFull));
    }
}
