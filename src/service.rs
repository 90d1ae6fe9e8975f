//! The engine contract exposed to transport and UI collaborators.

use crate::engine::TurnEngine;
use crate::error::GameError;
use crate::matchmaker::Matchmaker;
use crate::session::{Player, Session, SessionId};
use crate::store::SessionStore;
use std::sync::Arc;
use tracing::instrument;

/// Facade over the store, matchmaker, and turn engine.
///
/// Every operation is synchronous in-memory work and returns owned
/// snapshots; callers observe progress by re-fetching state (pull
/// model, no push).
#[derive(Debug, Clone)]
pub struct GameService {
    store: Arc<SessionStore>,
    matchmaker: Matchmaker,
    engine: TurnEngine,
}

impl GameService {
    /// Creates a service with a fresh session store.
    #[instrument]
    pub fn new() -> Self {
        Self::with_store(Arc::new(SessionStore::new()))
    }

    /// Creates a service over a shared session store.
    pub fn with_store(store: Arc<SessionStore>) -> Self {
        Self {
            matchmaker: Matchmaker::new(store.clone()),
            engine: TurnEngine::new(store.clone()),
            store,
        }
    }

    /// Opens a new session with the named caller as first player.
    #[instrument(skip(self))]
    pub fn create_game(&self, name: &str) -> SessionId {
        let (id, _) = self.matchmaker.create(name);
        id
    }

    /// Joins an existing session as the second player.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`] or [`GameError::GameFull`].
    #[instrument(skip(self))]
    pub fn join_game(&self, session_id: &str, name: &str) -> Result<Player, GameError> {
        self.matchmaker.join(session_id, name)
    }

    /// Pairs the caller with a waiting session, or opens a new one.
    #[instrument(skip(self))]
    pub fn find_or_create_game(&self, name: &str) -> (SessionId, Player) {
        self.matchmaker.find_or_create(name)
    }

    /// Lists sessions waiting for a second player, reclaiming finished
    /// ones as a side effect.
    #[instrument(skip(self))]
    pub fn list_open_games(&self) -> Vec<SessionId> {
        self.store.list_open()
    }

    /// Applies a move and returns the updated session snapshot.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`], [`GameError::GameNotInProgress`],
    /// [`GameError::PlayerNotInGame`], [`GameError::NotYourTurn`], or
    /// [`GameError::InvalidMove`].
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        session_id: &str,
        player_id: &str,
        row: usize,
        col: usize,
    ) -> Result<Session, GameError> {
        self.engine.apply_move(session_id, player_id, row, col)
    }

    /// Returns a read-only snapshot of a session.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`].
    #[instrument(skip(self))]
    pub fn get_game_state(&self, session_id: &str) -> Result<Session, GameError> {
        self.store.get(session_id)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
