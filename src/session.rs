//! Session state for one match: participants, board, status, turn, winner.

use crate::board::{Board, Mark};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type SessionId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// A participant in a session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique ID.
    pub id: PlayerId,
    /// Player's display name.
    pub name: String,
    /// Which mark this player places.
    pub mark: Mark,
}

impl Player {
    /// Creates a new player with a fresh id.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            mark,
        }
    }
}

/// Lifecycle status of a session.
///
/// Transitions only move forward:
/// `WaitingForPlayer -> InProgress -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// One player present, waiting for an opponent.
    WaitingForPlayer,
    /// Both players present, match underway.
    InProgress,
    /// Terminal: a winning line or a full, unwon board. Never left.
    Finished,
}

/// One match and all its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    /// At most two players, in join order. The first joiner always holds
    /// `Mark::First`.
    players: Vec<Player>,
    board: Board,
    status: SessionStatus,
    /// Id of the player to move. Meaningful only until the session
    /// finishes.
    current_turn_player_id: PlayerId,
    /// Winner's player id; `None` with status `Finished` means a draw.
    winner_player_id: Option<PlayerId>,
}

impl Session {
    /// Creates a session with its first player, who also holds the turn.
    #[instrument(skip(first), fields(player_id = %first.id))]
    pub fn new(id: SessionId, first: Player) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            current_turn_player_id: first.id.clone(),
            players: vec![first],
            id,
            board: Board::new(),
            status: SessionStatus::WaitingForPlayer,
            winner_player_id: None,
        }
    }

    /// Session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Id of the player to move.
    pub fn current_turn_player_id(&self) -> &PlayerId {
        &self.current_turn_player_id
    }

    /// Winner's player id, if the session finished with a winning line.
    pub fn winner_player_id(&self) -> Option<&PlayerId> {
        self.winner_player_id.as_ref()
    }

    /// Adds the second player and flips the session to `InProgress`.
    ///
    /// The joiner receives the mark the first player does not hold. The
    /// turn stays with the first player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameFull`] when two players are already
    /// present, or when the session has left `WaitingForPlayer` (a
    /// finished session never changes again).
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn join(&mut self, name: &str) -> Result<Player, GameError> {
        if self.status != SessionStatus::WaitingForPlayer || self.players.len() >= 2 {
            warn!(status = ?self.status, players = self.players.len(), "Session not joinable");
            return Err(GameError::GameFull);
        }

        let mark = match self.players.first() {
            Some(first) => first.mark.opponent(),
            None => Mark::First,
        };
        let player = Player::new(name, mark);

        info!(player_id = %player.id, mark = ?mark, "Player joined session");
        self.players.push(player.clone());
        self.status = SessionStatus::InProgress;
        Ok(player)
    }

    /// Gets the player with the given id.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Gets the player holding the given mark.
    pub fn player_by_mark(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|p| p.mark == mark)
    }

    /// Gets the other player, if a second one has joined.
    pub fn opponent_of(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id != player_id)
    }

    pub(crate) fn set_current_turn(&mut self, player_id: PlayerId) {
        self.current_turn_player_id = player_id;
    }

    /// Moves the session to its terminal state.
    pub(crate) fn finish(&mut self, winner_player_id: Option<PlayerId>) {
        info!(
            session_id = %self.id,
            winner = ?winner_player_id,
            "Session finished"
        );
        self.status = SessionStatus::Finished;
        self.winner_player_id = winner_player_id;
    }
}
