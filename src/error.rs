//! Error taxonomy for engine operations.
//!
//! Every variant is a local, synchronous, caller-recoverable fault:
//! the engine never retries internally and never treats one as fatal.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the engine contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameError {
    /// No session exists with the given id.
    #[display("Game not found")]
    GameNotFound,

    /// The session already has two players or is no longer joinable.
    #[display("Game is full")]
    GameFull,

    /// The player id does not belong to the session.
    #[display("Player not in game")]
    PlayerNotInGame,

    /// Another player holds the turn.
    #[display("Not your turn")]
    NotYourTurn,

    /// The target cell is occupied or out of range.
    #[display("Invalid move")]
    InvalidMove,

    /// The session has already finished.
    #[display("Game not in progress")]
    GameNotInProgress,
}

impl std::error::Error for GameError {}
