//! Move validation and application.

use crate::error::GameError;
use crate::session::{Session, SessionStatus};
use crate::store::SessionStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Validates and applies moves against sessions in the store.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    store: Arc<SessionStore>,
}

impl TurnEngine {
    /// Creates a turn engine over the shared store.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Applies one move and returns the post-mutation snapshot.
    ///
    /// Validation order matters: the status, membership, and turn checks
    /// come before placement so that an illegal call never touches the
    /// board, and the win check comes before the full check so a move
    /// that both completes a line and fills the board scores as a win.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotFound`], [`GameError::GameNotInProgress`],
    /// [`GameError::PlayerNotInGame`], [`GameError::NotYourTurn`], or
    /// [`GameError::InvalidMove`]. No error path mutates the session.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        session_id: &str,
        player_id: &str,
        row: usize,
        col: usize,
    ) -> Result<Session, GameError> {
        self.store.with_session(session_id, |session| {
            if session.status() == SessionStatus::Finished {
                warn!(session_id, player_id, "Move on finished session");
                return Err(GameError::GameNotInProgress);
            }

            let mover = session
                .player(player_id)
                .cloned()
                .ok_or_else(|| {
                    warn!(session_id, player_id, "Unknown player attempted move");
                    GameError::PlayerNotInGame
                })?;

            if session.current_turn_player_id() != &mover.id {
                warn!(session_id, player_id, "Player moved out of turn");
                return Err(GameError::NotYourTurn);
            }

            if !session.board_mut().place(row, col, mover.mark) {
                warn!(session_id, player_id, row, col, "Invalid move");
                return Err(GameError::InvalidMove);
            }

            if let Some(mark) = session.board().winning_mark() {
                let winner_id = session.player_by_mark(mark).map(|p| p.id.clone());
                session.finish(winner_id);
            } else if session.board().is_full() {
                session.finish(None);
            } else if let Some(opponent_id) =
                session.opponent_of(&mover.id).map(|p| p.id.clone())
            {
                // With no second player yet, the turn stays with the mover.
                session.set_current_turn(opponent_id);
            }

            info!(
                session_id,
                player_id,
                row,
                col,
                status = ?session.status(),
                "Move applied"
            );
            Ok(session.clone())
        })
    }
}
