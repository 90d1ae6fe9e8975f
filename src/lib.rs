//! Tic-tac-toe arena - authoritative multiplayer game engine
//!
//! This library tracks every in-flight match, enforces turn order and
//! move legality, detects terminal outcomes, and pairs waiting players
//! into matches. Transport and UI layers are thin collaborators that
//! call into [`GameService`] and re-fetch state to observe progress.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, placement, win/draw detection
//! - **Session**: one match's full state behind its own lock
//! - **SessionStore**: two-level-locked registry with lazy reclamation
//! - **Matchmaker**: scan-join-or-create pairing in one critical section
//! - **TurnEngine**: move validation and terminal-state recompute
//! - **GameService**: the contract exposed over the HTTP binding
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::GameService;
//!
//! let service = GameService::new();
//! let (session_id, alice) = service.find_or_create_game("Alice");
//! let bob = service.join_game(&session_id, "Bob").unwrap();
//! let state = service.make_move(&session_id, &alice.id, 0, 0).unwrap();
//! assert_eq!(state.current_turn_player_id(), &bob.id);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod error;
mod http;
mod id;
mod matchmaker;
mod service;
mod session;
mod store;

// Crate-level exports - Board types
pub use board::{Board, Cell, Mark};

// Crate-level exports - Error taxonomy
pub use error::GameError;

// Crate-level exports - Engine components
pub use engine::TurnEngine;
pub use matchmaker::Matchmaker;
pub use store::SessionStore;

// Crate-level exports - Service facade
pub use service::GameService;

// Crate-level exports - Session types
pub use session::{Player, PlayerId, Session, SessionId, SessionStatus};

// Crate-level exports - HTTP binding
pub use http::{
    CreateGameResponse, MakeMoveRequest, MatchResponse, PlayerNameRequest, router,
};
