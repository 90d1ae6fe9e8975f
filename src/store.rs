//! Concurrency-safe registry of live sessions.

use crate::board::Mark;
use crate::error::GameError;
use crate::id::IdAllocator;
use crate::session::{Player, Session, SessionId, SessionStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Shared handle to one session's state.
pub(crate) type SessionHandle = Arc<Mutex<Session>>;

/// The single source of truth mapping session id to session.
///
/// Locking is two-level: a table mutex guards the map itself, and each
/// session sits behind its own mutex. Table operations (create,
/// enumerate, reclaim) serialize with each other; mutations of distinct
/// sessions proceed in parallel. The lock order is always table first,
/// then session, and no session lock is ever held while taking the
/// table lock.
#[derive(Debug, Default)]
pub struct SessionStore {
    table: Mutex<HashMap<SessionId, SessionHandle>>,
    ids: IdAllocator,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self {
            table: Mutex::new(HashMap::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Locks the whole table for a scan-and-act critical section.
    pub(crate) fn table(&self) -> MutexGuard<'_, HashMap<SessionId, SessionHandle>> {
        self.table.lock().unwrap()
    }

    /// Allocates an id and inserts a new session under an already-held
    /// table lock. The creator holds `Mark::First` and the turn.
    pub(crate) fn insert_locked(
        &self,
        table: &mut HashMap<SessionId, SessionHandle>,
        name: &str,
    ) -> (SessionId, Player) {
        let id = self.ids.allocate(table);
        let player = Player::new(name, Mark::First);
        let session = Session::new(id.clone(), player.clone());
        table.insert(id.clone(), Arc::new(Mutex::new(session)));
        info!(session_id = %id, player_id = %player.id, "Inserted new session");
        (id, player)
    }

    /// Creates a new session for the given player name.
    #[instrument(skip(self))]
    pub fn create(&self, name: &str) -> (SessionId, Player) {
        let mut table = self.table();
        self.insert_locked(&mut table, name)
    }

    /// Returns a snapshot of the session with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Session, GameError> {
        let handle = self.handle(id)?;
        let session = handle.lock().unwrap();
        Ok(session.clone())
    }

    /// Applies `f` to the session with the given id, atomically with
    /// respect to every other operation on the same session.
    ///
    /// The table lock is released before the session lock is taken, so
    /// unrelated sessions never block on `f`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] for an unknown id, or
    /// whatever `f` returns.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let handle = self.handle(id)?;
        let mut session = handle.lock().unwrap();
        f(&mut session)
    }

    /// Returns ids of sessions still waiting for a second player.
    ///
    /// Reclamation is lazy: any session observed as `Finished` during
    /// this enumeration is removed from the table, freeing its id.
    #[instrument(skip(self))]
    pub fn list_open(&self) -> Vec<SessionId> {
        let mut table = self.table();

        let mut open = Vec::new();
        let mut finished = Vec::new();
        for (id, handle) in table.iter() {
            let session = handle.lock().unwrap();
            match session.status() {
                SessionStatus::WaitingForPlayer => open.push(id.clone()),
                SessionStatus::Finished => finished.push(id.clone()),
                SessionStatus::InProgress => {}
            }
        }

        for id in finished {
            debug!(session_id = %id, "Reclaiming finished session");
            table.remove(&id);
        }

        info!(open = open.len(), "Listed open sessions");
        open
    }

    /// Number of live sessions, finished ones included until reclaimed.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// Clones the handle for one session, holding the table lock only
    /// for the lookup.
    fn handle(&self, id: &str) -> Result<SessionHandle, GameError> {
        let table = self.table();
        let handle = table.get(id).cloned();
        handle.ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            GameError::GameNotFound
        })
    }
}
