//! Loading and saving a player's session between runs.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::StoreError;
use crate::session::SessionState;

/// Somewhere a [`SessionState`] can be loaded from and saved to.
pub trait SessionStore {
    /// Loads the saved session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing has been saved yet, or
    /// another error if the saved data cannot be read.
    fn load(&self) -> Result<SessionState, StoreError>;

    /// Saves the session, replacing any earlier save.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &SessionState) -> Result<(), StoreError>;
}

/// A session obtained from [`load_or_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadedSession {
    /// A saved session was found.
    Restored(SessionState),
    /// Nothing usable was saved; a fresh session was created.
    Fresh(SessionState),
}

impl LoadedSession {
    /// Returns the session either way.
    #[must_use]
    pub const fn into_inner(self) -> SessionState {
        match self {
            Self::Restored(session) | Self::Fresh(session) => session,
        }
    }
}

/// Loads the saved session, falling back to a fresh one with `starting_balance`.
///
/// Load failures never propagate; anything other than a missing save is
/// logged before falling back.
pub fn load_or_default<S: SessionStore + ?Sized>(
    store: &S,
    starting_balance: usize,
) -> LoadedSession {
    match store.load() {
        Ok(session) => LoadedSession::Restored(session),
        Err(StoreError::NotFound) => LoadedSession::Fresh(SessionState::new(starting_balance)),
        Err(err) => {
            warn!(error = %err, "could not load saved session, starting fresh");
            LoadedSession::Fresh(SessionState::new(starting_balance))
        }
    }
}

/// File stem used when nothing of the player name survives sanitizing.
pub const FALLBACK_NAME: &str = "Player";

/// Keeps characters that are alphanumeric, space, or underscore, then trims
/// trailing whitespace. Falls back to [`FALLBACK_NAME`] if nothing is left.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    match kept.trim() {
        "" => FALLBACK_NAME.to_owned(),
        _ => kept.trim_end().to_owned(),
    }
}

/// On-disk layout of a save file.
#[derive(Debug, Serialize, Deserialize)]
struct SaveRecord {
    name: String,
    #[serde(flatten)]
    session: SessionState,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    saved_at: u64,
}

/// Stores a session as pretty-printed JSON in one file per player.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    name: String,
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at an explicit path.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates the store for `name` in `dir`, at `blackjack_save_<name>.json`.
    #[must_use]
    pub fn for_player(dir: &Path, name: &str) -> Self {
        let file = format!("blackjack_save_{}.json", sanitize_name(name));
        Self::new(name, dir.join(file))
    }

    /// Returns the path of the save file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the player name recorded in saves.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SessionStore for JsonFileStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<SessionState, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(err) => return Err(err.into()),
        };

        let record: SaveRecord = serde_json::from_str(&data)?;
        if record.name != self.name {
            warn!(
                expected = %self.name,
                found = %record.name,
                "name mismatch in save file, loading anyway"
            );
        }

        let s = record.session;
        debug!(saved_at = record.saved_at, balance = s.balance(), "session loaded");
        Ok(SessionState::restore(
            s.balance(),
            s.hands_played(),
            s.hands_won(),
            s.total_winnings(),
        ))
    }

    #[instrument(level = "debug", skip(self, session), fields(path = %self.path.display()))]
    fn save(&self, session: &SessionState) -> Result<(), StoreError> {
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let record = SaveRecord {
            name: self.name.clone(),
            session: *session,
            saved_at,
        };

        let data = serde_json::to_string_pretty(&record)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        // Replace the old save only once the new one is fully written
        if let Err(err) = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        debug!(balance = session.balance(), "session saved");
        Ok(())
    }
}

/// Keeps a session in memory, for tests and throwaway games.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<SessionState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    #[must_use]
    pub const fn with_session(session: SessionState) -> Self {
        Self {
            saved: RefCell::new(Some(session)),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<SessionState, StoreError> {
        (*self.saved.borrow()).ok_or(StoreError::NotFound)
    }

    fn save(&self, session: &SessionState) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(*session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_path_characters() {
        assert_eq!(sanitize_name("../Ann Lee!  "), "Ann Lee");
        assert_eq!(sanitize_name("bob_99"), "bob_99");
        assert_eq!(sanitize_name(""), FALLBACK_NAME);
        assert_eq!(sanitize_name("!!!"), FALLBACK_NAME);
        assert_eq!(sanitize_name("   "), FALLBACK_NAME);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(matches!(store.load(), Err(StoreError::NotFound)));

        let mut session = SessionState::new(300);
        session.apply_outcome(-50, false);
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn load_or_default_falls_back() {
        let empty = MemoryStore::new();
        assert_eq!(
            load_or_default(&empty, 1000),
            LoadedSession::Fresh(SessionState::new(1000))
        );

        let saved = MemoryStore::with_session(SessionState::new(42));
        assert_eq!(
            load_or_default(&saved, 1000),
            LoadedSession::Restored(SessionState::new(42))
        );
    }
}
