//! `window.localStorage` behind the shared storage boundary.

use shared::auth::{PersistedSession, Session};
use shared::jobs::JobBoard;
use shared::listing::Job;
use shared::storage::{self, KeyValueStore, StorageError, AUTH_KEY, JOB_KEY};
use tracing::warn;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Backend("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Backend("local storage is blocked".to_string()))?
            .ok_or_else(|| StorageError::Backend("local storage is unavailable".to_string()))?;
        Ok(LocalStorage { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Backend(format!("failed to read {key}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Backend(format!("failed to write {key}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Backend(format!("failed to remove {key}")))
    }
}

/// Restored session, or an anonymous one if nothing usable is stored.
pub fn load_session() -> Session {
    let loaded: Result<Option<PersistedSession>, StorageError> =
        LocalStorage::open().and_then(|store| storage::load(&store, AUTH_KEY));
    match loaded {
        Ok(Some(persisted)) => {
            let mut session = Session::restore(persisted);
            session.check_auth();
            session
        }
        Ok(None) => Session::default(),
        Err(err) => {
            warn!(%err, key = AUTH_KEY, "ignoring stored session");
            Session::default()
        }
    }
}

pub fn save_session(session: &Session) {
    let saved =
        LocalStorage::open().and_then(|mut store| storage::persist_session(&mut store, session));
    if let Err(err) = saved {
        warn!(%err, key = AUTH_KEY, "session not persisted");
    }
}

pub fn load_saved_jobs(board: &mut JobBoard) {
    let loaded: Result<Option<Vec<Job>>, StorageError> =
        LocalStorage::open().and_then(|store| storage::load(&store, JOB_KEY));
    match loaded {
        Ok(Some(saved)) => board.restore_saved(saved),
        Ok(None) => {}
        Err(err) => warn!(%err, key = JOB_KEY, "ignoring stored saved jobs"),
    }
}

pub fn save_saved_jobs(board: &JobBoard) {
    let saved = LocalStorage::open()
        .and_then(|mut store| storage::save(&mut store, JOB_KEY, &board.saved_snapshot()));
    if let Err(err) = saved {
        warn!(%err, key = JOB_KEY, "saved jobs not persisted");
    }
}
