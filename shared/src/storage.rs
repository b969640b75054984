//! Versioned blobs in a string key-value store.
//!
//! Each blob is a JSON envelope `{"version": 1, "state": ...}`. A blob with
//! any other version is rejected instead of being migrated.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::Session;

pub const SCHEMA_VERSION: u32 = 1;

/// Session identity and auth flag.
pub const AUTH_KEY: &str = "auth-storage";
/// Saved jobs.
pub const JOB_KEY: &str = "job-store";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not encode or decode stored state: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("stored state has unsupported version {found}")]
    Version { found: u32 },

    #[error("storage backend failed: {0}")]
    Backend(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

pub fn save<S, T>(store: &mut S, key: &str, state: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let blob = serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        state,
    })?;
    store.set(key, &blob)
}

/// `Ok(None)` when nothing is stored under `key`.
pub fn load<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let blob = match store.get(key)? {
        Some(blob) => blob,
        None => return Ok(None),
    };

    // version first, so a foreign schema reports as such rather than as a
    // shape mismatch
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(&blob)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(StorageError::Version {
            found: envelope.version,
        });
    }
    Ok(Some(serde_json::from_value(envelope.state)?))
}

/// Writes the session blob while signed in and drops it once anonymous, so
/// a logged-out browser keeps no identity behind.
pub fn persist_session<S>(store: &mut S, session: &Session) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    if session.user().is_some() {
        save(store, AUTH_KEY, &session.persisted())
    } else {
        store.remove(AUTH_KEY)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PersistedSession;

    #[test]
    fn session_survives_round_trip() {
        let mut session = Session::default();
        session.login("jane@example.com", "password123");

        let mut store = MemoryStore::default();
        save(&mut store, AUTH_KEY, &session.persisted()).unwrap();

        let loaded: PersistedSession = load(&store, AUTH_KEY).unwrap().unwrap();
        assert_eq!(Session::restore(loaded), session);
    }

    #[test]
    fn envelope_shape() {
        let mut store = MemoryStore::default();
        save(&mut store, JOB_KEY, &vec!["1", "2"]).unwrap();
        assert_eq!(
            store.get(JOB_KEY).unwrap().as_deref(),
            Some(r#"{"version":1,"state":["1","2"]}"#)
        );
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::default();
        let loaded: Option<Vec<String>> = load(&store, JOB_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn foreign_version_rejected() {
        let mut store = MemoryStore::default();
        store
            .set(AUTH_KEY, r#"{"version":0,"state":{"user":null}}"#)
            .unwrap();
        let loaded: Result<Option<PersistedSession>, _> = load(&store, AUTH_KEY);
        assert!(matches!(loaded, Err(StorageError::Version { found: 0 })));
    }

    #[test]
    fn garbage_is_codec_error() {
        let mut store = MemoryStore::default();
        store.set(JOB_KEY, "not json").unwrap();
        let loaded: Result<Option<Vec<String>>, _> = load(&store, JOB_KEY);
        assert!(matches!(loaded, Err(StorageError::Codec(_))));
    }

    #[test]
    fn logout_drops_session_blob() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        assert!(session.login("jane@example.com", "password123"));

        persist_session(&mut store, &session).unwrap();
        let stored: Option<PersistedSession> = load(&store, AUTH_KEY).unwrap();
        assert_eq!(stored.unwrap().user.unwrap().email, "jane@example.com");

        session.logout();
        persist_session(&mut store, &session).unwrap();
        assert_eq!(store.get(AUTH_KEY).unwrap(), None);

        let restored: Option<PersistedSession> = load(&store, AUTH_KEY).unwrap();
        assert!(restored.is_none());
    }
}
