use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the cached user record (JSON).
pub const USER_KEY: &str = "user";
/// Storage key marking a local update that has not reached the server yet.
pub const PENDING_KEY: &str = "pendingSync";

/// Key/value persistence for the session, modelled on browser local storage:
/// string keys, string values, no transactions.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Volatile [`SessionStore`] for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

/// [`SessionStore`] backed by a single JSON file, so a session survives
/// process restarts. I/O failures degrade to an empty store rather than
/// erroring: a client that cannot read its cache simply logs in again.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("session file {} is corrupt, starting fresh: {e}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) {
        match serde_json::to_string_pretty(values) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    tracing::warn!("failed to persist session to {}: {e}", self.path.display());
                }
            }
            Err(e) => tracing::warn!("failed to serialize session: {e}"),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.lock().unwrap();
        values.remove(key);
        self.flush(&values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.put(TOKEN_KEY, "abc");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.put(TOKEN_KEY, "abc");
        store.put(USER_KEY, r#"{"id":1}"#);
        drop(store);

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(reopened.get(USER_KEY).as_deref(), Some(r#"{"id":1}"#));
    }

    #[test]
    fn corrupt_file_starts_fresh_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::open(&path);
        assert_eq!(store.get(TOKEN_KEY), None);
    }
}
