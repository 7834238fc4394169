use crate::{StoreError, StoreResult, StoredSession, TOKEN_KEY, TokenStore, USER_KEY};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use cp_core::User;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Serialize)]
struct SessionFile<'a> {
    token: &'a str,
    #[serde(rename = "chatpro_user")]
    user: &'a User,
}

/// JSON file holding the token and cached user under one path.
///
/// Both keys live in a single file that is replaced atomically, so a crash can
/// never leave one key without the other.
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> StoreResult<StoredSession> {
        if !self.path.exists() {
            debug!("No session file at {:?}", self.path);
            return Ok(StoredSession::default());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        let value: Value = match serde_json::from_str(&contents) {
            Ok(value @ Value::Object(_)) => value,
            _ => {
                warn!("Session file corrupted at {:?}", self.path);
                self.backup_corrupted()?;
                return Ok(StoredSession {
                    corruption_error: Some("session file is not a JSON object".to_string()),
                    ..StoredSession::default()
                });
            }
        };

        let token = value
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(String::from);

        let (user, corruption_error) = match value.get(USER_KEY) {
            None | Some(Value::Null) => (None, None),
            Some(raw) => match serde_json::from_value::<User>(raw.clone()) {
                Ok(user) => (Some(user), None),
                Err(e) => {
                    warn!("Cached user in {:?} is corrupted: {e}", self.path);
                    (None, Some(e.to_string()))
                }
            },
        };

        Ok(StoredSession {
            token,
            user,
            corruption_error,
        })
    }

    /// Writes to a temp file, syncs it, then renames over the final path.
    fn write(&self, token: &str, user: &User) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(&SessionFile { token, user })?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    /// Renames the file to `<name>.corrupted.{timestamp}` for debugging.
    fn backup_corrupted(&self) -> StoreResult<()> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".corrupted.{timestamp}"));
        let backup_path = self.path.with_file_name(name);

        fs::rename(&self.path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> StoreResult<StoredSession> {
        let _guard = self.guard();
        self.read()
    }

    fn save(&self, token: &str, user: &User) -> StoreResult<()> {
        let _guard = self.guard();
        self.write(token, user)?;
        info!("Saved session for user {}", user.id);
        Ok(())
    }

    fn update_user(&self, expected_token: &str, user: &User) -> StoreResult<bool> {
        let _guard = self.guard();
        let current = self.read()?;
        if current.token.as_deref() != Some(expected_token) {
            debug!("Stored token changed; skipping cached user update");
            return Ok(false);
        }
        self.write(expected_token, user)?;
        Ok(true)
    }

    fn clear(&self) -> StoreResult<()> {
        let _guard = self.guard();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(self.path.clone(), e)),
        }
    }
}
