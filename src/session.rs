//! Application context: authenticated user, UI mode and durable flags
//!
//! One [`AppContext`] is built at startup and handed to every component
//! that needs it. Durable values live in a [`LocalStore`], a flat JSON
//! file of string key/values without schema versioning.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::learning::{self, LessonProgress, KEY_USER_LEVEL};

const STORE_FILE_NAME: &str = "local_storage.json";

pub const KEY_HIDE_NOTICE: &str = "hideSafetyNotice";
pub const KEY_TOKEN: &str = "token";
pub const KEY_SIGNUP_USER_ID: &str = "signup_user_id";
pub const KEY_AUTH: &str = "auth-storage";

/// Durable string key/value store backed by a single JSON file.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl LocalStore {
    /// Opens the store in `dir`. A missing file is an empty store.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(STORE_FILE_NAME);
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Discarding unreadable local store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        debug!("Opened local store at {}", path.display());
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Writes `value` under `key`. The in-memory map is left untouched when
    /// the file cannot be written.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        self.flush().inspect_err(|_| self.restore(key, previous))
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if let Some(previous) = self.values.remove(key) {
            self.flush()
                .inspect_err(|_| self.restore(key, Some(previous)))?;
        }
        Ok(())
    }

    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.values.insert(key.to_string(), value),
            None => self.values.remove(key),
        };
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    #[default]
    JobSeeker,
    Employer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Snapshot of the session, broadcast to subscribers on every change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    #[serde(skip)]
    pub token: Option<String>,
    pub mode: UserMode,
    #[serde(skip)]
    pub signup_user_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

struct Inner {
    store: LocalStore,
    session: Session,
}

/// Cloneable handle to the application context.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<Mutex<Inner>>,
    changes: Arc<watch::Sender<Session>>,
}

impl AppContext {
    /// Restores the session persisted in `store`.
    pub fn new(store: LocalStore) -> Self {
        let mut session: Session = store
            .get(KEY_AUTH)
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
        session.token = store.get(KEY_TOKEN).map(str::to_string);
        session.signup_user_id = store.get(KEY_SIGNUP_USER_ID).map(str::to_string);

        let (changes, _) = watch::channel(session.clone());
        Self {
            inner: Arc::new(Mutex::new(Inner { store, session })),
            changes: Arc::new(changes),
        }
    }

    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self::new(LocalStore::open(dir)?))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Applies `f` to a copy of the session and persists it. The copy
    /// replaces the live session and goes out to subscribers only once the
    /// store write succeeded.
    fn update(&self, f: impl FnOnce(&mut LocalStore, &mut Session) -> Result<()>) -> Result<()> {
        let snapshot = {
            let mut inner = self.lock();
            let mut next = inner.session.clone();
            f(&mut inner.store, &mut next)?;
            let auth = serde_json::to_string(&next)?;
            inner.store.set(KEY_AUTH, &auth)?;
            inner.session = next.clone();
            next
        };
        self.changes.send_replace(snapshot);
        Ok(())
    }

    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    /// Receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.changes.subscribe()
    }

    pub fn login(&self, user: User, token: &str) -> Result<()> {
        info!(user_id = %user.id, "logging in");
        self.update(|store, session| {
            store.set(KEY_TOKEN, token)?;
            session.user = Some(user);
            session.token = Some(token.to_string());
            Ok(())
        })
    }

    /// Drops the user, token and signup id. Mode and the notice flag survive.
    pub fn logout(&self) -> Result<()> {
        info!("logging out");
        self.update(|store, session| {
            store.remove(KEY_TOKEN)?;
            store.remove(KEY_SIGNUP_USER_ID)?;
            session.user = None;
            session.token = None;
            session.signup_user_id = None;
            Ok(())
        })
    }

    pub fn set_mode(&self, mode: UserMode) -> Result<()> {
        debug!(?mode, "switching user mode");
        self.update(|_, session| {
            session.mode = mode;
            Ok(())
        })
    }

    pub fn set_signup_user_id(&self, id: Option<&str>) -> Result<()> {
        self.update(|store, session| {
            match id {
                Some(id) => store.set(KEY_SIGNUP_USER_ID, id)?,
                None => store.remove(KEY_SIGNUP_USER_ID)?,
            }
            session.signup_user_id = id.map(str::to_string);
            Ok(())
        })
    }

    pub fn signup_user_id(&self) -> Option<String> {
        self.lock().session.signup_user_id.clone()
    }

    pub fn notice_hidden(&self) -> bool {
        self.lock().store.get(KEY_HIDE_NOTICE) == Some("true")
    }

    /// Opts out of the one-time safety notice for good.
    pub fn hide_notice(&self) -> Result<()> {
        self.lock().store.set(KEY_HIDE_NOTICE, "true")
    }

    /// Korean level label such as `Lv.2 초급`, absent until one is chosen.
    pub fn user_level(&self) -> Option<String> {
        self.lock().store.get(KEY_USER_LEVEL).map(str::to_string)
    }

    pub fn set_user_level(&self, level: &str) -> Result<()> {
        debug!(user_level = level, "setting learning level");
        self.lock().store.set(KEY_USER_LEVEL, level)
    }

    /// Stored progress of a lesson. Unreadable entries count as no progress.
    pub fn lesson_progress(&self, lesson_id: &str) -> LessonProgress {
        let inner = self.lock();
        let Some(raw) = inner.store.get(&learning::progress_key(lesson_id)) else {
            return LessonProgress::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!("Ignoring unreadable progress of lesson {}: {}", lesson_id, e);
            LessonProgress::default()
        })
    }

    /// Marks a topic finished and returns the lesson's updated progress.
    pub fn complete_topic(&self, lesson_id: &str, topic_id: &str) -> Result<LessonProgress> {
        let mut progress = self.lesson_progress(lesson_id);
        if progress.mark_complete(topic_id) {
            info!(lesson_id, topic_id, "topic completed");
            let raw = serde_json::to_string(&progress)?;
            self.lock().store.set(&learning::progress_key(lesson_id), &raw)?;
        }
        Ok(progress)
    }
}
