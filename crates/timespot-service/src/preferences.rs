//! User preferences and the key/value store they persist to.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use timespot_core::constants::{USER_ID_KEY, USER_PREFERENCES_PREFIX};
use timespot_core::types::TimeFormat;
use timespot_core::util::sanitize::sanitize_user_input;

use crate::error::StoreError;
use crate::seed::SeedData;

const USER_ID_MAX_LEN: usize = 50;
const FIELD_MAX_LEN: usize = 100;
const USER_ID_PREFIX: &str = "user_";
const USER_ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Persisted display preferences for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub selected_city: String,
    pub time_format: TimeFormat,
    pub favorite_cities: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            selected_city: "London".to_string(),
            time_format: TimeFormat::Hours24,
            favorite_cities: vec![
                "Europe/London".to_string(),
                "America/New_York".to_string(),
                "America/Los_Angeles".to_string(),
                "Europe/Paris".to_string(),
            ],
        }
    }
}

/// Partial update applied on top of stored preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    pub selected_city: Option<String>,
    pub time_format: Option<TimeFormat>,
    pub favorite_cities: Option<Vec<String>>,
}

impl UserPreferences {
    /// Returns a copy with every field present in `update` replaced.
    #[must_use]
    pub fn merged(&self, update: PreferencesUpdate) -> Self {
        Self {
            selected_city: update
                .selected_city
                .unwrap_or_else(|| self.selected_city.clone()),
            time_format: update.time_format.unwrap_or(self.time_format),
            favorite_cities: update
                .favorite_cities
                .unwrap_or_else(|| self.favorite_cities.clone()),
        }
    }
}

/// ## Summary
/// String key/value persistence, shaped like browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// ## Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// ## Errors
    /// Returns `StoreError` if the value cannot be persisted.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.read().map_err(|_e| StoreError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_e| StoreError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// ## Summary
/// Store persisted as one JSON object on disk.
///
/// The whole file is rewritten on every `set_item`. A missing file starts
/// empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// ## Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), "Opened preference store");
        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    fn persist(&self, items: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.read().map_err(|_e| StoreError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    /// The in-memory map only changes once the file has been written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_e| StoreError::Poisoned)?;
        let mut next = items.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *items = next;
        Ok(())
    }
}

/// Reads and writes [`UserPreferences`] and the anonymous user id.
pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
    seed: Arc<SeedData>,
    defaults: UserPreferences,
}

impl PreferencesService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, seed: Arc<SeedData>) -> Self {
        Self {
            store,
            seed,
            defaults: UserPreferences::default(),
        }
    }

    /// Preferences returned for users with nothing stored.
    #[must_use]
    pub fn with_defaults(mut self, defaults: UserPreferences) -> Self {
        self.defaults = defaults;
        self
    }

    /// ## Summary
    /// Preferences for `user_id`: the store first, then the seed data, then
    /// defaults. Never fails; read errors are logged and skipped.
    #[must_use]
    pub fn get(&self, user_id: &str) -> UserPreferences {
        let key = preferences_key(&sanitize_user_input(user_id));
        match self.store.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(prefs) => return prefs,
                Err(e) => tracing::warn!(user_id = %user_id, error = %e, "Stored preferences unreadable"),
            },
            Ok(None) => {}
            Err(e) => tracing::error!(user_id = %user_id, error = %e, "Failed to read preferences"),
        }

        self.seed
            .preferences(user_id)
            .cloned()
            .unwrap_or_else(|| self.defaults.clone())
    }

    /// ## Summary
    /// Validates and stores `prefs`. Returns whether they were saved.
    ///
    /// The user id, the selected city and each favourite are sanitized first.
    /// The user id must then be 1..=50 characters and the other fields
    /// 1..=100 characters.
    pub fn save(&self, user_id: &str, prefs: &UserPreferences) -> bool {
        let user_id = sanitize_user_input(user_id);
        let user_id = user_id.as_str();
        if user_id.is_empty() || user_id.chars().count() > USER_ID_MAX_LEN {
            tracing::warn!(len = user_id.len(), "Rejected preferences for invalid user id");
            return false;
        }

        let selected_city = sanitize_user_input(&prefs.selected_city);
        if !within_limit(&selected_city) {
            tracing::warn!(user_id = %user_id, "Rejected preferences with invalid selected city");
            return false;
        }

        let favorite_cities: Vec<String> = prefs
            .favorite_cities
            .iter()
            .map(String::as_str)
            .map(sanitize_user_input)
            .collect();
        if !favorite_cities.iter().all(|city| within_limit(city)) {
            tracing::warn!(user_id = %user_id, "Rejected preferences with invalid favourite");
            return false;
        }

        let clean = UserPreferences {
            selected_city,
            time_format: prefs.time_format,
            favorite_cities,
        };

        let result = serde_json::to_string(&clean)
            .map_err(StoreError::from)
            .and_then(|raw| self.store.set_item(&preferences_key(user_id), &raw));

        match result {
            Ok(()) => {
                tracing::debug!(user_id = %user_id, "Saved preferences");
                true
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to save preferences");
                false
            }
        }
    }

    /// ## Summary
    /// Applies `update` on top of the current preferences and saves the result.
    ///
    /// The merged value is returned even when saving fails so the caller can
    /// keep showing it.
    pub fn update(&self, user_id: &str, update: PreferencesUpdate) -> UserPreferences {
        let merged = self.get(user_id).merged(update);
        if !self.save(user_id, &merged) {
            tracing::warn!(user_id = %user_id, "Preferences changed locally but were not saved");
        }
        merged
    }

    /// ## Summary
    /// Appends `timezone` to the favourites unless it is already there.
    /// Returns whether the stored list now contains it.
    pub fn add_favorite_city(&self, user_id: &str, timezone: &str) -> bool {
        let mut prefs = self.get(user_id);
        if prefs.favorite_cities.iter().any(|zone| zone == timezone) {
            return true;
        }
        prefs.favorite_cities.push(timezone.to_string());
        self.save(user_id, &prefs)
    }

    /// ## Summary
    /// The stored anonymous user id, generating and storing one on first use.
    ///
    /// If the store cannot be written the fresh id is still returned, so the
    /// session works but a new id is generated next time.
    #[must_use]
    pub fn user_id(&self) -> String {
        match self.store.get_item(USER_ID_KEY) {
            Ok(Some(existing)) if !existing.trim().is_empty() => return existing,
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Failed to read user id"),
        }

        let generated = generate_user_id();
        if let Err(e) = self.store.set_item(USER_ID_KEY, &generated) {
            tracing::error!(error = %e, "Failed to store user id");
        }
        tracing::info!(user_id = %generated, "Generated user id");
        generated
    }
}

fn within_limit(value: &str) -> bool {
    !value.is_empty() && value.chars().count() <= FIELD_MAX_LEN
}

fn preferences_key(user_id: &str) -> String {
    format!("{USER_PREFERENCES_PREFIX}{user_id}")
}

/// `user_` followed by nine random base-36 characters.
fn generate_user_id() -> String {
    let mut value = uuid::Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(USER_ID_PREFIX.len() + USER_ID_SUFFIX_LEN);
    id.push_str(USER_ID_PREFIX);
    for _ in 0..USER_ID_SUFFIX_LEN {
        let digit = usize::try_from(value % 36).unwrap_or_default();
        id.push(char::from(BASE36[digit]));
        value /= 36;
    }
    id
}
