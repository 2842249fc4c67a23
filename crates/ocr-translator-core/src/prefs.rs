//! Durable per-user preferences: the display/translation language four-tuple
//! and the translation API credential.
//!
//! The preference record is a single JSON file. It is always rewritten as a
//! whole — callers supply all four fields on every save, so the record can
//! never hold a half-updated cross-field state. The store is driven from the
//! foreground thread only; runs in flight never touch it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{self, DEFAULT_TARGET_CODE};
use crate::error::{Error, Result};
use crate::locale;
use crate::util;

const PREFS_FILE: &str = "preferences.json";
const API_KEY_FILE: &str = "api_key.txt";

/// The persisted language selection.
///
/// `system_language_code` selects the active display catalog;
/// `translation_language_code` is the canonical target code handed to the
/// translation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceState {
    pub system_language: String,
    pub system_language_code: String,
    pub translation_language: String,
    pub translation_language_code: String,
}

impl Default for PreferenceState {
    /// The hard default tuple used when the record is missing or corrupt.
    fn default() -> Self {
        Self {
            system_language: "English".to_string(),
            system_language_code: "EN".to_string(),
            translation_language: "English".to_string(),
            translation_language_code: "EN".to_string(),
        }
    }
}

impl PreferenceState {
    /// The catalog selected by the current display language.
    pub fn active_catalog(&self) -> &'static catalog::Catalog {
        catalog::catalog_for(&self.system_language_code)
    }
}

/// File-backed preference store rooted at one profile directory.
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    /// Create a store rooted at the given profile directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at the default per-user profile directory.
    pub fn open_default() -> Self {
        Self::new(util::profile_dir())
    }

    fn prefs_path(&self) -> PathBuf {
        self.dir.join(PREFS_FILE)
    }

    fn api_key_path(&self) -> PathBuf {
        self.dir.join(API_KEY_FILE)
    }

    /// Load the preference state.
    ///
    /// Absent record → first-run initialization from the host locale, which
    /// is persisted before returning. Malformed record → hard default tuple,
    /// left on disk untouched until the next explicit save. Never fails.
    pub fn load(&self) -> PreferenceState {
        let path = self.prefs_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    warn!("Malformed preference record {}: {e}", path.display());
                    PreferenceState::default()
                }
            },
            Err(_) => self.first_run(),
        }
    }

    /// One-time bootstrap: detect the host locale, seed all four fields from
    /// it, and persist the record.
    fn first_run(&self) -> PreferenceState {
        let raw = locale::detect();
        let (code, name) = locale::normalize(raw.as_deref());
        let code = code.to_ascii_uppercase();

        let state = PreferenceState {
            system_language: name.clone(),
            system_language_code: code.clone(),
            translation_language: name,
            translation_language_code: code,
        };

        debug!(
            "First run: seeding preferences with {} ({})",
            state.system_language, state.system_language_code
        );
        if let Err(e) = self.save(&state) {
            warn!("Failed to persist first-run preferences: {e}");
        }
        state
    }

    /// Atomically overwrite the full four-tuple.
    pub fn save(&self, state: &PreferenceState) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::PreferenceWrite(format!("{}: {e}", self.dir.display())))?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| Error::PreferenceWrite(e.to_string()))?;

        write_atomic(&self.prefs_path(), json.as_bytes())
            .map_err(|e| Error::PreferenceWrite(e.to_string()))
    }

    /// Change the display language, keeping the translation target.
    ///
    /// The translation display name is re-resolved against the new locale's
    /// catalog. A target code the new catalog does not know falls back to
    /// that catalog's default translation target, rewriting both translation
    /// fields so the tuple stays internally consistent.
    pub fn set_system_language(&self, code: &str, name: &str) -> Result<PreferenceState> {
        let mut state = self.load();
        state.system_language = name.to_string();
        state.system_language_code = code.to_string();

        let new_catalog = state.active_catalog();
        if new_catalog.contains_code(&state.translation_language_code) {
            state.translation_language = new_catalog
                .name_for_code(&state.translation_language_code)
                .to_string();
        } else {
            state.translation_language = new_catalog.name_for_code(DEFAULT_TARGET_CODE).to_string();
            state.translation_language_code = DEFAULT_TARGET_CODE.to_string();
        }

        self.save(&state)?;
        Ok(state)
    }

    /// Change the translation target, keeping the display language.
    pub fn set_translation_language(&self, code: &str, name: &str) -> Result<PreferenceState> {
        let mut state = self.load();
        state.translation_language = name.to_string();
        state.translation_language_code = code.to_string();
        self.save(&state)?;
        Ok(state)
    }

    /// Read the translation API key, if one has been stored.
    pub fn load_api_key(&self) -> Option<String> {
        let key = fs::read_to_string(self.api_key_path()).ok()?;
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }

    /// Store the translation API key, replacing any previous one.
    pub fn save_api_key(&self, key: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::PreferenceWrite(format!("{}: {e}", self.dir.display())))?;
        write_atomic(&self.api_key_path(), key.as_bytes())
            .map_err(|e| Error::PreferenceWrite(e.to_string()))
    }
}

/// Write via a sibling temp file and rename, so readers never observe a
/// partially written record.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PreferenceStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let state = PreferenceState {
            system_language: "Deutsch".into(),
            system_language_code: "DE".into(),
            translation_language: "Französisch".into(),
            translation_language_code: "FR".into(),
        };
        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn load_is_idempotent() {
        let (_dir, store) = store();
        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn first_run_persists_the_record() {
        let (dir, store) = store();
        let state = store.load();
        assert!(dir.path().join(PREFS_FILE).exists());
        // The seeded tuple mirrors system language into the translation target.
        assert_eq!(state.system_language_code, state.translation_language_code);
        assert_eq!(state.system_language, state.translation_language);
    }

    #[test]
    fn malformed_record_falls_back_to_defaults_without_rewriting() {
        let (dir, store) = store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(PREFS_FILE), "{not json").unwrap();

        assert_eq!(store.load(), PreferenceState::default());
        // The broken file stays until the next explicit save.
        assert_eq!(
            fs::read_to_string(dir.path().join(PREFS_FILE)).unwrap(),
            "{not json"
        );
    }

    #[test]
    fn default_tuple_is_english() {
        let state = PreferenceState::default();
        assert_eq!(
            (
                state.system_language.as_str(),
                state.system_language_code.as_str(),
                state.translation_language.as_str(),
                state.translation_language_code.as_str(),
            ),
            ("English", "EN", "English", "EN")
        );
    }

    #[test]
    fn set_system_language_re_resolves_translation_name() {
        let (_dir, store) = store();
        store
            .save(&PreferenceState {
                system_language: "English".into(),
                system_language_code: "EN".into(),
                translation_language: "French".into(),
                translation_language_code: "FR".into(),
            })
            .unwrap();

        let state = store.set_system_language("DE", "Deutsch").unwrap();
        assert_eq!(state.system_language_code, "DE");
        // Code kept, display name re-resolved in the new catalog.
        assert_eq!(state.translation_language_code, "FR");
        assert_eq!(state.translation_language, "Französisch");
    }

    #[test]
    fn set_system_language_falls_back_on_unknown_target() {
        let (_dir, store) = store();
        store
            .save(&PreferenceState {
                system_language: "English".into(),
                system_language_code: "EN".into(),
                translation_language: "Martian".into(),
                translation_language_code: "XX".into(),
            })
            .unwrap();

        let state = store.set_system_language("DE", "Deutsch").unwrap();
        assert_eq!(state.translation_language_code, DEFAULT_TARGET_CODE);
        assert_eq!(state.translation_language, "Englisch");
    }

    #[test]
    fn set_translation_language_keeps_system_fields() {
        let (_dir, store) = store();
        store.save(&PreferenceState::default()).unwrap();

        let state = store.set_translation_language("JA", "Japanese").unwrap();
        assert_eq!(state.system_language_code, "EN");
        assert_eq!(state.translation_language_code, "JA");
        assert_eq!(store.load(), state);
    }

    #[test]
    fn api_key_round_trips_and_trims() {
        let (_dir, store) = store();
        assert_eq!(store.load_api_key(), None);
        store.save_api_key("  secret-key \n").unwrap();
        assert_eq!(store.load_api_key(), Some("secret-key".to_string()));
    }
}
