//! Local preference persistence.
//!
//! Session settings live in `${WARUNG_HOME}/prefs.toml`. Each setter rewrites
//! only its own key, preserving everything else in the file, and replaces the
//! file atomically (temp file + rename). Reads fall back to a caller-supplied
//! default when the file or key is absent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, value};

const KEY_REMEMBER_ME: &str = "remember_me";
const KEY_EMAIL: &str = "email";
const KEY_PASSWORD: &str = "password";
const KEY_IS_LOGGED_IN: &str = "is_logged_in";
const KEY_USER_ROLE: &str = "user_role";

pub mod paths {
    //! Path resolution for Warung preference and log directories.
    //!
    //! WARUNG_HOME resolution order:
    //! 1. WARUNG_HOME environment variable (if set)
    //! 2. ~/.config/warung (default)

    use std::path::PathBuf;

    /// Returns the Warung home directory.
    pub fn warung_home() -> PathBuf {
        if let Ok(home) = std::env::var("WARUNG_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("warung"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the prefs.toml file.
    pub fn prefs_path() -> PathBuf {
        warung_home().join("prefs.toml")
    }

    /// Returns the directory for TUI log files.
    pub fn logs_dir() -> PathBuf {
        warung_home().join("logs")
    }
}

/// Typed snapshot of the preference file.
///
/// Missing file or missing keys deserialize to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub remember_me: bool,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_logged_in: bool,
    pub user_role: Option<String>,
}

/// Handle to the preference file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    /// Opens the store at the default prefs path.
    pub fn open_default() -> Self {
        Self::open(paths::prefs_path())
    }

    /// Opens the store at a specific file path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file into a typed snapshot.
    pub fn snapshot(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read prefs from {}", self.path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse prefs from {}", self.path.display()))
    }

    pub fn set_remember_me(&self, remember: bool) -> Result<()> {
        self.set_bool(KEY_REMEMBER_ME, remember)
    }

    pub fn remember_me(&self) -> bool {
        self.get_bool(KEY_REMEMBER_ME, false)
    }

    /// Stores email and password in one write.
    pub fn save_credentials(&self, email: &str, password: &str) -> Result<()> {
        let mut doc = self.read_doc()?;
        doc[KEY_EMAIL] = value(email);
        doc[KEY_PASSWORD] = value(password);
        self.write_doc(&doc)
    }

    pub fn email(&self) -> Option<String> {
        self.get_str(KEY_EMAIL)
    }

    pub fn password(&self) -> Option<String> {
        self.get_str(KEY_PASSWORD)
    }

    pub fn set_logged_in(&self, logged_in: bool) -> Result<()> {
        self.set_bool(KEY_IS_LOGGED_IN, logged_in)
    }

    pub fn is_logged_in(&self) -> bool {
        self.get_bool(KEY_IS_LOGGED_IN, false)
    }

    pub fn set_user_role(&self, role: &str) -> Result<()> {
        let mut doc = self.read_doc()?;
        doc[KEY_USER_ROLE] = value(role);
        self.write_doc(&doc)
    }

    pub fn user_role(&self) -> Option<String> {
        self.get_str(KEY_USER_ROLE)
    }

    /// Removes the credential keys: email, password, and the logged-in flag.
    ///
    /// `user_role` and `remember_me` survive this call.
    pub fn clear_login_data(&self) -> Result<()> {
        let mut doc = self.read_doc()?;
        doc.remove(KEY_EMAIL);
        doc.remove(KEY_PASSWORD);
        doc.remove(KEY_IS_LOGGED_IN);
        self.write_doc(&doc)
    }

    /// Removes the preference file entirely.
    pub fn clear_all(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }

    fn set_bool(&self, key: &str, v: bool) -> Result<()> {
        let mut doc = self.read_doc()?;
        doc[key] = value(v);
        self.write_doc(&doc)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read_doc() {
            Ok(doc) => doc.get(key).and_then(Item::as_bool).unwrap_or(default),
            Err(err) => {
                tracing::warn!("unreadable prefs file, defaulting {key}: {err:#}");
                default
            }
        }
    }

    fn get_str(&self, key: &str) -> Option<String> {
        match self.read_doc() {
            Ok(doc) => doc
                .get(key)
                .and_then(Item::as_str)
                .map(std::string::ToString::to_string),
            Err(err) => {
                tracing::warn!("unreadable prefs file, defaulting {key}: {err:#}");
                None
            }
        }
    }

    fn read_doc(&self) -> Result<DocumentMut> {
        if !self.path.exists() {
            return Ok(DocumentMut::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read prefs from {}", self.path.display()))?;
        contents
            .parse()
            .with_context(|| format!("Failed to parse prefs from {}", self.path.display()))
    }

    /// Writes the document atomically, creating parent directories as needed.
    fn write_doc(&self, doc: &DocumentMut) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, doc.to_string())
            .with_context(|| format!("Failed to write prefs to {}", tmp_path.display()))?;

        // Credentials land in this file; keep it owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600)).with_context(
                || format!("Failed to set permissions on {}", tmp_path.display()),
            )?;
        }

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
