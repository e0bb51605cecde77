//! Small on-disk store for viewer preferences.
//!
//! The theme choice is kept in `<cache_dir>/preferences.toml` as a single
//! `theme = "dark"` (or `"light"`) entry. Reads never fail loudly: a missing
//! or malformed file simply means "no saved preference".

use crate::config::ThemeMode;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Persistence boundary for the theme preference.
pub trait PreferenceStore: Send {
    fn load_theme(&self) -> Option<ThemeMode>;
    fn save_theme(&mut self, theme: ThemeMode) -> Result<()>;
}

/// TOML-file backed store.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn in_dir(cache_dir: &Path) -> Self {
        Self {
            path: cache_dir.join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn load_theme(&self) -> Option<ThemeMode> {
        let data = fs::read_to_string(&self.path).ok()?;
        let entry: PreferenceEntry = toml::from_str(&data).ok()?;
        entry.theme
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let entry = PreferenceEntry { theme: Some(theme) };
        let contents = toml::to_string(&entry).context("serializing preferences")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// Process-local store; used when the disk is unavailable and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    theme: Option<ThemeMode>,
}

impl MemoryPreferences {
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self { theme: Some(theme) }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct PreferenceEntry {
    #[serde(default)]
    theme: Option<ThemeMode>,
}
