// Settings service
// Loads and saves widget settings as TOML in the platform config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{info, warn};

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Service rooted at the platform config directory.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "RustScheduler", "Scheduler")
            .context("Failed to determine config directory")?;
        Ok(Self::with_dir(dirs.config_dir()))
    }

    /// Service rooted at an explicit directory. Used by tests.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SETTINGS_FILE),
        }
    }

    /// Load settings, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            info!("No settings file at {:?}, using defaults", self.path);
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;

        if let Err(e) = settings.validate() {
            warn!("Settings file {:?} is invalid ({}), using defaults", self.path, e);
            return Ok(Settings::default());
        }

        Ok(settings)
    }

    /// Validate and persist settings.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
