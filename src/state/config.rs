//! Configuration management

use crate::recorder::RecorderOptions;
use crate::{Result, SpeakClipError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Persistent settings read from `~/.speakclip.cfg`
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| SpeakClipError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| SpeakClipError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Default config file path (`~/.speakclip.cfg`)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".speakclip.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("rate", "-1")
            .set("volume", "-1");

        ini.with_section(Some("recorder"))
            .set("device", "")
            .set("timeslice_ms", "1000");

        ini.with_section(Some("clips")).set("download_dir", "");

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Speech rate (0-100); `None` keeps the engine default
    pub fn rate(&self) -> Option<u8> {
        self.get_int("speech", "rate", -1)
            .try_into()
            .ok()
            .filter(|&r| r <= 100)
    }

    /// Speech volume (0-100); `None` keeps the engine default
    pub fn volume(&self) -> Option<u8> {
        self.get_int("speech", "volume", -1)
            .try_into()
            .ok()
            .filter(|&v| v <= 100)
    }

    /// Exact name of the input device to prefer over the first one found
    pub fn input_device(&self) -> Option<String> {
        let name = self.get_string("recorder", "device", "");
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Capture settings for the recorder
    pub fn recorder_options(&self) -> RecorderOptions {
        let default = RecorderOptions::default();
        let timeslice_ms = self
            .get_int("recorder", "timeslice_ms", default.timeslice_ms as i64)
            .try_into()
            .ok()
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(default.timeslice_ms);
        RecorderOptions { timeslice_ms }
    }

    /// Where downloaded clips are written
    ///
    /// Falls back to the platform download folder, then the current directory.
    pub fn download_dir(&self) -> PathBuf {
        let configured = self.get_string("clips", "download_dir", "");
        let configured = configured.trim();
        if !configured.is_empty() {
            return PathBuf::from(configured);
        }
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for Config {
    /// Built-in defaults, not backed by a file
    fn default() -> Self {
        Self {
            ini: Self::default_config(),
            path: Self::config_path(),
        }
    }
}
