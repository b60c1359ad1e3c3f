//! Engine configuration file support.
//!
//! Settings are read from TOML or from the environment and applied once
//! when an [`crate::Ephemeris`] is built.
//!
//! ```toml
//! [ephemeris]
//! path = "/usr/share/sweph"
//! jpl_file = "de441.eph"
//!
//! [sidereal]
//! mode = 1
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// File name searched by [`EngineConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "swisseph.toml";

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
    /// Sidereal mode used with `Sidereal` flags; engine default when absent
    #[serde(default)]
    pub sidereal: Option<SiderealSettings>,
}

/// Ephemeris file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Directory (or `:`-separated list) holding the ephemeris files
    #[serde(default)]
    pub path: Option<String>,
    /// JPL ephemeris file name, looked up in `path`
    #[serde(default)]
    pub jpl_file: Option<String>,
}

/// Sidereal mode (ayanamsha) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiderealSettings {
    /// Engine `SE_SIDM_*` number
    pub mode: i32,
    /// Reference epoch (JD) for user-defined modes
    #[serde(default)]
    pub t0: f64,
    /// Ayanamsha at `t0` for user-defined modes
    #[serde(default)]
    pub ayan_t0: f64,
}

impl SiderealSettings {
    pub fn new(mode: i32) -> Self {
        Self {
            mode,
            t0: 0.0,
            ayan_t0: 0.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(Error::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `swisseph.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Errors
    /// `Error::Config` when no file exists, or when the first file found
    /// cannot be read or parsed.
    pub fn from_default_location() -> Result<Self> {
        Self::find()?.ok_or_else(|| {
            Error::Config(format!(
                "No {} found in standard locations",
                CONFIG_FILE_NAME
            ))
        })
    }

    /// Like [`from_default_location`](Self::from_default_location), but
    /// `Ok(None)` when no file exists. A file that exists but is broken is
    /// still an error.
    pub fn find() -> Result<Option<Self>> {
        Self::find_in(".")
    }

    /// Search the standard locations relative to `base`.
    pub fn find_in<P: AsRef<Path>>(base: P) -> Result<Option<Self>> {
        let base = base.as_ref();
        let search_paths = [
            base.join(CONFIG_FILE_NAME),
            base.join("config").join(CONFIG_FILE_NAME),
            base.join("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SE_EPHE_PATH` (optional): ephemeris directory
    /// - `SE_JPL_FILE` (optional): JPL file name
    /// - `SE_SID_MODE` (optional): sidereal mode number
    ///
    /// # Errors
    /// Returns an error if `SE_SID_MODE` is not an integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sidereal = match non_empty("SE_SID_MODE") {
            Some(raw) => {
                let mode = raw.trim().parse::<i32>().map_err(|_| {
                    Error::Config(format!("SE_SID_MODE must be an integer, got '{}'", raw))
                })?;
                Some(SiderealSettings::new(mode))
            }
            None => None,
        };

        Ok(Self {
            ephemeris: EphemerisSettings {
                path: non_empty("SE_EPHE_PATH"),
                jpl_file: non_empty("SE_JPL_FILE"),
            },
            sidereal,
        })
    }

    /// True when nothing would be sent to the engine.
    pub fn is_empty(&self) -> bool {
        self.ephemeris.path.is_none() && self.ephemeris.jpl_file.is_none() && self.sidereal.is_none()
    }
}
