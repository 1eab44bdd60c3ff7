use std::{
    collections::BTreeMap,
    env,
    ffi::OsString,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{errors::ConfigError, locale::Locale};

pub const DEFAULT_PRICE_UNIT: &str = "priceUnit";
pub const WON_PRICE_UNIT: &str = "wonPriceUnit";
pub const PORT_ENV: &str = "VROONG_SERVER_PORT";

const APP_DIR: &str = "vroong";
const CONFIG_FILE: &str = "config.json";
const STAGING_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_port: Option<u16>,
    #[serde(default = "Config::default_price_units")]
    pub price_units: BTreeMap<String, Locale>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: None,
            price_units: Self::default_price_units(),
        }
    }
}

impl Config {
    fn default_price_units() -> BTreeMap<String, Locale> {
        BTreeMap::from([
            (DEFAULT_PRICE_UNIT.to_string(), Locale::us()),
            (WON_PRICE_UNIT.to_string(), Locale::korea()),
        ])
    }

    /// Overrides the port from `VROONG_SERVER_PORT` when it is set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_port_override(env::var(PORT_ENV).ok().as_deref())
    }

    fn apply_port_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = raw {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
            self.server_port = Some(port);
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<user config dir>/vroong/config.json`, or the working directory when
    /// the platform has no config dir.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    /// Loads the file, or writes the defaults there on first run.
    pub fn load_or_create(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }

    /// Writes `config` next to the target and renames it into place.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = self.staging_path();
        let mut file = File::create(&staging)?;
        serde_json::to_writer_pretty(&mut file, config)?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        fs::rename(&staging, &self.path)?;
        tracing::info!(path = %self.path.display(), "wrote configuration");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(CONFIG_FILE));
        name.push(STAGING_SUFFIX);
        self.path.with_file_name(name)
    }
}
