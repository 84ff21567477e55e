use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::session::{SessionConfig, DEFAULT_DURATION_MS, DEFAULT_SPAWN_PERIOD_MS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub duration_ms: u64,
    pub spawn_period_ms: u64,
    pub max_targets: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            spawn_period_ms: DEFAULT_SPAWN_PERIOD_MS,
            max_targets: None,
        }
    }
}

impl Config {
    pub fn session_config(&self) -> Result<SessionConfig> {
        SessionConfig {
            duration: Duration::from_millis(self.duration_ms),
            spawn_period: Duration::from_millis(self.spawn_period_ms),
            max_targets: self.max_targets,
        }
        .validated()
    }
}

impl From<&SessionConfig> for Config {
    fn from(sc: &SessionConfig) -> Self {
        Self {
            duration_ms: sc.duration.as_millis() as u64,
            spawn_period_ms: sc.spawn_period.as_millis() as u64,
            max_targets: sc.max_targets,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "clickshot") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("clickshot_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|err| {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
