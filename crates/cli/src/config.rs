use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use fittutto_domain as domain;
use log::{LevelFilter, debug};

pub const DEFAULT_CONFIG_FILE: &str = "fittutto.json";

/// Settings used when the corresponding command line options are omitted.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub location: String,
    pub equipment: Vec<String>,
    pub days_per_week: u32,
    pub minutes_per_session: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".fittutto"),
            log_level: "warn".to_string(),
            location: "home".to_string(),
            equipment: vec!["mat".to_string()],
            days_per_week: 3,
            minutes_per_session: 45,
        }
    }
}

impl Settings {
    /// Reads the settings from the given file. Without an explicit path, the default file in the
    /// working directory is used if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("no settings file found, using defaults");
                    return Ok(Settings::default());
                }
                path
            }
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log level \"{}\"", self.log_level))
    }

    pub fn location(&self) -> Result<domain::TrainingLocation> {
        Ok(self.location.parse()?)
    }

    pub fn equipment(&self) -> Result<BTreeSet<domain::Equipment>> {
        self.equipment
            .iter()
            .map(|e| e.parse().map_err(anyhow::Error::from))
            .collect()
    }
}
