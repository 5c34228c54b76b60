use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "deckurl";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_file: PathBuf,
    log_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        let config_dir = config_root.join(APP_DIR);
        let log_dir = data_root.join(APP_DIR).join("logs");

        fs::create_dir_all(&config_dir)?;

        Ok(Self {
            config_file: config_dir.join(CONFIG_FILE),
            log_dir,
        })
    }

    /// Uses `config_file` as the document path; logs go next to it.
    pub fn with_config_file(config_file: PathBuf) -> Self {
        let log_dir = config_file
            .parent()
            .map(|parent| parent.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            config_file,
            log_dir,
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_places_logs_beside_config() {
        let paths = AppPaths::with_config_file(PathBuf::from("/tmp/deckurl/custom.json"));
        assert_eq!(paths.config_file(), Path::new("/tmp/deckurl/custom.json"));
        assert_eq!(paths.log_dir(), Path::new("/tmp/deckurl/logs"));
    }
}
