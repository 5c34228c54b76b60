use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::profile::{DEFAULT_PROFILE_NAME, Profile};

fn default_true() -> bool {
    true
}

/// The persisted profile set plus the switches that govern resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub addon_enabled: bool,
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub match_subdecks: bool,
    #[serde(default = "default_true")]
    pub encode_content: bool,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addon_enabled: true,
            default_profile: Some(DEFAULT_PROFILE_NAME.to_string()),
            match_subdecks: false,
            encode_content: true,
            profiles: vec![Profile::new(DEFAULT_PROFILE_NAME)],
        }
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    pub fn profile_mut(&mut self, name: &str) -> AppResult<&mut Profile> {
        self.profiles
            .iter_mut()
            .find(|profile| profile.name == name)
            .ok_or_else(|| AppError::NotFound(format!("profile `{name}`")))
    }

    pub fn add_profile(&mut self, profile: Profile) -> AppResult<()> {
        if profile.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "profile name must not be empty".to_string(),
            ));
        }
        if self.profile(&profile.name).is_some() {
            return Err(AppError::InvalidInput(format!(
                "profile `{}` already exists",
                profile.name
            )));
        }

        self.profiles.push(profile);
        Ok(())
    }

    /// Removes a profile, refusing to drop the last one. A removed explicit
    /// default moves to the first remaining profile.
    pub fn remove_profile(&mut self, name: &str) -> AppResult<Profile> {
        let index = self
            .profiles
            .iter()
            .position(|profile| profile.name == name)
            .ok_or_else(|| AppError::NotFound(format!("profile `{name}`")))?;

        if self.profiles.len() <= 1 {
            return Err(AppError::InvalidInput(
                "cannot remove the last profile".to_string(),
            ));
        }

        let removed = self.profiles.remove(index);
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = self.profiles.first().map(|profile| profile.name.clone());
        }

        Ok(removed)
    }

    pub fn set_default_profile(&mut self, name: &str) -> AppResult<()> {
        if self.profile(name).is_none() {
            return Err(AppError::NotFound(format!("profile `{name}`")));
        }

        self.default_profile = Some(name.to_string());
        Ok(())
    }

    /// Appends decks not already listed; returns how many were added.
    pub fn add_decks(&mut self, name: &str, decks: &[String]) -> AppResult<usize> {
        let profile = self.profile_mut(name)?;
        let mut added = 0;
        for deck in decks.iter().map(|deck| deck.trim()) {
            if deck.is_empty() || profile.decks.iter().any(|existing| existing == deck) {
                continue;
            }
            profile.decks.push(deck.to_string());
            added += 1;
        }

        Ok(added)
    }

    /// Removes every listed deck; returns how many entries were dropped.
    pub fn remove_decks(&mut self, name: &str, decks: &[String]) -> AppResult<usize> {
        let profile = self.profile_mut(name)?;
        let before = profile.decks.len();
        profile
            .decks
            .retain(|existing| !decks.iter().any(|deck| deck.trim() == existing));

        Ok(before - profile.decks.len())
    }
}

pub fn load(path: &Path) -> AppResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(path)?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}

pub fn save(path: &Path, config: &Config) -> AppResult<()> {
    write_json(path, config)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(value)?;
    fs::write(path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
