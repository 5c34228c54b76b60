use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

use super::paths::AppPaths;
use super::profile::{Profile, ProfileFile, resolve_profile_name};
use super::settings::{self, Config};

pub trait ProfileStore {
    fn load(&self) -> AppResult<Config>;
    fn save(&self, config: &Config) -> AppResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    paths: AppPaths,
}

impl FileProfileStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> AppResult<Config> {
        settings::load(self.paths.config_file())
    }

    fn save(&self, config: &Config) -> AppResult<()> {
        settings::save(self.paths.config_file(), config)
    }
}

/// Reads a single profile document. The name comes from `name_override`,
/// then the document's own `name`, then the file stem.
pub fn import_profile(path: &Path, name_override: Option<&str>) -> AppResult<Profile> {
    let raw = fs::read_to_string(path)?;
    let file: ProfileFile = serde_json::from_str(&raw)?;

    let stem = path.file_stem().and_then(|stem| stem.to_str());
    let name = [name_override, file.name.as_deref(), stem]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "cannot name profile from {}; pass --name",
                path.display()
            ))
        })?;

    let name = resolve_profile_name(name);
    Ok(file.into_profile(name))
}

pub fn export_profile(path: &Path, profile: &Profile) -> AppResult<()> {
    settings::write_json(path, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_through_to_stem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kanji.json");
        fs::write(&path, r#"{"name":"  ","decks":["Kanji"]}"#).expect("write profile");

        let profile = import_profile(&path, Some("")).expect("import");
        assert_eq!(profile.name, "kanji");
        assert_eq!(profile.decks, ["Kanji"]);
    }
}
