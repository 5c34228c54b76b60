use std::path::PathBuf;

use crate::config::{AppPaths, Config, FileProfileStore, ProfileStore};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConfigLoad {
    /// Any read or parse error aborts the command.
    Strict,
    /// A broken document is recorded in `config_error` instead.
    Lenient,
}

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub store: FileProfileStore,
    pub config: Config,
    pub config_error: Option<String>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        config_path: Option<PathBuf>,
        json: bool,
        verbose: u8,
        load: ConfigLoad,
    ) -> AppResult<Self> {
        let paths = match (config_path, load) {
            (Some(path), _) => AppPaths::with_config_file(path),
            (None, ConfigLoad::Strict) => AppPaths::discover()?,
            (None, ConfigLoad::Lenient) => AppPaths::discover().unwrap_or_else(|err| {
                eprintln!("warning: {err}; using temporary directory");
                AppPaths::with_config_file(std::env::temp_dir().join("deckurl").join("config.json"))
            }),
        };
        let store = FileProfileStore::new(paths);
        let (config, config_error) = match (store.load(), load) {
            (Ok(config), _) => (config, None),
            (Err(err), ConfigLoad::Lenient) => (Config::default(), Some(err.to_string())),
            (Err(err), ConfigLoad::Strict) => return Err(err),
        };
        let output = Output::new(json);

        Ok(Self {
            verbose,
            store,
            config,
            config_error,
            output,
        })
    }

    pub fn paths(&self) -> &AppPaths {
        self.store.paths()
    }

    /// Applies `edit` to a copy of the loaded configuration and persists it.
    pub fn update<T>(&self, edit: impl FnOnce(&mut Config) -> AppResult<T>) -> AppResult<T> {
        let mut config = self.config.clone();
        let value = edit(&mut config)?;
        self.store.save(&config)?;
        Ok(value)
    }
}
