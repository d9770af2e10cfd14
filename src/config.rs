//! Configuration file handling.
//!
//! The configuration file is stored at `$CONTAS_HOME/config.json` next to the
//! SQLite database that holds the ledger records. `Config` represents a home
//! directory that is ready to use.

use crate::db::Db;
use crate::store::LedgerStore;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "contas";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const CONTAS_SQLITE: &str = "contas.sqlite";

/// The `Config` object represents the application's home directory. You
/// instantiate it by providing the path to `$CONTAS_HOME`, and from there it
/// loads `$CONTAS_HOME/config.json` and opens the database.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    db: Db,
    sqlite_path: PathBuf,
}

impl Config {
    /// Creates the home directory (if needed), writes an initial `config.json`
    /// and initializes the SQLite database.
    ///
    /// # Errors
    /// - Returns an error if any file operation fails.
    /// - Returns an error if a database file already exists in the directory.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the contas home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;

        let sqlite_path = root.join(CONTAS_SQLITE);
        let db = Db::init(&sqlite_path)
            .await
            .context("Unable to create SQLite DB")?;

        Ok(Self {
            root,
            config_path,
            config_file,
            db,
            sqlite_path,
        })
    }

    /// This will
    /// - validate that the home directory and the config file exist
    /// - load and validate the config file
    /// - open the SQLite database
    /// - return the loaded configuration object
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("Contas home is missing; run 'contas init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let sqlite_path = root.join(CONTAS_SQLITE);
        let db = Db::load(&sqlite_path)
            .await
            .context("Unable to load SQLite DB")?;

        Ok(Self {
            root,
            config_path,
            config_file,
            db,
            sqlite_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn sqlite_path(&self) -> &Path {
        &self.sqlite_path
    }

    pub fn config_version(&self) -> u8 {
        self.config_file.config_version
    }

    pub(crate) fn db(&self) -> &Db {
        &self.db
    }

    /// Creates a new ledger store over this configuration's database.
    pub fn store(&self) -> LedgerStore {
        LedgerStore::new(self.db.clone())
    }
}

/// Represents the serialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "contas",
///   "config_version": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "contas".
    app_name: String,

    /// Configuration file version.
    config_version: u8,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if its
    /// `app_name` does not match this application.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path).await?;
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}
