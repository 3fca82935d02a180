//! Configuration management for todolist.
//!
//! Settings are kept as pretty-printed JSON (`config.json`) in the platform
//! data directory and split into two optional sections:
//!
//! - **Server**: bind address and database file for `todolist serve`
//! - **Client**: API base URL and request timeout for the client commands
//!
//! A missing file or section falls back to defaults. Environment variables
//! (optionally loaded from a `.env` file) override whatever was read:
//!
//! | Variable | Overrides |
//! |---|---|
//! | `HOST` | `server.host` |
//! | `PORT` | `server.port` |
//! | `DATABASE_PATH` | `server.database` |
//! | `TODOLIST_API_URL` | `client.api_url` |
//! | `TODOLIST_TIMEOUT_SECS` | `client.timeout_secs` |
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?;
//! let server = config.server();
//! println!("binding {}", server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings for the HTTP API process.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0` or `127.0.0.1`.
    pub host: String,
    pub port: u16,
    /// SQLite file. `None` means `todolist.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

/// Settings for the client commands that talk to the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api` prefix.
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The database file to open, defaulting into the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Applies `HOST`, `PORT` and `DATABASE_PATH` as returned by `lookup`.
    ///
    /// An unparsable port is reported and ignored.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("HOST").filter(|value| !value.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => msg_warning!(Message::InvalidEnvValue("PORT".to_string(), port)),
            }
        }
        if let Some(database) = lookup("DATABASE_PATH").filter(|value| !value.trim().is_empty()) {
            self.database = Some(PathBuf::from(database.trim()));
        }
        self
    }
}

impl ClientConfig {
    /// Applies `TODOLIST_API_URL` and `TODOLIST_TIMEOUT_SECS` as returned by `lookup`.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(api_url) = lookup("TODOLIST_API_URL").filter(|value| !value.trim().is_empty()) {
            self.api_url = api_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(timeout) = lookup("TODOLIST_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => msg_warning!(Message::InvalidEnvValue("TODOLIST_TIMEOUT_SECS".to_string(), timeout)),
            }
        }
        self
    }
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Effective server settings: the stored section or defaults, with
    /// environment overrides applied.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default().apply_env(env_lookup)
    }

    /// Effective client settings, resolved the same way as [`Config::server`].
    pub fn client(&self) -> ClientConfig {
        self.client.clone().unwrap_or_default().apply_env(env_lookup)
    }

    /// Interactive setup wizard. Starts from the stored configuration so
    /// existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "client".to_string(),
                name: "Client".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);

                    let database: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.database.as_ref().map(|path| path.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                        database: if database.trim().is_empty() { None } else { Some(PathBuf::from(database.trim())) },
                    });
                }
                "client" => {
                    let default = config.client.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleClient);
                    config.client = Some(ClientConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRequestTimeout.to_string())
                            .default(default.timeout_secs)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
