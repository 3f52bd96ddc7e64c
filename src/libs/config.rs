//! Configuration for the three services and the username resolver.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). Every section is optional
//! in the file; missing sections fall back to defaults, so a fresh install
//! can run `taskmesh serve all` without any setup.
//!
//! ## Precedence
//!
//! 1. Command-line flags of `taskmesh serve`
//! 2. Environment (`TASKMESH_USERS_URL`, `TASKMESH_RESOLVER_TIMEOUT_MS`),
//!    including values loaded from a `.env` file
//! 3. `config.json`
//! 4. Built-in defaults
//!
//! ```rust,no_run
//! use taskmesh::libs::config::{Config, Service};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?.with_env_overrides();
//! let tasks = config.service(Service::Tasks);
//! println!("tasks listen on {}:{}", tasks.host, tasks.port);
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_USERS_URL: &str = "TASKMESH_USERS_URL";
pub const ENV_RESOLVER_TIMEOUT_MS: &str = "TASKMESH_RESOLVER_TIMEOUT_MS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// The services a single `taskmesh` binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Service {
    Projects,
    Tasks,
    Users,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Projects, Service::Tasks, Service::Users];

    pub fn key(&self) -> &'static str {
        match self {
            Service::Projects => "projects",
            Service::Tasks => "tasks",
            Service::Users => "users",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Service::Projects => 8081,
            Service::Tasks => 8082,
            Service::Users => 8083,
        }
    }

    fn module_message(&self) -> Message {
        match self {
            Service::Projects => Message::ConfigModuleProjects,
            Service::Tasks => Message::ConfigModuleTasks,
            Service::Users => Message::ConfigModuleUsers,
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a configurable module shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Listener and storage settings of one service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Database file name inside the data directory.
    pub db_file: String,
}

impl ServiceConfig {
    pub fn default_for(service: Service) -> Self {
        ServiceConfig {
            host: DEFAULT_HOST.to_string(),
            port: service.default_port(),
            db_file: format!("{}.db", service.key()),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn prompt(service: Service, default: ServiceConfig) -> Result<Self> {
        msg_print!(service.module_message());
        Ok(ServiceConfig {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServiceHost.to_string())
                .default(default.host)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServicePort.to_string())
                .default(default.port)
                .interact_text()?,
            db_file: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServiceDbFile.to_string())
                .default(default.db_file)
                .interact_text()?,
        })
    }
}

/// How the tasks service reaches the users service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Base URL; `/users/{id}/name` is appended per lookup.
    pub users_url: String,
    /// Upper bound for one name lookup. On expiry the fallback name is used.
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            users_url: format!("http://{}:{}", DEFAULT_HOST, Service::Users.default_port()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<ServiceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<ServiceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<ServiceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<ResolverConfig>,
}

impl Config {
    /// Loads `config.json`, or the defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
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

    /// Removes `config.json`. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Settings of `service`, with defaults for an unconfigured section.
    pub fn service(&self, service: Service) -> ServiceConfig {
        let section = match service {
            Service::Projects => &self.projects,
            Service::Tasks => &self.tasks,
            Service::Users => &self.users,
        };
        section.clone().unwrap_or_else(|| ServiceConfig::default_for(service))
    }

    pub fn resolver(&self) -> ResolverConfig {
        self.resolver.clone().unwrap_or_default()
    }

    /// Applies resolver settings from the environment. Unparseable values
    /// are reported and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        let mut resolver = self.resolver();
        let mut changed = false;

        if let Ok(url) = env::var(ENV_USERS_URL) {
            resolver.users_url = url;
            changed = true;
        }
        if let Ok(value) = env::var(ENV_RESOLVER_TIMEOUT_MS) {
            match value.parse() {
                Ok(timeout_ms) => {
                    resolver.timeout_ms = timeout_ms;
                    changed = true;
                }
                Err(_) => msg_warning!(Message::InvalidEnvValue(ENV_RESOLVER_TIMEOUT_MS.to_string(), value)),
            }
        }

        if changed {
            self.resolver = Some(resolver);
        }
        self
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let mut modules: Vec<ConfigModule> = Service::ALL
            .iter()
            .map(|service| ConfigModule {
                key: service.key().to_string(),
                name: service.module_message().to_string(),
            })
            .collect();
        modules.push(ConfigModule {
            key: "resolver".to_string(),
            name: Message::ConfigModuleResolver.to_string(),
        });

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "projects" => config.projects = Some(ServiceConfig::prompt(Service::Projects, config.service(Service::Projects))?),
                "tasks" => config.tasks = Some(ServiceConfig::prompt(Service::Tasks, config.service(Service::Tasks))?),
                "users" => config.users = Some(ServiceConfig::prompt(Service::Users, config.service(Service::Users))?),
                "resolver" => {
                    let default = config.resolver();
                    msg_print!(Message::ConfigModuleResolver);
                    config.resolver = Some(ResolverConfig {
                        users_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUsersUrl.to_string())
                            .default(default.users_url)
                            .interact_text()?,
                        timeout_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptResolverTimeout.to_string())
                            .default(default.timeout_ms)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_sections_use_defaults() {
        let config = Config::default();
        assert_eq!(config.service(Service::Tasks).port, 8082);
        assert_eq!(config.service(Service::Users).db_file, "users.db");
        assert_eq!(config.resolver().users_url, "http://127.0.0.1:8083");
        assert_eq!(config.resolver().timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn empty_sections_are_not_serialized() {
        let config = Config {
            resolver: Some(ResolverConfig::default()),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("resolver"));
        assert!(!json.contains("projects"));
    }
}
