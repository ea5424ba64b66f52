use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::storage::structs::source_ref::SourceRef;

pub const STORAGE_PATH_ENV: &str = "ACME_STORAGE_PATH";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            storage: StorageConfig {
                sources: vec![]
            },
            http_server: HttpServerConfig {
                bind_address: String::from("127.0.0.1:3000"),
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                max_connections: 25000,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`. A missing file yields the defaults, unless `create` is
    /// set: then a missing or broken file is replaced by the defaults and
    /// loading stops so the operator can edit them.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = Configuration::init();
        match Configuration::load_file(path) {
            Ok(c) => Ok(c),
            Err(ConfigurationError::IOError(e)) if !create && e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("No config file found at {}, using defaults.", path);
                Ok(config)
            }
            Err(error) if !create => {
                eprintln!("Config file {} is corrupt.", path);
                eprintln!("[ERROR] {}", error);
                eprintln!("Fix the file, or recreate it using '--create-config' as parameter.");
                Err(CustomError::new("will not create automatically config file"))
            }
            Err(error) => {
                eprintln!("[ERROR] {}", error);
                eprintln!("Creating config file {}..", path);
                match Configuration::save_from_config(path, &config) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new("create config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                }
            }
        }
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        self.apply_storage_path_override(std::env::var(STORAGE_PATH_ENV).ok())
    }

    /// Replaces the storage sources with a `:`-separated list, when given.
    pub fn apply_storage_path_override(&mut self, value: Option<String>) -> Result<(), ConfigurationError> {
        let Some(value) = value else {
            return Ok(());
        };
        let sources = SourceRef::parse_list(&value);
        if sources.is_empty() {
            return Err(ConfigurationError::Validation(format!("{} environment variable empty", STORAGE_PATH_ENV)));
        }
        self.storage.sources = sources;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::Validation(format!("unknown log level '{}'", self.log_level)));
        }
        if self.storage.sources.is_empty() {
            return Err(ConfigurationError::Validation(format!(
                "no storage sources configured, set [storage] sources or {}",
                STORAGE_PATH_ENV
            )));
        }
        if self.storage.sources.iter().any(|source| source.as_str().is_empty()) {
            return Err(ConfigurationError::Validation(String::from("storage source path is empty")));
        }
        if self.http_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::Validation(format!(
                "bind address '{}' is not a socket address",
                self.http_server.bind_address
            )));
        }
        if self.http_server.threads == 0 {
            return Err(ConfigurationError::Validation(String::from("http_server threads must be at least 1")));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
