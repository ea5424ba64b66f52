use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::storage_config::StorageConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub storage: StorageConfig,
    pub http_server: HttpServerConfig,
    pub sentry_config: SentryConfig
}
