//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Storage source list.
pub mod storage_config;

/// HTTP server configuration.
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
