//! Configuration management module.
//!
//! The service reads `config.toml` (or the file given with `--config`). A
//! missing file falls back to the built-in defaults, so the service can be
//! configured through the environment alone.
//!
//! # Configuration Structure
//!
//! - **log_level**: off, trace, debug, info, warn or error
//! - **storage**: ordered list of ACME storage files
//! - **http_server**: listener address and worker settings
//! - **sentry_config**: optional error reporting
//!
//! # Environment
//!
//! `ACME_STORAGE_PATH` replaces `storage.sources` with a `:`-separated list
//! of storage files.
//!
//! # Example
//!
//! ```rust,ignore
//! use acme_cert_bridge::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_env_overrides()?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
