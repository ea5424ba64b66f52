//! # ACME Certificate Bridge
//!
//! Serves TLS certificates that another ACME client issued and persisted,
//! so a TLS-terminating proxy can fetch them on demand at handshake time.
//!
//! ## Overview
//!
//! One or more ACME storage files (JSON documents mapping resolver names to
//! issued certificates, as written by Traefik) are configured at startup.
//! For every certificate request the service re-reads all of them,
//! validates their shape, normalizes the stored domains, and answers with
//! the PEM certificate chain and key of the first certificate listing the
//! requested domain.
//!
//! ## Request Flow
//!
//! 1. [`http`] receives `GET ?server_name=<domain>`
//! 2. [`lookup`] reads every source concurrently through [`storage`]
//! 3. [`certificate`] decodes and normalizes each validated document
//! 4. [`index`] merges the records in source order and resolves the domain
//!
//! Nothing is cached between requests; a storage file updated by the ACME
//! client is visible on the next request. A single unreadable or invalid
//! source fails every request until it is fixed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acme_cert_bridge::lookup::structs::lookup_service::LookupService;
//!
//! let service = LookupService::from_config(&config.storage);
//! let outcome = service.lookup("example.com").await;
//! ```

/// Certificate decoding and domain normalization.
pub mod certificate;

/// Logging setup and shared helpers.
pub mod common;

/// Configuration loading, environment overrides and validation.
pub mod config;

/// HTTP endpoint answering certificate requests.
pub mod http;

/// Ordered certificate index and first-match domain resolution.
pub mod index;

/// Per-request lookup orchestration.
pub mod lookup;

/// ACME storage reading, JSON decoding and schema validation.
pub mod storage;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;
