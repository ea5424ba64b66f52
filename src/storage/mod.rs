//! ACME storage parsing and schema validation.
//!
//! A storage source is a JSON document written by an ACME client (for
//! example Traefik's `acme.json`). Its top-level keys are resolver names,
//! each mapping to an entry holding the issued certificates:
//!
//! ```json
//! {
//!   "letsencrypt": {
//!     "Certificates": [
//!       {
//!         "domain": { "main": "example.com", "sans": ["www.example.com"] },
//!         "certificate": "<base64 PEM chain>",
//!         "key": "<base64 PEM key>"
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Sources are untrusted input. Every entry and every certificate is
//! checked before a document is accepted; unknown fields are ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! use acme_cert_bridge::storage::storage::parse_source;
//! use acme_cert_bridge::storage::structs::file_storage_reader::FileStorageReader;
//! use acme_cert_bridge::storage::structs::source_ref::SourceRef;
//!
//! let storage = parse_source(&FileStorageReader, &SourceRef::from("/data/acme.json")).await?;
//! ```

/// Error and constraint enumerations.
pub mod enums;

/// Typed storage document structures.
pub mod structs;

/// Implementation blocks for storage types.
pub mod impls;

/// Storage reader trait definitions.
pub mod traits;

/// Source parsing and recursive schema validation.
#[allow(clippy::module_inception)]
pub mod storage;
