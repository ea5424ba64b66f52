//! Lookup service.
//!
//! Each lookup re-reads every configured storage source, validates and
//! normalizes them, merges the results into a [`CertificateIndex`] and
//! resolves one domain against it. Nothing is cached between lookups, so an
//! updated storage file is visible on the next request. Every source is
//! mandatory: one unreadable or invalid source fails the lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use acme_cert_bridge::lookup::enums::lookup_outcome::LookupOutcome;
//! use acme_cert_bridge::lookup::structs::lookup_service::LookupService;
//!
//! let service = LookupService::from_config(&config.storage);
//! match service.lookup("example.com").await {
//!     LookupOutcome::Found(pem) => println!("{pem}"),
//!     LookupOutcome::NotFound => println!("no certificate"),
//!     LookupOutcome::SourceError(error) => eprintln!("{error}"),
//! }
//! ```
//!
//! [`CertificateIndex`]: crate::index::structs::certificate_index::CertificateIndex

/// Lookup outcomes.
pub mod enums;

/// Lookup service structure.
pub mod structs;

/// Lookup service implementation.
pub mod impls;
