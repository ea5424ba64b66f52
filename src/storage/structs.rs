//! Storage data structures.

/// Opaque storage source identifier.
pub mod source_ref;

/// Location and constraint of a failed schema check.
pub mod schema_violation;

/// `domain` object of a stored certificate.
pub mod storage_domain;

/// One stored certificate.
pub mod storage_certificate;

/// One resolver entry of a storage document.
pub mod storage_entry;

/// Fully validated storage document.
pub mod validated_storage;

/// Local filesystem storage reader.
pub mod file_storage_reader;
