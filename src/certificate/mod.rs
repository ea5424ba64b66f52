//! Certificate normalization.
//!
//! Turns validated storage documents into flat [`CertificateRecord`]s: the
//! domain list of each certificate is formatted for matching, and the
//! base64 `certificate` and `key` payloads are decoded into one PEM text.
//!
//! [`CertificateRecord`]: structs::certificate_record::CertificateRecord

/// Certificate decoding errors.
pub mod enums;

/// Normalized certificate records.
pub mod structs;

/// Domain formatting, PEM decoding and normalization.
#[allow(clippy::module_inception)]
pub mod certificate;

mod tests;
