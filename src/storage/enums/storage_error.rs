use thiserror::Error;
use crate::certificate::enums::certificate_error::CertificateError;
use crate::storage::structs::schema_violation::SchemaViolation;
use crate::storage::structs::source_ref::SourceRef;

/// Failure of a single storage source. Any of these aborts the whole lookup.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ACME storage could not be read \"{source_ref}\"")]
    SourceUnreadable {
        source_ref: SourceRef,
        #[source]
        source: std::io::Error,
    },
    #[error("ACME storage invalid JSON \"{source_ref}\"")]
    MalformedJson {
        source_ref: SourceRef,
        #[source]
        source: serde_json::Error,
    },
    #[error("ACME storage invalid \"{source_ref}\"")]
    SchemaViolation {
        source_ref: SourceRef,
        #[source]
        source: SchemaViolation,
    },
    #[error("ACME storage certificate undecodable \"{source_ref}\" at {path}")]
    CertificateDecode {
        source_ref: SourceRef,
        path: String,
        #[source]
        source: CertificateError,
    },
}
