use crate::storage::enums::storage_error::StorageError;

#[derive(Debug)]
pub enum LookupOutcome {
    /// PEM text of the matching certificate and key.
    Found(String),
    NotFound,
    SourceError(StorageError),
}
