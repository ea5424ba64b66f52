use crate::storage::structs::storage_certificate::StorageCertificate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    /// Top-level key of the document. Only used in diagnostics.
    pub resolver: String,
    pub certificates: Vec<StorageCertificate>,
}
