use crate::storage::structs::storage_certificate::StorageCertificate;
use crate::storage::structs::validated_storage::ValidatedStorage;

impl ValidatedStorage {
    /// All certificates of the document, flattened across resolver entries.
    pub fn certificates(&self) -> impl Iterator<Item = &StorageCertificate> {
        self.entries.iter().flat_map(|entry| entry.certificates.iter())
    }

    pub fn certificate_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.certificates.len()).sum()
    }
}
