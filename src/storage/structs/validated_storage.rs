use crate::storage::structs::source_ref::SourceRef;
use crate::storage::structs::storage_entry::StorageEntry;

/// A storage document that passed every schema check, entries kept in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStorage {
    pub source: SourceRef,
    pub entries: Vec<StorageEntry>,
}
