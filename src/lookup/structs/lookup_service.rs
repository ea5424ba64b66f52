use std::sync::Arc;
use crate::storage::structs::source_ref::SourceRef;
use crate::storage::traits::storage_reader::StorageReader;

pub struct LookupService {
    /// Storage sources in configured order. Earlier sources win ties.
    pub sources: Vec<SourceRef>,
    pub reader: Arc<dyn StorageReader>,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("sources", &self.sources)
            .finish()
    }
}
