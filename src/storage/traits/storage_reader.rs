use async_trait::async_trait;
use crate::storage::structs::source_ref::SourceRef;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageReader: Send + Sync {
    /// Returns the full, raw contents of `source`.
    async fn read(&self, source: &SourceRef) -> std::io::Result<Vec<u8>>;
}
