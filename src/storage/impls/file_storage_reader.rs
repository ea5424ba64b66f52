use async_trait::async_trait;
use log::debug;
use crate::storage::structs::file_storage_reader::FileStorageReader;
use crate::storage::structs::source_ref::SourceRef;
use crate::storage::traits::storage_reader::StorageReader;

#[async_trait]
impl StorageReader for FileStorageReader {
    async fn read(&self, source: &SourceRef) -> std::io::Result<Vec<u8>> {
        debug!("[STORAGE] Reading {}", source);
        tokio::fs::read(source.as_path()).await
    }
}
