use std::sync::Arc;
use futures_util::future::try_join_all;
use log::{debug, info};
use crate::certificate::certificate::normalize_storage;
use crate::config::structs::storage_config::StorageConfig;
use crate::index::structs::certificate_index::CertificateIndex;
use crate::lookup::enums::lookup_outcome::LookupOutcome;
use crate::lookup::structs::lookup_service::LookupService;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::storage::parse_source;
use crate::storage::structs::file_storage_reader::FileStorageReader;
use crate::storage::structs::source_ref::SourceRef;
use crate::storage::traits::storage_reader::StorageReader;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

impl LookupService {
    pub fn new(sources: Vec<SourceRef>, reader: Arc<dyn StorageReader>) -> LookupService {
        LookupService { sources, reader }
    }

    pub fn from_config(config: &StorageConfig) -> LookupService {
        Self::new(config.sources.clone(), Arc::new(FileStorageReader))
    }

    /// Reads all sources concurrently and builds a fresh index once every
    /// read has finished. The first failing source fails the whole load.
    pub async fn load_index(&self) -> Result<CertificateIndex, StorageError> {
        let reader = self.reader.as_ref();
        let storages = try_join_all(self.sources.iter().map(|source| parse_source(reader, source))).await?;
        let records = storages
            .iter()
            .map(normalize_storage)
            .collect::<Result<Vec<_>, _>>()?;
        let index = CertificateIndex::merge(records);

        info!("[LOOKUP] Loaded {} certificates from {} storages", index.len(), storages.len());
        if log::log_enabled!(log::Level::Debug) {
            debug!("[LOOKUP] Loaded domains: {}", index.domains().collect::<Vec<_>>().join(", "));
        }
        Ok(index)
    }

    pub async fn lookup(&self, domain: &str) -> LookupOutcome {
        let transaction = start_trace_transaction("lookup", "certificate");
        let outcome = match self.load_index().await {
            Ok(index) => match index.resolve(domain) {
                Some(record) => LookupOutcome::Found(record.pem.clone()),
                None => LookupOutcome::NotFound,
            },
            Err(error) => LookupOutcome::SourceError(error),
        };
        finish_trace_transaction(transaction, outcome.label());
        outcome
    }
}
