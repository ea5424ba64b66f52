use crate::storage::structs::storage_domain::StorageDomain;

/// A certificate as persisted by the ACME client. `certificate` and `key`
/// are still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCertificate {
    pub domain: StorageDomain,
    pub certificate: String,
    pub key: String,
}
