use crate::certificate::certificate::format_domain;
use crate::certificate::structs::certificate_record::CertificateRecord;
use crate::index::structs::certificate_index::CertificateIndex;

impl CertificateIndex {
    /// Concatenates per-source record lists, preserving their order. No
    /// deduplication happens here.
    pub fn merge(sources: Vec<Vec<CertificateRecord>>) -> CertificateIndex {
        CertificateIndex {
            records: sources.into_iter().flatten().collect(),
        }
    }

    pub fn resolve(&self, domain: &str) -> Option<&CertificateRecord> {
        let domain = format_domain(domain);
        self.records.iter().find(|record| record.domains.contains(&domain))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.records.iter().flat_map(|record| record.domains.iter().map(String::as_str))
    }
}
