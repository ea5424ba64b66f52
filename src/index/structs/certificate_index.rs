use crate::certificate::structs::certificate_record::CertificateRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateIndex {
    pub records: Vec<CertificateRecord>,
}
