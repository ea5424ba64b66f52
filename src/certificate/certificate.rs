use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_record::CertificateRecord;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::storage::{child_path, ROOT_PATH};
use crate::storage::structs::storage_certificate::StorageCertificate;
use crate::storage::structs::storage_domain::StorageDomain;
use crate::storage::structs::validated_storage::ValidatedStorage;

/// Standard alphabet with optional padding and lenient trailing bits, the
/// way browsers' `atob` accepts input.
pub const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn format_domain(domain: &str) -> String
{
    domain.trim().to_lowercase()
}

/// `main` first, then `sans`. An empty `main` is skipped; a `main` that is
/// only whitespace is kept and formats to the empty domain.
pub fn collect_domains(domain: &StorageDomain) -> Vec<String>
{
    std::iter::once(&domain.main)
        .filter(|main| !main.is_empty())
        .chain(domain.sans.iter().flatten())
        .map(|name| format_domain(name))
        .collect()
}

/// Decoded bytes map one to one onto Latin-1 characters, so any payload
/// that is valid base64 yields text.
pub fn decode_base64_text(field: &'static str, encoded: &str) -> Result<String, CertificateError>
{
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = FORGIVING_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| CertificateError::Base64Decode { field, source: e })?;
    Ok(bytes.into_iter().map(char::from).collect())
}

pub fn decode_pem(certificate: &StorageCertificate) -> Result<String, CertificateError>
{
    let chain = decode_base64_text("certificate", &certificate.certificate)?;
    let key = decode_base64_text("key", &certificate.key)?;
    Ok(format!("{}\n{}\n", chain, key))
}

/// One record per stored certificate, in document order. The first
/// undecodable certificate fails the whole source.
pub fn normalize_storage(storage: &ValidatedStorage) -> Result<Vec<CertificateRecord>, StorageError>
{
    let mut records = Vec::with_capacity(storage.certificate_count());
    for entry in &storage.entries {
        for (index, certificate) in entry.certificates.iter().enumerate() {
            let pem = decode_pem(certificate).map_err(|e| StorageError::CertificateDecode {
                source_ref: storage.source.clone(),
                path: format!("{}[{}]", child_path(&child_path(ROOT_PATH, &entry.resolver), "Certificates"), index),
                source: e,
            })?;
            records.push(CertificateRecord {
                domains: collect_domains(&certificate.domain),
                pem,
            });
        }
    }
    Ok(records)
}
