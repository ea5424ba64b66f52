use log::debug;
use serde_json::{Map, Value};
use crate::storage::enums::schema_constraint::SchemaConstraint;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::schema_violation::SchemaViolation;
use crate::storage::structs::source_ref::SourceRef;
use crate::storage::structs::storage_certificate::StorageCertificate;
use crate::storage::structs::storage_domain::StorageDomain;
use crate::storage::structs::storage_entry::StorageEntry;
use crate::storage::structs::validated_storage::ValidatedStorage;
use crate::storage::traits::storage_reader::StorageReader;

pub const ROOT_PATH: &str = "$";

/// Reads `source` through `reader` and returns the validated document.
pub async fn parse_source<R: StorageReader + ?Sized>(reader: &R, source: &SourceRef) -> Result<ValidatedStorage, StorageError>
{
    let data = reader.read(source).await.map_err(|e| StorageError::SourceUnreadable {
        source_ref: source.clone(),
        source: e,
    })?;
    parse_document(source, &data)
}

pub fn parse_document(source: &SourceRef, data: &[u8]) -> Result<ValidatedStorage, StorageError>
{
    let document: Value = serde_json::from_slice(data).map_err(|e| StorageError::MalformedJson {
        source_ref: source.clone(),
        source: e,
    })?;
    let entries = validate_storage(&document).map_err(|e| StorageError::SchemaViolation {
        source_ref: source.clone(),
        source: e,
    })?;
    debug!("[STORAGE] Validated {} resolver entries in {}", entries.len(), source);
    Ok(ValidatedStorage {
        source: source.clone(),
        entries,
    })
}

/// Checks the whole document, down to every certificate of every entry,
/// and converts it into typed entries in document order.
pub fn validate_storage(document: &Value) -> Result<Vec<StorageEntry>, SchemaViolation>
{
    let object = expect_object(document, ROOT_PATH)?;
    let mut entries = Vec::with_capacity(object.len());
    for (resolver, value) in object {
        let path = child_path(ROOT_PATH, resolver);
        if resolver.is_empty() {
            return Err(SchemaViolation::new(&path, SchemaConstraint::EmptyResolverName));
        }
        entries.push(validate_entry(resolver, value, &path)?);
    }
    Ok(entries)
}

pub fn validate_entry(resolver: &str, value: &Value, path: &str) -> Result<StorageEntry, SchemaViolation>
{
    let object = expect_object(value, path)?;
    let certificates_path = child_path(path, "Certificates");
    let certificates = expect_array(required_field(object, "Certificates", &certificates_path)?, &certificates_path)?;
    if certificates.is_empty() {
        return Err(SchemaViolation::new(&certificates_path, SchemaConstraint::EmptyCertificates));
    }
    let certificates = certificates
        .iter()
        .enumerate()
        .map(|(index, certificate)| validate_certificate(certificate, &format!("{}[{}]", certificates_path, index)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StorageEntry {
        resolver: resolver.to_string(),
        certificates,
    })
}

pub fn validate_certificate(value: &Value, path: &str) -> Result<StorageCertificate, SchemaViolation>
{
    let object = expect_object(value, path)?;
    let domain_path = child_path(path, "domain");
    let domain = validate_domain(required_field(object, "domain", &domain_path)?, &domain_path)?;
    let certificate_path = child_path(path, "certificate");
    let certificate = expect_string(required_field(object, "certificate", &certificate_path)?, &certificate_path)?;
    let key_path = child_path(path, "key");
    let key = expect_string(required_field(object, "key", &key_path)?, &key_path)?;
    Ok(StorageCertificate {
        domain,
        certificate: certificate.to_string(),
        key: key.to_string(),
    })
}

pub fn validate_domain(value: &Value, path: &str) -> Result<StorageDomain, SchemaViolation>
{
    let object = expect_object(value, path)?;
    let main_path = child_path(path, "main");
    let main = expect_string(required_field(object, "main", &main_path)?, &main_path)?;
    let sans_path = child_path(path, "sans");
    let sans = match object.get("sans") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let sans = expect_array(value, &sans_path)?
                .iter()
                .enumerate()
                .map(|(index, san)| expect_string(san, &format!("{}[{}]", sans_path, index)).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;
            Some(sans)
        }
    };
    Ok(StorageDomain {
        main: main.to_string(),
        sans,
    })
}

/// Appends `key` to a JSONPath-like location. Keys that are not plain
/// identifiers are written in bracket notation.
pub fn child_path(parent: &str, key: &str) -> String
{
    let plain = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if plain {
        format!("{}.{}", parent, key)
    } else {
        format!("{}[{}]", parent, Value::String(key.to_string()))
    }
}

fn required_field<'a>(object: &'a Map<String, Value>, name: &str, path: &str) -> Result<&'a Value, SchemaViolation>
{
    object.get(name).ok_or_else(|| SchemaViolation::new(path, SchemaConstraint::MissingField))
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaViolation>
{
    value.as_object().ok_or_else(|| SchemaViolation::new(path, SchemaConstraint::ExpectedObject))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaViolation>
{
    value.as_array().ok_or_else(|| SchemaViolation::new(path, SchemaConstraint::ExpectedArray))
}

fn expect_string<'a>(value: &'a Value, path: &str) -> Result<&'a str, SchemaViolation>
{
    value.as_str().ok_or_else(|| SchemaViolation::new(path, SchemaConstraint::ExpectedString))
}
