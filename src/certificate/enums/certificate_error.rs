use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("field \"{field}\" is not valid base64")]
    Base64Decode {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },
}
