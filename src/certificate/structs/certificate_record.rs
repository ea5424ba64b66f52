#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    /// Formatted domains, main domain first, then the SANs in stored order.
    pub domains: Vec<String>,
    /// Certificate chain and private key, newline terminated.
    pub pem: String,
}
