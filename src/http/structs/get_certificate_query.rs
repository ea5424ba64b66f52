/// Other parameters sent by the proxy (`signature_schemes`, `cipher_suites`,
/// `local_ip`, `remote_ip`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCertificateQuery {
    pub server_name: Option<String>,
}
