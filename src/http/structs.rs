/// Shared state handed to every request handler.
pub mod http_service_data;

/// Query parameters of a certificate request.
pub mod get_certificate_query;
