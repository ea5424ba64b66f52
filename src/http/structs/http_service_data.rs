use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::lookup::structs::lookup_service::LookupService;

#[derive(Debug)]
pub struct HttpServiceData {
    pub lookup_service: Arc<LookupService>,
    pub http_server_config: Arc<HttpServerConfig>
}
