use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::{self, ContentType};
use actix_web::http::Method;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info, warn};
use crate::common::common::error_chain;
use crate::http::structs::get_certificate_query::GetCertificateQuery;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::lookup::enums::lookup_outcome::LookupOutcome;
use crate::lookup::structs::lookup_service::LookupService;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.default_service(web::route().to(http_service_get_certificate));
    })
}

pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let config = data.http_server_config.clone();

    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .max_connections(config.max_connections as usize)
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn http_service_get_certificate(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    info!("[HTTP] Request: {} {}", request.method(), request.uri());

    if request.method() != Method::GET {
        warn!("[HTTP] Method not allowed: {}", request.method());
        return HttpResponse::MethodNotAllowed().insert_header((header::ALLOW, "GET")).finish();
    }

    let query = match GetCertificateQuery::from_query_string(request.query_string()) {
        Ok(query) => query,
        Err(e) => {
            warn!("[HTTP] Unparsable query string: {}", e);
            return HttpResponse::BadRequest().finish();
        }
    };

    let Some(domain) = query.server_name else {
        warn!("[HTTP] Missing \"server_name\" query parameter");
        return HttpResponse::BadRequest().finish();
    };

    http_service_lookup_response(&data.lookup_service, &domain).await
}

/// Maps a lookup outcome to the wire response. Source errors are only
/// reported through logs and Sentry, never in the body.
pub async fn http_service_lookup_response(lookup_service: &LookupService, domain: &str) -> HttpResponse
{
    match lookup_service.lookup(domain).await {
        LookupOutcome::Found(pem) => {
            info!("[HTTP] Certificate served for domain: {}", domain);
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(pem)
        }
        LookupOutcome::NotFound => {
            warn!("[HTTP] Certificate not found for domain: {}", domain);
            HttpResponse::NotFound().finish()
        }
        LookupOutcome::SourceError(e) => {
            error!("[HTTP] Certificate lookup failed for domain {}: {}", domain, error_chain(&e));
            sentry::capture_error(&e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
