use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use acme_cert_bridge::common::common::setup_logging;
use acme_cert_bridge::config::structs::configuration::Configuration;
use acme_cert_bridge::http::http::http_service;
use acme_cert_bridge::http::structs::http_service_data::HttpServiceData;
use acme_cert_bridge::lookup::structs::lookup_service::LookupService;
use acme_cert_bridge::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = config.apply_env_overrides().and_then(|_| config.validate()) {
        eprintln!("[VALIDATE] {}", e);
        exit(101);
    }

    let config = Arc::new(config);

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    for source in &config.storage.sources {
        info!("[BOOT] Storage source: {}", source);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let address: SocketAddr = match config.http_server.bind_address.parse() {
                Ok(address) => address,
                Err(e) => {
                    error!("[BOOT] Invalid bind address {}: {}", config.http_server.bind_address, e);
                    exit(101);
                }
            };

            let data = Arc::new(HttpServiceData {
                lookup_service: Arc::new(LookupService::from_config(&config.storage)),
                http_server_config: Arc::new(config.http_server.clone()),
            });

            let (handle, server) = match http_service(address, data) {
                Ok(service) => service,
                Err(e) => {
                    error!("[BOOT] Unable to bind to {}: {}", address, e);
                    exit(1);
                }
            };
            let server_task = tokio::spawn(server);
            info!("[BOOT] Listening at http://{}", address);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    info!("Server shutting down completed");
                    Ok(())
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(e)) => {
                            error!("[HTTP] Server stopped: {}", e);
                            Err(e)
                        }
                        Err(e) => {
                            error!("[HTTP] Server task failed: {}", e);
                            Err(std::io::Error::other(e))
                        }
                    }
                }
            }
        })
}
