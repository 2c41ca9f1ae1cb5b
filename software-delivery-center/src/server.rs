use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{build_config, initialize_telemetry, ServiceProvider};

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config) {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(service_provider.config().telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host().clone();
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(cors)
            .app_data(web::Data::from(sp.clone()))
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(api::software::list_softwares)
            .service(api::software::software_overview)
            .service(api::software::list_deployment_tasks)
            .service(api::software::deployment_overview)
    })
    .bind((host.bind_address().to_owned(), *host.bind_port()))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
