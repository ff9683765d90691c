use crate::app::App;
use crate::backend::HttpBackend;
use crate::config::AppConfig;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod backend;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod session;
mod templates;


fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classifieds_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let backend = match HttpBackend::new(&config.api_base_url, config.api_timeout) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Could not build the API client: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    tracing::info!(api = %config.api_base_url, "Starting server at http://{addr}");

    let app = App::new(config, backend);
    let result = Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| router::respond(req, &app));

    match result {
        Ok(()) => tracing::info!("Server shut down cleanly."),
        Err(e) => tracing::error!(error = %e, "Server ended with error"),
    }
}
