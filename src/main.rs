use crate::config::Config;
use crate::engine::Catalog;
use crate::router::{serve, AppState};
use crate::store::load_properties;
use astra::Server;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod engine;
mod errors;
mod responses;
mod router;
mod store;


fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Data is loaded once; without it there is nothing to serve.
    let records = match load_properties(&config.data) {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "failed to load property data");
            std::process::exit(1);
        }
    };

    let state = AppState {
        catalog: Catalog::new(records),
        environment: config.environment,
    };

    if state.catalog.is_empty() {
        warn!(path = %config.data.display(), "property data file holds no listings");
    }

    let addr = config.addr();
    info!(
        %addr,
        properties = state.catalog.len(),
        environment = ?state.environment,
        "Property Listings API starting"
    );

    let server = Server::bind(&addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| serve(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
