use crate::api::HttpApi;
use crate::app::App;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::{Request, Server};
use std::time::Instant;
use tracing::{error, info};

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod listview;
mod logging;
mod responses;
mod router;
mod screens;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging
    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("❌ Logging setup failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ API client
    let api = match HttpApi::new(&config.api_url, config.api_token.clone(), config.http_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "could not build API client");
            std::process::exit(1);
        }
    };
    if config.api_token.is_none() {
        info!("no API token configured, admin endpoints will likely answer 401");
    }

    let app = App::new(Box::new(api), config.page_size)
        .with_image_base_url(config.image_base_url.clone());

    // 4️⃣ Start the server
    let addr = config.bind;
    info!(%addr, api_url = %config.api_url, workers = config.workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.workers);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => html_error_response(err),
        };

        info!(
            %method,
            path = %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
