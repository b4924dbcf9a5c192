use std::sync::Arc;

use astra::Server;

use crate::catalog::{loader::load_catalog, Catalog};
use crate::config::AppConfig;
use crate::enrichment::{JustWatchClient, OmdbClient, OmdbConfig};
use crate::router::{handle, AppState};

mod catalog;
mod config;
mod enrichment;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    pretty_env_logger::init();

    let config = AppConfig::from_env();

    // Load the catalog once; it is immutable for the session's lifetime.
    // A fetch/parse failure here is fatal, with no retry.
    let movies = match load_catalog(&config.data_path) {
        Ok(movies) => movies,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    log::info!("loaded {} movies from {}", movies.len(), config.data_path);

    let catalog = Catalog::from_movies(movies);
    log::info!(
        "{} genres, {} directors",
        catalog.genres.len(),
        catalog.directors.len()
    );

    let omdb = match config.omdb_api_key.clone() {
        Some(api_key) => match OmdbClient::new(OmdbConfig { api_key }) {
            Ok(client) => Some(client),
            Err(e) => {
                log::warn!("poster lookups disabled: {e}");
                None
            }
        },
        None => {
            log::warn!("OMDB_API_KEY not set, poster lookups disabled");
            None
        }
    };

    let justwatch = match JustWatchClient::new() {
        Ok(client) => Some(client),
        Err(e) => {
            log::warn!("streaming lookups disabled: {e}");
            None
        }
    };

    let state = Arc::new(AppState {
        catalog,
        page_size: config.page_size,
        omdb,
        justwatch,
    });

    println!("Starting server at http://{}", config.addr);

    let server = Server::bind(config.addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
