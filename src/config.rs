use std::env;
use std::net::SocketAddr;

use crate::catalog::paginate::DEFAULT_PAGE_SIZE;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATA_PATH: &str = "data/movies.csv";

/// Process configuration, read once from the environment at startup and
/// passed down explicitly. Credentials live here, never in source.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: String,
    pub addr: SocketAddr,
    pub page_size: usize,
    /// Absent key disables poster enrichment entirely.
    pub omdb_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let addr = env::var("FILM_FINDER_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    log::warn!("FILM_FINDER_ADDR is not a socket address, using {DEFAULT_ADDR}");
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_ADDR.parse().unwrap());

        let page_size = env::var("FILM_FINDER_PAGE_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            data_path: env::var("FILM_FINDER_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.into()),
            addr,
            page_size,
            omdb_api_key: env::var("OMDB_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}
