pub mod error;
pub mod justwatch;
pub mod omdb;

pub use error::EnrichmentError;
pub use justwatch::{JustWatchClient, StreamingOffer};
pub use omdb::{OmdbClient, OmdbConfig};
