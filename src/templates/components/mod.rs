pub mod error;
pub mod filters;
pub mod movie_card;
pub mod pagination;
pub mod streaming;

pub use error::html_error_response;
pub use filters::filter_panel;
pub use movie_card::{movie_card, poster_image, poster_placeholder};
pub use pagination::pagination_nav;
pub use streaming::{no_streaming_data, streaming_badges};
