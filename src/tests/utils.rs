use astra::{Body, Request};
use http::Method;

use crate::catalog::{Catalog, Movie};
use crate::router::AppState;

/// Shorthand movie constructor for tests; fields not under test get
/// neutral values.
pub fn movie(
    id: &str,
    title: &str,
    genres: &str,
    year: i32,
    rating: f64,
    runtime: u32,
    director: &str,
) -> Movie {
    Movie {
        title_id: id.to_string(),
        primary_title: title.to_string(),
        original_title: title.to_string(),
        average_rating: rating,
        num_votes: 100,
        start_year: year,
        runtime_minutes: runtime,
        genres: genres.to_string(),
        foreign_flag: false,
        directors: String::new(),
        primary_name: director.to_string(),
    }
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie("tt0001", "Alpha", "Drama", 2000, 7.0, 90, "X"),
        movie("tt0002", "Beta", "Drama,Comedy", 2010, 5.0, 120, "Y"),
        movie("tt0003", "Gamma", "Thriller", 2015, 8.2, 105, "X"),
    ]
}

/// App state with no enrichment clients configured, so handlers exercise
/// the degraded paths without touching the network.
pub fn make_state(movies: Vec<Movie>, page_size: usize) -> AppState {
    AppState {
        catalog: Catalog::from_movies(movies),
        page_size,
        omdb: None,
        justwatch: None,
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("test request")
}

/// Drains a response body into a string.
pub fn body_string(resp: &mut astra::Response) -> String {
    use std::io::Read;

    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read response body");
    String::from_utf8(bytes).expect("utf-8 response body")
}
