pub mod facets;
pub mod filter;
pub mod loader;
pub mod movie;
pub mod paginate;

pub use movie::{Movie, MovieFilters};

/// The loaded dataset plus its derived facet lists.
///
/// Records are immutable for the lifetime of the session, so the facets are
/// computed once here rather than per request.
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
}

impl Catalog {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genres = facets::unique_genres(&movies);
        let directors = facets::unique_directors(&movies);
        Self {
            movies,
            genres,
            directors,
        }
    }
}
