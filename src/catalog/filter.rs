use crate::catalog::movie::ALL;
use crate::catalog::{Movie, MovieFilters};

/// Applies every filter conjunctively over a single linear pass, keeping
/// matching records in their original order.
///
/// The genre test is a substring match against the raw comma-joined
/// `genres` string, not against the split token list, so a genre whose
/// name is a substring of a longer genre name also matches. That behavior
/// is deliberate; do not tighten it to a token-exact comparison.
pub fn filter_movies(movies: &[Movie], filters: &MovieFilters) -> Vec<Movie> {
    let title_query = filters.title.to_lowercase();

    movies
        .iter()
        .filter(|movie| {
            if !title_query.is_empty()
                && !movie.primary_title.to_lowercase().contains(&title_query)
            {
                return false;
            }

            if filters.genre != ALL && !movie.genres.contains(&filters.genre) {
                return false;
            }

            if filters.director != ALL && movie.primary_name != filters.director {
                return false;
            }

            let (year_min, year_max) = filters.year_range;
            if movie.start_year < year_min || movie.start_year > year_max {
                return false;
            }

            let (rating_min, rating_max) = filters.rating_range;
            if movie.average_rating < rating_min || movie.average_rating > rating_max {
                return false;
            }

            let (runtime_min, runtime_max) = filters.runtime_range;
            if movie.runtime_minutes < runtime_min || movie.runtime_minutes > runtime_max {
                return false;
            }

            true
        })
        .cloned()
        .collect()
}
