use std::collections::BTreeSet;

use crate::catalog::Movie;

/// Distinct genre names across the catalog, sorted ascending.
///
/// Splits each record's comma-joined `genres` field and trims the parts;
/// empty parts are dropped.
pub fn unique_genres(movies: &[Movie]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for movie in movies {
        for genre in movie.genre_list() {
            set.insert(genre.to_string());
        }
    }
    set.into_iter().collect()
}

/// Distinct director names across the catalog, sorted ascending. Names are
/// taken verbatim, never split.
pub fn unique_directors(movies: &[Movie]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for movie in movies {
        if !movie.primary_name.is_empty() {
            set.insert(movie.primary_name.clone());
        }
    }
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::movie;

    #[test]
    fn genres_are_split_trimmed_deduped_and_sorted() {
        let movies = vec![
            movie("tt1", "Alpha", "Drama, Comedy", 2000, 7.0, 90, "X"),
            movie("tt2", "Beta", "Comedy,Thriller", 2010, 5.0, 120, "Y"),
            movie("tt3", "Gamma", "", 2015, 6.0, 100, "Z"),
        ];

        let genres = unique_genres(&movies);
        assert_eq!(genres, vec!["Comedy", "Drama", "Thriller"]);
    }

    #[test]
    fn directors_are_deduped_sorted_and_never_split() {
        let movies = vec![
            movie("tt1", "Alpha", "Drama", 2000, 7.0, 90, "Wachowski, Lana"),
            movie("tt2", "Beta", "Drama", 2010, 5.0, 120, "Anderson, Wes"),
            movie("tt3", "Gamma", "Drama", 2015, 6.0, 100, "Wachowski, Lana"),
            movie("tt4", "Delta", "Drama", 2018, 6.5, 100, ""),
        ];

        let directors = unique_directors(&movies);
        // A comma inside a name stays one entry; empties are dropped.
        assert_eq!(directors, vec!["Anderson, Wes", "Wachowski, Lana"]);
    }
}
