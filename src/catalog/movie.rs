use serde::Serialize;

/// One catalog entry, as loaded from the IMDb-derived CSV.
///
/// Every field is always populated: the loader substitutes a zero value for
/// anything missing or unparseable, so consumers never see an absent field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub title_id: String,
    pub primary_title: String,
    pub original_title: String,
    pub average_rating: f64,
    pub num_votes: u32,
    pub start_year: i32,
    pub runtime_minutes: u32,
    /// Comma-joined genre names, exactly as in the source (untrimmed).
    pub genres: String,
    pub foreign_flag: bool,
    /// Raw `directors` schema column. The dataset only ever names one
    /// director per row via `primary_name`; this column is carried through
    /// but not used by any filter.
    pub directors: String,
    /// The director's name.
    pub primary_name: String,
}

impl Movie {
    /// Genre names split out of the comma-joined field, trimmed, empties
    /// dropped. Used for display chips and facet extraction.
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }
}

/// The current set of user-chosen filter constraints.
///
/// `genre` and `director` use the literal `"All"` as the no-constraint
/// marker. Ranges are inclusive on both ends and carry no ordering
/// invariant: a min above its max simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFilters {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub year_range: (i32, i32),
    pub rating_range: (f64, f64),
    pub runtime_range: (u32, u32),
}

pub const ALL: &str = "All";

pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1900, 2024);
pub const DEFAULT_RATING_RANGE: (f64, f64) = (0.0, 10.0);
pub const DEFAULT_RUNTIME_RANGE: (u32, u32) = (0, 300);

impl Default for MovieFilters {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: ALL.to_string(),
            director: ALL.to_string(),
            year_range: DEFAULT_YEAR_RANGE,
            rating_range: DEFAULT_RATING_RANGE,
            runtime_range: DEFAULT_RUNTIME_RANGE,
        }
    }
}

impl MovieFilters {
    /// True when every constraint sits at its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
