use maud::{html, Markup};

use crate::catalog::movie::{
    ALL, DEFAULT_RATING_RANGE, DEFAULT_RUNTIME_RANGE, DEFAULT_YEAR_RANGE,
};
use crate::catalog::MovieFilters;

/// The filter form. Submits back to `/` as a plain GET so the whole filter
/// state lives in the query string.
pub fn filter_panel(filters: &MovieFilters, genres: &[String], directors: &[String]) -> Markup {
    let active = active_filter_count(filters);

    html! {
        section class="filter-panel" {
            div class="filter-head" {
                h2 { "Filter Movies" }
                @if active > 0 {
                    span class="chip chip-active" { (active) " active" }
                }
                a class="clear-filters" href="/" { "Clear" }
            }

            form method="get" action="/" {
                div class="filter-row" {
                    label for="title" { "Search by title" }
                    input type="text" id="title" name="title" value=(filters.title);

                    label for="genre" { "Genre" }
                    select id="genre" name="genre" {
                        option value=(ALL) selected[filters.genre == ALL] { "All Genres" }
                        @for g in genres {
                            option value=(g) selected[filters.genre == *g] { (g) }
                        }
                    }

                    label for="director" { "Director" }
                    select id="director" name="director" {
                        option value=(ALL) selected[filters.director == ALL] { "All Directors" }
                        @for d in directors {
                            option value=(d) selected[filters.director == *d] { (d) }
                        }
                    }
                }

                div class="filter-row" {
                    fieldset {
                        legend { "Year" }
                        input type="number" name="year_min" value=(filters.year_range.0);
                        " – "
                        input type="number" name="year_max" value=(filters.year_range.1);
                    }
                    fieldset {
                        legend { "IMDB Rating" }
                        input type="number" step="0.1" min="0" max="10" name="rating_min" value=(filters.rating_range.0);
                        " – "
                        input type="number" step="0.1" min="0" max="10" name="rating_max" value=(filters.rating_range.1);
                    }
                    fieldset {
                        legend { "Runtime (mins)" }
                        input type="number" min="0" name="runtime_min" value=(filters.runtime_range.0);
                        " – "
                        input type="number" min="0" name="runtime_max" value=(filters.runtime_range.1);
                    }
                }

                button type="submit" { "Apply" }
            }
        }
    }
}

fn active_filter_count(filters: &MovieFilters) -> usize {
    [
        !filters.title.is_empty(),
        filters.genre != ALL,
        filters.director != ALL,
        filters.year_range != DEFAULT_YEAR_RANGE,
        filters.rating_range != DEFAULT_RATING_RANGE,
        filters.runtime_range != DEFAULT_RUNTIME_RANGE,
    ]
    .iter()
    .filter(|&&on| on)
    .count()
}
