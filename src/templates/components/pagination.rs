use maud::{html, Markup};
use url::form_urlencoded;

use crate::catalog::movie::{
    ALL, DEFAULT_RATING_RANGE, DEFAULT_RUNTIME_RANGE, DEFAULT_YEAR_RANGE,
};
use crate::catalog::MovieFilters;

/// Numbered page links plus prev/next, carrying the current filter state
/// through each link's query string.
pub fn pagination_nav(filters: &MovieFilters, page: usize, page_count: usize) -> Markup {
    if page_count <= 1 {
        return html! {};
    }

    html! {
        nav class="pagination" {
            @if page > 1 {
                a href=(browse_href(filters, page - 1)) { "‹ Prev" }
            }
            @for item in page_items(page, page_count) {
                @match item {
                    Some(n) => {
                        @if n == page {
                            span class="page-current" { (n) }
                        } @else {
                            a href=(browse_href(filters, n)) { (n) }
                        }
                    },
                    None => span class="page-gap" { "…" },
                }
            }
            @if page < page_count {
                a href=(browse_href(filters, page + 1)) { "Next ›" }
            }
        }
    }
}

/// Page numbers to show: the first, the last, and a window around the
/// current page, with `None` marking a collapsed gap.
fn page_items(page: usize, page_count: usize) -> Vec<Option<usize>> {
    const WINDOW: usize = 2;

    let mut items = Vec::new();
    let mut gap_open = false;
    for n in 1..=page_count {
        let in_window = n.abs_diff(page) <= WINDOW;
        if n == 1 || n == page_count || in_window {
            items.push(Some(n));
            gap_open = false;
        } else if !gap_open {
            items.push(None);
            gap_open = true;
        }
    }
    items
}

/// Builds a `/?...` link for the given filters and page, writing only the
/// parameters that differ from their defaults.
pub fn browse_href(filters: &MovieFilters, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !filters.title.is_empty() {
        query.append_pair("title", &filters.title);
    }
    if filters.genre != ALL {
        query.append_pair("genre", &filters.genre);
    }
    if filters.director != ALL {
        query.append_pair("director", &filters.director);
    }
    if filters.year_range != DEFAULT_YEAR_RANGE {
        query.append_pair("year_min", &filters.year_range.0.to_string());
        query.append_pair("year_max", &filters.year_range.1.to_string());
    }
    if filters.rating_range != DEFAULT_RATING_RANGE {
        query.append_pair("rating_min", &filters.rating_range.0.to_string());
        query.append_pair("rating_max", &filters.rating_range.1.to_string());
    }
    if filters.runtime_range != DEFAULT_RUNTIME_RANGE {
        query.append_pair("runtime_min", &filters.runtime_range.0.to_string());
        query.append_pair("runtime_max", &filters.runtime_range.1.to_string());
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }

    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_items_window_around_the_current_page() {
        assert_eq!(
            page_items(1, 4),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
        assert_eq!(
            page_items(10, 20),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn default_filters_produce_a_bare_link() {
        assert_eq!(browse_href(&MovieFilters::default(), 1), "/");
    }

    #[test]
    fn only_non_default_parameters_appear() {
        let filters = MovieFilters {
            genre: "Drama".to_string(),
            ..MovieFilters::default()
        };

        assert_eq!(browse_href(&filters, 3), "/?genre=Drama&page=3");
    }

    #[test]
    fn titles_are_url_encoded() {
        let filters = MovieFilters {
            title: "the good & bad".to_string(),
            ..MovieFilters::default()
        };

        let href = browse_href(&filters, 1);
        assert_eq!(href, "/?title=the+good+%26+bad");
    }
}
