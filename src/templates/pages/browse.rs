use maud::{html, Markup};

use crate::catalog::{Movie, MovieFilters};
use crate::templates::components::{filter_panel, movie_card, pagination_nav};
use crate::templates::desktop_layout;

pub struct BrowseVm<'a> {
    pub filters: &'a MovieFilters,
    pub genres: &'a [String],
    pub directors: &'a [String],
    pub movies: &'a [Movie],
    pub total_matches: usize,
    pub catalog_size: usize,
    pub page: usize,
    pub page_count: usize,
    pub posters_enabled: bool,
}

pub fn browse_page(vm: &BrowseVm) -> Markup {
    desktop_layout(
        "Film Finder",
        vm.catalog_size,
        html! {
            main class="container" {
                h1 { "Discover Amazing Movies" }

                (filter_panel(vm.filters, vm.genres, vm.directors))

                div class="results-head" {
                    h2 { (vm.total_matches) " movies found" }
                    (pagination_nav(vm.filters, vm.page, vm.page_count))
                }

                @if vm.movies.is_empty() {
                    div class="empty-state" {
                        p { "No movies found" }
                        p class="hint" { "Try adjusting your filters to see more results" }
                    }
                } @else {
                    div class="card-grid" {
                        @for movie in vm.movies {
                            (movie_card(movie, vm.posters_enabled))
                        }
                    }

                    div class="results-foot" {
                        (pagination_nav(vm.filters, vm.page, vm.page_count))
                    }
                }
            }
        },
    )
}
